use std::fmt;

/// Non-fatal findings surfaced during preflight.
/// These are reported to the user but never halt the release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// The integration branch points at a different commit than the
    /// release branch
    IntegrationDivergence {
        release_branch: String,
        integration_branch: String,
        release_commit: Option<String>,
        integration_commit: String,
    },
}

fn short_commit(commit: &str) -> &str {
    if commit.len() > 8 {
        &commit[..8]
    } else {
        commit
    }
}

impl Advisory {
    /// Extra detail lines shown only at debug verbosity.
    pub fn debug_detail(&self) -> Vec<String> {
        match self {
            Advisory::IntegrationDivergence {
                release_branch,
                integration_branch,
                release_commit,
                integration_commit,
            } => {
                let release = release_commit
                    .as_deref()
                    .map(short_commit)
                    .unwrap_or("N/A");
                vec![
                    format!("  {}: {}", release_branch, release),
                    format!("  {}: {}", integration_branch, short_commit(integration_commit)),
                ]
            }
        }
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::IntegrationDivergence {
                release_branch,
                integration_branch,
                ..
            } => {
                write!(
                    f,
                    "'{}' branch differs from '{}' - consider merging before release",
                    integration_branch, release_branch
                )
            }
        }
    }
}
