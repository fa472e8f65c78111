//! Release orchestration.
//!
//! Sequences the preflight pipeline, presents the summary, obtains operator
//! confirmation, and only then performs the two mutating repository calls:
//! create the annotated tag, then push exactly that tag.

use crate::checks;
use crate::config::{ReleaseConfig, Settings, Verbosity};
use crate::error::Result;
use crate::git::Repository;
use crate::ui;

/// How a release invocation ended (absent a fatal error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The tag was created and pushed
    Published { tag: String },

    /// The operator declined the confirmation prompt; nothing was mutated
    Declined,
}

/// Run one complete release.
///
/// The confirmation prompt is injected so the flow can be driven in tests;
/// it is skipped entirely when `config.yes` is set. Declining is a clean
/// outcome, not an error: the caller exits zero and no mutation has
/// happened.
pub fn run<R, F>(
    repo: &R,
    config: &ReleaseConfig,
    settings: &Settings,
    confirm: F,
) -> Result<ReleaseOutcome>
where
    R: Repository,
    F: FnOnce(&str) -> Result<bool>,
{
    let resolved = checks::run_preflight(repo, config, settings)?;

    if let Some(advisory) = &resolved.advisory {
        ui::display_warning(&advisory.to_string());
        for line in advisory.debug_detail() {
            ui::debug(config, &line);
        }
    }

    ui::display_summary(config, &resolved.branch, &resolved.tag);

    let approved = config.yes || confirm("Create this release?")?;
    if !approved {
        ui::emit(config, Verbosity::Normal, "Release aborted.");
        return Ok(ReleaseOutcome::Declined);
    }

    let message = config
        .release_name
        .clone()
        .unwrap_or_else(|| format!("Release {}", resolved.tag));

    ui::debug(
        config,
        &format!("Creating tag '{}' with message: {}", resolved.tag, message),
    );
    repo.create_annotated_tag(&resolved.tag, &message)?;

    ui::debug(
        config,
        &format!("Pushing tag '{}' to {}...", resolved.tag, settings.remote),
    );
    repo.push_tag(&settings.remote, &resolved.tag)?;

    if config.verbosity.at_least(Verbosity::Normal) {
        ui::display_success(&format!(
            "Release {} created and pushed successfully!",
            resolved.tag
        ));
    }

    Ok(ReleaseOutcome::Published { tag: resolved.tag })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{MockCall, MockRepository};

    fn ready_repo() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.set_branch_commit("main", "abc");
        repo.set_branch_commit("origin/main", "abc");
        repo
    }

    fn quiet_config() -> ReleaseConfig {
        ReleaseConfig {
            verbosity: Verbosity::Quiet,
            ..ReleaseConfig::default()
        }
    }

    #[test]
    fn test_declined_confirmation_is_clean_and_mutation_free() {
        let repo = ready_repo();
        let config = quiet_config();

        let outcome =
            run(&repo, &config, &Settings::default(), |_| Ok(false)).unwrap();

        assert_eq!(outcome, ReleaseOutcome::Declined);
        assert!(repo.mutating_calls().is_empty());
    }

    #[test]
    fn test_yes_flag_skips_confirmation() {
        let repo = ready_repo();
        let config = ReleaseConfig {
            yes: true,
            ..quiet_config()
        };

        // The prompt closure must never run when --yes is set
        let outcome = run(&repo, &config, &Settings::default(), |_| {
            panic!("confirmation prompt should not be shown")
        })
        .unwrap();

        assert_eq!(
            outcome,
            ReleaseOutcome::Published {
                tag: "v1.0.0".to_string()
            }
        );
    }

    #[test]
    fn test_default_tag_message() {
        let repo = ready_repo();
        let config = ReleaseConfig {
            yes: true,
            ..quiet_config()
        };

        run(&repo, &config, &Settings::default(), |_| Ok(true)).unwrap();

        let calls = repo.mutating_calls();
        assert_eq!(
            calls[0],
            MockCall::CreateTag {
                name: "v1.0.0".to_string(),
                message: "Release v1.0.0".to_string(),
            }
        );
    }

    #[test]
    fn test_release_name_becomes_tag_message() {
        let repo = ready_repo();
        let config = ReleaseConfig {
            yes: true,
            release_name: Some("Holiday Release".to_string()),
            ..quiet_config()
        };

        run(&repo, &config, &Settings::default(), |_| Ok(true)).unwrap();

        let calls = repo.mutating_calls();
        assert_eq!(
            calls[0],
            MockCall::CreateTag {
                name: "v1.0.0".to_string(),
                message: "Holiday Release".to_string(),
            }
        );
    }

    #[test]
    fn test_advisory_does_not_block_release() {
        let mut repo = MockRepository::new();
        repo.set_branch_commit("main", "abc");
        repo.set_branch_commit("origin/main", "abc");
        repo.set_branch_commit("develop", "def");

        let config = ReleaseConfig {
            yes: true,
            ..quiet_config()
        };

        let outcome = run(&repo, &config, &Settings::default(), |_| Ok(true)).unwrap();
        assert!(matches!(outcome, ReleaseOutcome::Published { .. }));
    }
}
