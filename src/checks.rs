//! Ordered release preconditions.
//!
//! Each check either passes or returns a fatal, user-facing error; the one
//! non-blocking check (integration-branch divergence) returns an
//! [Advisory] instead. Checks never terminate the process themselves; the
//! binary decides what to do with a failure.
//!
//! Stage order is significant: the tag-candidate and duplicate checks read
//! tag state that the fetch stage has just refreshed.

use crate::advisory::Advisory;
use crate::config::{ReleaseConfig, Settings, Verbosity};
use crate::error::{ReleaseError, Result};
use crate::git::Repository;
use crate::ui;
use crate::version;

/// Everything preflight established about the release about to happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRelease {
    /// The branch being released (always the configured release branch)
    pub branch: String,

    /// Canonical marker-prefixed tag to create (e.g., "v1.2.4")
    pub tag: String,

    /// Non-blocking divergence finding, if any
    pub advisory: Option<Advisory>,
}

/// Stage 1: the current branch must be the release branch.
pub fn check_release_branch<R: Repository>(repo: &R, settings: &Settings) -> Result<String> {
    let current = repo.current_branch()?;

    if current != settings.release_branch {
        return Err(ReleaseError::branch(format!(
            "Must be on '{}' branch to create a release (currently on '{}')",
            settings.release_branch, current
        )));
    }

    Ok(current)
}

/// Stage 2: the working tree must be clean.
pub fn check_clean_tree<R: Repository>(repo: &R) -> Result<()> {
    if repo.has_uncommitted_changes()? {
        return Err(ReleaseError::working_tree(
            "You have uncommitted changes. Commit or stash them first.",
        ));
    }

    Ok(())
}

/// Stage 4: validate the explicit override or suggest the next version.
///
/// Returns the candidate exactly as the operator spelled it, or the
/// suggested next version. Callers normalize to the canonical tag form.
pub fn resolve_candidate(config: &ReleaseConfig, tags: &[String]) -> Result<String> {
    if let Some(tag) = &config.release_tag {
        if !version::is_valid_format(tag) {
            return Err(ReleaseError::version(format!(
                "Invalid tag format '{}'. Expected ##.##.## (e.g., 1.2.3 or v1.2.3)",
                tag
            )));
        }
        return Ok(tag.clone());
    }

    Ok(version::suggest_next(tags).to_string())
}

/// Canonical marker-prefixed spelling of a candidate tag.
pub fn canonical_tag(candidate: &str) -> String {
    let body = candidate.strip_prefix('v').unwrap_or(candidate);
    format!("v{}", body)
}

/// Stage 5: the candidate must not name an existing release under any
/// marker spelling.
pub fn check_duplicate(final_tag: &str, tags: &[String]) -> Result<()> {
    if version::tag_exists(final_tag, tags) {
        return Err(ReleaseError::tag(format!(
            "Tag '{}' already exists. Choose a different version.",
            final_tag
        )));
    }

    Ok(())
}

/// Stage 6: the release branch must match its remote counterpart.
///
/// A remote reference that does not resolve is treated the same as a
/// divergence: a branch that was never pushed cannot be released.
pub fn check_unpushed<R: Repository>(repo: &R, settings: &Settings) -> Result<()> {
    let branch = &settings.release_branch;
    let local = repo.branch_commit(branch)?;
    let remote = repo.branch_commit(&format!("{}/{}", settings.remote, branch))?;

    let in_sync = matches!((&local, &remote), (Some(l), Some(r)) if l == r);
    if !in_sync {
        return Err(ReleaseError::branch(format!(
            "You have unpushed commits on '{}'. Push them first or pull latest.",
            branch
        )));
    }

    Ok(())
}

/// Stage 7 (non-fatal): report when the integration branch points at a
/// different commit than the release branch.
///
/// A repository without an integration branch is a normal shape, not an
/// anomaly; that case produces neither an error nor an advisory.
pub fn check_divergence<R: Repository>(
    repo: &R,
    config: &ReleaseConfig,
    settings: &Settings,
) -> Result<Option<Advisory>> {
    let release_commit = repo.branch_commit(&settings.release_branch)?;
    let integration_commit = match repo.branch_commit(&settings.integration_branch)? {
        Some(commit) => commit,
        None => {
            ui::debug(
                config,
                &format!(
                    "No '{}' branch found (this is fine)",
                    settings.integration_branch
                ),
            );
            return Ok(None);
        }
    };

    if release_commit.as_deref() == Some(integration_commit.as_str()) {
        return Ok(None);
    }

    Ok(Some(Advisory::IntegrationDivergence {
        release_branch: settings.release_branch.clone(),
        integration_branch: settings.integration_branch.clone(),
        release_commit,
        integration_commit,
    }))
}

/// Run every precondition in order and resolve the final tag.
///
/// Fails fast: the first violated precondition stops the pipeline and no
/// later stage runs. No mutating repository call happens here.
pub fn run_preflight<R: Repository>(
    repo: &R,
    config: &ReleaseConfig,
    settings: &Settings,
) -> Result<ResolvedRelease> {
    let branch = check_release_branch(repo, settings)?;
    ui::debug(config, &format!("Current branch: {}", branch));

    check_clean_tree(repo)?;

    ui::debug(
        config,
        &format!("Fetching tags from {}...", settings.remote),
    );
    repo.fetch_tags(&settings.remote)?;

    let tags = repo.list_tags()?;
    ui::debug(config, &format!("Found {} existing tags", tags.len()));

    let candidate = resolve_candidate(config, &tags)?;
    if config.release_tag.is_none() {
        ui::emit(
            config,
            Verbosity::Normal,
            &format!("Suggested next version: {}", candidate),
        );
    }

    let final_tag = canonical_tag(&candidate);
    check_duplicate(&final_tag, &tags)?;

    check_unpushed(repo, settings)?;

    let advisory = check_divergence(repo, config, settings)?;

    Ok(ResolvedRelease {
        branch,
        tag: final_tag,
        advisory,
    })
}
