use anyhow::Result;
use clap::Parser;

use git_release::config::{load_settings, ReleaseConfig, Verbosity};
use git_release::git::Git2Repository;
use git_release::release::{self, ReleaseOutcome};
use git_release::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    version,
    about = "Create versioned release tags with intelligent defaults and safety checks",
    after_help = "Examples:
  git-release                          # Auto-suggest next tag
  git-release --release-tag=2.0.0      # Use specific tag
  git-release --release-name=\"Holiday\" # Add release name
  git-release --yes                    # Skip confirmation
  git-release --debug                  # Show debug output"
)]
struct Args {
    #[arg(
        long,
        value_name = "TAG",
        help = "Override the suggested release tag (format: ##.##.## with optional 'v' prefix)"
    )]
    release_tag: Option<String>,

    #[arg(
        long,
        value_name = "NAME",
        help = "Release name for the tag message (default: 'Release TAG')"
    )]
    release_name: Option<String>,

    #[arg(short, long, help = "Skip confirmation prompt")]
    yes: bool,

    #[arg(short, long, help = "Suppress informational output")]
    quiet: bool,

    #[arg(
        short,
        long,
        value_name = "LEVEL",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = clap::value_parser!(u8).range(0..=1),
        help = "Verbosity level: 0=normal (default), 1=debug"
    )]
    verbose: Option<u8>,

    #[arg(long, help = "Same as --verbose=1")]
    debug: bool,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ReleaseConfig {
        release_tag: args.release_tag.clone(),
        release_name: args.release_name.clone(),
        yes: args.yes,
        verbosity: Verbosity::from_flags(args.quiet, args.debug, args.verbose),
    };

    let settings = match load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    match release::run(&repo, &config, &settings, ui::confirm_action) {
        Ok(ReleaseOutcome::Published { .. }) => Ok(()),
        Ok(ReleaseOutcome::Declined) => Ok(()),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
