use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use verbump::cli::commands::{self, LatestArgs};
use verbump::git::Git2TagSource;
use verbump::{config, logging, ui, Segment, TagPattern, VersionBump};

#[derive(Parser)]
#[command(
    name = "verbump",
    version,
    about = "Parse, compare and bump loosely formatted version strings"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log output (-v, -vv, -vvv)"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show how a version string is understood
    Parse {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(long, help = "Fail when the text is not a valid version")]
        strict: bool,
    },

    /// Compare two versions and print <, = or >
    Compare {
        #[arg(value_name = "VERSION")]
        lhs: String,

        #[arg(value_name = "OTHER")]
        rhs: String,
    },

    /// Increment one segment of a version
    Bump {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(short, long, help = "major, minor, patch, build or last [default: from config]")]
        part: Option<VersionBump>,
    },

    /// Overwrite one segment of a version
    Set {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(short, long, help = "major, minor, patch or build")]
        part: Segment,

        #[arg(long, help = "New value for the segment")]
        value: u32,
    },

    /// Sort versions from oldest to newest
    Sort {
        #[arg(value_name = "VERSION", required = true)]
        inputs: Vec<String>,

        #[arg(short, long, help = "Newest first")]
        reverse: bool,
    },

    /// Find the newest release tag in a git repository
    Latest {
        #[arg(long, default_value = ".", help = "Repository path")]
        repo: PathBuf,

        #[arg(long, help = "Installed version to check for an update")]
        current: Option<String>,

        #[arg(long, help = "Consider alpha, beta and other suffixed versions")]
        include_unstable: bool,

        #[arg(long, help = "Tag pattern such as v{version} [default: from config]")]
        pattern: Option<String>,
    },
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    match args.command {
        Command::Parse { input, strict } => {
            let (version, warning) = commands::inspect(&input, strict)?;
            if let Some(warning) = warning {
                ui::display_warning(&warning);
            }
            ui::display_version_details(&version);
        }
        Command::Compare { lhs, rhs } => {
            let ordering = commands::compare(&lhs, &rhs)?;
            println!("{}", ui::format_ordering(ordering));
        }
        Command::Bump { input, part } => {
            let bump_type = part.unwrap_or(config.bump.default);
            let version = commands::bump(&input, bump_type)?;
            println!("{}", version);
        }
        Command::Set {
            input,
            part,
            value,
        } => {
            let (version, warning) = commands::set(&input, part, value)?;
            if let Some(warning) = warning {
                ui::display_warning(&warning);
            }
            println!("{}", version);
        }
        Command::Sort { inputs, reverse } => {
            let (versions, warnings) = commands::sort(&inputs, reverse);
            for warning in &warnings {
                ui::display_warning(warning);
            }
            for version in versions {
                println!("{}", version);
            }
        }
        Command::Latest {
            repo,
            current,
            include_unstable,
            pattern,
        } => {
            let pattern = match pattern {
                Some(pattern) => TagPattern::new(pattern)?,
                None => config.tags.tag_pattern()?,
            };
            let current = current
                .as_deref()
                .map(commands::parse_version_arg)
                .transpose()?;
            let source = Git2TagSource::open(&repo)
                .with_context(|| format!("Cannot open git repository at '{}'", repo.display()))?;

            let report = commands::latest(
                &source,
                &LatestArgs {
                    pattern,
                    current: current.clone(),
                    include_unstable: include_unstable || config.update.include_unstable,
                },
            )?;

            for warning in &report.warnings {
                ui::display_warning(warning);
            }

            match (&current, &report.newest, &report.update) {
                (_, None, _) => ui::display_status("No release found"),
                (None, Some(newest), _) => println!("{}", newest.tag),
                (Some(_), Some(_), Some(update)) => {
                    ui::display_success(&format!("Update available: {}", update.tag))
                }
                (Some(current), Some(newest), None) => ui::display_success(&format!(
                    "Up to date: {} (latest release {})",
                    current, newest.tag
                )),
            }
        }
    }

    Ok(())
}
