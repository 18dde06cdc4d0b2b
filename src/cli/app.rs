//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use super::session::SessionPaths;
use credence::output::OutputMode;

/// credence - Reputation-weighted credibility consensus for news posts
#[derive(Parser, Debug)]
#[command(
    name = "credence",
    version,
    about = "Reputation-weighted credibility consensus for news posts",
    long_about = "Track reviewer verdicts on posts and derive a credibility tag.\n\n\
                  Each reviewer holds one weighted verdict per post. Verdicts fold\n\
                  into a consensus percentage and a tag: true, false, misleading\n\
                  or unverified. Every change in consensus is kept as history."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: .credence/config.toml, then ~/.credence/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Review journal (default: .credence/journal.jsonl)
    #[arg(long, global = true)]
    pub journal: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config to .credence/config.toml
    Init {
        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },

    /// Submit or replace a reviewer's verdict on a post
    Submit {
        /// Post ID
        post: String,

        /// Reviewer ID
        reviewer: String,

        /// Verdict: accurate, inaccurate
        verdict: String,

        /// Reviewer weight (>= 0, default 1)
        #[arg(short, long, allow_negative_numbers = true)]
        weight: Option<f64>,

        /// Submission time, RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Withdraw a reviewer's verdict on a post
    Retract {
        /// Post ID
        post: String,

        /// Reviewer ID
        reviewer: String,

        /// Retraction time, RFC 3339 (default: now)
        #[arg(long)]
        at: Option<String>,
    },

    /// Show the current tally and tag for a post
    Tally {
        /// Post ID
        post: String,
    },

    /// Show consensus history for a post, newest first
    History {
        /// Post ID
        post: String,

        /// Maximum snapshots to show (default from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show whether consensus on a post is rising or falling
    Trend {
        /// Post ID
        post: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let paths = SessionPaths {
        config: cli.config,
        journal: cli.journal,
    };

    match cli.command {
        Some(Command::Init { force }) => commands::init(&paths, force, output_mode),
        Some(Command::Submit {
            post,
            reviewer,
            verdict,
            weight,
            at,
        }) => commands::submit(
            &paths,
            &commands::SubmitArgs {
                post: &post,
                reviewer: &reviewer,
                verdict: &verdict,
                weight,
                at: at.as_deref(),
            },
            output_mode,
        ),
        Some(Command::Retract { post, reviewer, at }) => {
            commands::retract(&paths, &post, &reviewer, at.as_deref(), output_mode)
        },
        Some(Command::Tally { post }) => commands::tally(&paths, &post, output_mode),
        Some(Command::History { post, limit }) => {
            commands::history(&paths, &post, limit, output_mode)
        },
        Some(Command::Trend { post }) => commands::trend(&paths, &post, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": credence::VERSION
                    })
                );
            } else {
                println!("credence v{}", credence::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": credence::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("credence v{}", credence::VERSION);
                println!("\nRun 'credence --help' for usage");
                println!("Run 'credence init' to get started");
            }
            Ok(())
        },
    }
}
