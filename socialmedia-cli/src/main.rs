//! Socialmedia CLI
//!
//! Command-line host for the follow and share link blocks: stores block
//! configuration on disk, edits it, and prints render output as JSON.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use socialmedia_core::BlockKind;

use commands::block::PlatformChange;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "socialmedia")]
#[command(version, about = "Configure and render social media link blocks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: ~/.socialmedia)
    #[arg(long, global = true, env = "SOCIALMEDIA_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Locale for platform names and labels (en, de, fr, es)
    #[arg(long, global = true, env = "SOCIALMEDIA_LOCALE", default_value = "en")]
    locale: String,

    /// Block instance id
    #[arg(long, global = true, default_value = "default")]
    block: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List the platforms a block kind offers
    Platforms {
        /// Block kind (follow, share)
        kind: BlockKind,
    },

    /// Show the block's configuration table
    Form {
        /// Block kind (follow, share)
        kind: BlockKind,
    },

    /// Change one platform's setting
    Set {
        /// Block kind (follow, share)
        kind: BlockKind,

        /// Platform id (e.g., "facebook")
        platform: String,

        /// Link for a follow block; an empty string disables the platform
        #[arg(long)]
        link: Option<String>,

        /// Enabled flag for a share block
        #[arg(long)]
        enabled: Option<bool>,

        /// Display weight; lower sorts first
        #[arg(long, allow_hyphen_values = true)]
        weight: Option<i32>,
    },

    /// Render the block and print it as JSON
    Render {
        /// Block kind (follow, share)
        kind: BlockKind,

        /// Absolute URL of the page being rendered (share blocks)
        #[arg(long)]
        page_url: Option<String>,
    },

    /// Restore the block's default configuration
    Reset {
        /// Block kind (follow, share)
        kind: BlockKind,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            display::error(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::new(cli.data_dir, &cli.locale, cli.block)?;

    match cli.command {
        Commands::Platforms { kind } => commands::platforms::list(&config, kind),
        Commands::Form { kind } => commands::block::form(&config, kind)?,
        Commands::Set {
            kind,
            platform,
            link,
            enabled,
            weight,
        } => {
            let change = PlatformChange {
                link,
                enabled,
                weight,
            };
            if change.link.is_none() && change.enabled.is_none() && change.weight.is_none() {
                display::info("Nothing to change. Pass --link, --enabled or --weight.");
                return Ok(());
            }
            commands::block::set(&config, kind, &platform, &change)?;
        }
        Commands::Render { kind, page_url } => {
            commands::block::render(&config, kind, page_url.as_deref())?;
        }
        Commands::Reset { kind } => commands::block::reset(&config, kind)?,
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "socialmedia", &mut io::stdout());
        }
    }

    Ok(())
}
