//! Excursion CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::check::CheckArgs;
use commands::generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "excursion")]
#[command(version)]
#[command(about = "Excursion Studio digests generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the per-locale digests data documents
    Generate {
        /// Site directory (defaults to the current directory)
        dir: Option<String>,

        /// Write output to DIR (path is site-root relative)
        #[arg(long)]
        output_dir: Option<String>,

        /// Suppress console output
        #[arg(long)]
        quiet: bool,
    },

    /// Scan the content tree and report what generation would produce
    Check {
        /// Site directory (defaults to the current directory)
        dir: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let quiet = matches!(&cli.command, Commands::Generate { quiet: true, .. });

    // Initialize logging
    let default_directive = if quiet {
        "excursion=warn"
    } else {
        "excursion=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Generate {
            dir,
            output_dir,
            quiet,
        } => commands::generate::execute(GenerateArgs {
            dir,
            output_dir,
            quiet,
        }),
        Commands::Check { dir } => commands::check::execute(CheckArgs { dir }),
    }
}
