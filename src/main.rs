use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "termhere")]
#[command(about = "Create \"Open Terminal at …\" helper apps for macOS folders")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.termhere/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the helper creation window
    Gui,

    /// Create a helper app without the window
    Create {
        /// Folder the helper opens in Terminal
        #[arg(short, long)]
        source: PathBuf,

        /// Helper name (defaults to "Open Terminal at <folder name>")
        #[arg(short, long)]
        name: Option<String>,

        /// Folder the helper is saved to (defaults to the configured destination)
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Print the planned steps without running anything
        #[arg(long)]
        dry_run: bool,

        /// Do not reveal the new helper in Finder
        #[arg(long)]
        no_reveal: bool,
    },

    /// Print the AppleScript a helper for this folder would contain
    Script {
        #[arg(short, long)]
        source: PathBuf,
    },

    /// Reveal the destination folder in Finder
    Reveal {
        /// Folder to reveal (defaults to the configured destination)
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },

    /// Write a commented default config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Create {
            source,
            name,
            dest,
            json,
            dry_run,
            no_reveal,
        }) => {
            let options = cli::create::CreateOptions {
                source,
                name,
                dest,
                json,
                dry_run,
                no_reveal,
            };
            cli::create::create_command(cli.config.as_deref(), options)?;
        }
        Some(Commands::Script { source }) => {
            cli::script::script_command(cli.config.as_deref(), &source)?;
        }
        Some(Commands::Reveal { dest }) => {
            cli::reveal::reveal_command(cli.config.as_deref(), dest)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.as_deref(), force)?;
        }
        Some(Commands::Gui) | None => {
            termhere::gui::run_gui(cli.config)?;
        }
    }

    Ok(())
}
