use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stylepeek::config::ScopingMode;

mod cli;

#[derive(Parser)]
#[command(name = "stylepeek")]
#[command(about = "Find the CSS rules that apply to a class or id reference")]
#[command(version)]
struct Cli {
    /// Workspace root (defaults to the nearest marked ancestor of the source file)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Path to the config file (defaults to stylepeek.toml in the workspace root)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the scoping mode (global, folder, filename, smart)
    #[arg(short, long, global = true)]
    mode: Option<ScopingMode>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the rules that apply to a token referenced from a source file
    Rules {
        /// Class, id or compound token (e.g. `btn`, `#main`, `div.card`)
        token: String,

        /// The file the token is referenced from
        source: PathBuf,

        /// Print the rules as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the candidate style sheets for a source file, in priority order
    Files {
        /// The file whose style sheets to list
        source: PathBuf,
    },

    /// Find class, className and id attributes that use a token
    Usages {
        /// Class or id to search for
        token: String,
    },

    /// Check whether a selector matches a token
    Match {
        /// Selector text, e.g. `.btn:hover`
        selector: String,

        /// Reference token, e.g. `btn`
        token: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let options = cli::GlobalOptions {
        root: cli.root,
        config: cli.config,
        mode: cli.mode,
    };

    match cli.command {
        Commands::Rules {
            token,
            source,
            json,
        } => {
            cli::rules::rules_command(&options, &token, &source, json)?;
        }
        Commands::Files { source } => {
            cli::files::files_command(&options, &source)?;
        }
        Commands::Usages { token } => {
            cli::usages::usages_command(&options, &token)?;
        }
        Commands::Match { selector, token } => {
            println!("{}", stylepeek::selector::matches(&selector, &token));
        }
    }

    Ok(())
}
