//! OpenState Site CLI
//!
//! Builds and checks the OpenState marketing site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use openstate_site::cmd::{self, build::BuildOptions};

/// Command-line interface for the site builder.
#[derive(Parser)]
#[command(
    name = "openstate-site",
    version,
    about = "Static builder for the OpenState marketing site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Render every page into the output directory
    Build {
        /// Output directory (defaults to build.output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Static assets directory (defaults to build.static_dir)
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Override site url (e.g., https://example.com)
        #[arg(long)]
        url: Option<String>,
    },
    /// Validate configuration, section content and references
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    openstate_site::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build {
            output,
            static_dir,
            url,
        } => {
            let options = BuildOptions {
                output,
                static_dir,
                url,
            };
            cmd::build::run(&cli.config, &options)?;
        }
        Commands::Check { strict } => {
            cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
