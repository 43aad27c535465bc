mod build;
mod copy;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sitesmith_config::SiteConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitesmith")]
#[command(author, version)]
#[command(about = "Build a static HTML site from markdown content")]
#[command(after_help = "\
EXAMPLES:

    # Write a default sitesmith.toml
    sitesmith init

    # Build ./public from ./static and ./content
    sitesmith build

    # Print the HTML for one page
    sitesmith render content/index.md")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to configuration file (default: ./sitesmith.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and render every content page into the public directory
    Build,
    /// Print the HTML rendering of a single markdown file
    Render {
        /// Markdown file to convert
        file: PathBuf,
    },
    /// Write a configuration file with the default directories
    Init,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(SiteConfig::config_path);

    match cli.command {
        Commands::Build => {
            log::info!("Config path: {}", config_path.display());
            let config = SiteConfig::load_or_default(&config_path)?;
            let stats = build::build_site(&config)?;
            log::info!(
                "Built {} pages and copied {} assets ({} directories) into {}",
                stats.pages,
                stats.assets.files,
                stats.assets.dirs,
                config.public_dir.display()
            );
        }
        Commands::Render { file } => {
            println!("{}", build::render_file(&file)?);
        }
        Commands::Init => {
            if config_path.exists() {
                bail!("{} already exists", config_path.display());
            }
            SiteConfig::default()
                .save_to_path(&config_path)
                .with_context(|| format!("writing {}", config_path.display()))?;
            log::info!("Wrote {}", config_path.display());
        }
    }

    Ok(())
}
