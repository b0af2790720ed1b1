//! drawable-selector - Android selector XML generator
//!
//! Writes `res/drawable/<name>.xml` selector resources that map the pressed
//! and selected button states to `<name>_pressed` and everything else to
//! `<name>_normal`.

mod config;
mod project;
mod selector;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drawable-selector")]
#[command(about = "Generate Android drawable selector XML files", long_about = None)]
struct Cli {
    /// State names to generate (default: the project's selectors.toml,
    /// or the built-in crop-ratio list)
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Project root directory (default: discovered via AndroidManifest.xml
    /// in the current directory or its parent)
    #[arg(long, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    // Log to stderr so stdout stays clean (use RUST_LOG to control level)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let root = match &cli.project_dir {
        Some(dir) => project::ProjectRoot::at(dir)?,
        None => project::ProjectRoot::discover_from_cwd()?,
    };
    tracing::info!("Project root: {}", root.dir().display());

    let names = if cli.names.is_empty() {
        config::SelectorConfig::load(root.dir())?.names
    } else {
        cli.names.clone()
    };

    for name in &names {
        if cli.dry_run {
            selector::validate_name(name)?;
            let path = root.drawable_dir().join(format!("{}.xml", name));
            tracing::info!("Would write {}", path.display());
            println!("{}", selector::render(name)?);
        } else {
            let path = selector::write_selector(&root, name)?;
            println!("{}", path.display());
        }
    }

    tracing::info!("Generated {} selector(s)", names.len());
    Ok(())
}
