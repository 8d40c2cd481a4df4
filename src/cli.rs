use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};

use crate::identifier::Identifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "staticdata")]
#[command(about = "Resolve static data files across mod sources and user overrides", long_about = None)]
pub struct Args {
    /// Identifier to resolve, e.g. "examplemod:configs/config.json"
    #[arg(value_name = "ID")]
    pub id: Identifier,

    /// Base directory containing the user staticdata folder
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Directory whose subdirectories are scanned as mod sources
    #[arg(long, value_name = "DIR")]
    pub mods: Option<PathBuf>,

    /// Treat the identifier as a directory and list its contents
    #[arg(short, long)]
    pub dir: bool,

    /// With --dir, also search subfolders
    #[arg(short, long)]
    pub recursive: bool,

    /// Write the raw bytes of every match to stdout instead of a listing
    #[arg(short, long)]
    pub content: bool,

    /// Output format for listings (plain, json)
    #[arg(short = 'f', long, default_value = "plain")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.recursive && !self.dir {
            anyhow::bail!("--recursive only applies to directory queries; pass --dir as well");
        }
        if self.content && self.format == OutputFormat::Json {
            anyhow::bail!("--content writes raw bytes and cannot be combined with --format json");
        }
        if let Some(ref mods) = self.mods {
            validate_dir(mods)?;
        }
        validate_dir(&self.base_dir)?;
        Ok(())
    }
}

pub fn validate_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Not a directory: {}", path.display());
    }
    std::fs::metadata(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Json => "json",
        }
    }
}
