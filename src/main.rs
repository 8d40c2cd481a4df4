use std::io::Write;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use serde::Serialize;

use staticdata::cli::{self, OutputFormat};
use staticdata::logging::{self, Verbosity};
use staticdata::provider::{discover_sources, ModSource};
use staticdata::StaticData;

#[derive(Serialize)]
struct ItemRecord {
    source: String,
    id: String,
    bytes: usize,
}

fn main() -> Result<()> {
    let args = cli::Args::parse();
    args.validate().context("Invalid arguments")?;
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    let sources: Vec<ModSource> = match &args.mods {
        Some(mods_dir) => discover_sources(mods_dir)
            .with_context(|| format!("Failed to discover mod sources in {}", mods_dir.display()))?,
        None => Vec::new(),
    };

    let data = StaticData::new(sources, &args.base_dir);
    let items = if args.dir {
        data.in_directory(&args.id, args.recursive)
    } else {
        data.exact(&args.id)
    };

    if args.content {
        let mut stdout = std::io::stdout().lock();
        for item in &items {
            let bytes = item
                .read_bytes()
                .with_context(|| format!("Failed to read {item}"))?;
            stdout.write_all(&bytes)?;
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Plain => {
            for item in &items {
                println!("{item}");
            }
        }
        OutputFormat::Json => {
            let records: Vec<ItemRecord> = items
                .iter()
                .map(|item| {
                    Ok(ItemRecord {
                        source: item.source_id().to_string(),
                        id: item.resource_id().to_string(),
                        bytes: item.read_bytes()?.len(),
                    })
                })
                .collect::<Result<_, staticdata::ItemError>>()
                .context("Failed to read a resolved item")?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }

    if items.is_empty() && !args.quiet {
        eprintln!("No static data found for {}", args.id);
    }

    Ok(())
}
