//! yuic - YUI Compressor build-step adapter.

use anyhow::{Context, Result};
use clap::Parser;

use yuic::cli::Cli;
use yuic::compressor::{Compressed, SkipReason, compress};
use yuic::config::{BuildMode, Config};
use yuic::resource::Resource;
use yuic::{debug, log, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli.config)
        .with_context(|| format!("failed to load `{}`", cli.config.display()))?;
    let mode = cli
        .mode
        .clone()
        .map(BuildMode::new)
        .unwrap_or_else(|| config.mode.clone());

    for file in &cli.files {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read `{}`", file.display()))?;
        let resource = Resource::new(file, &text);

        match compress(&resource, &config, &mode)? {
            Compressed::Transformed(out) => {
                if cli.write {
                    std::fs::write(file, &out)
                        .with_context(|| format!("failed to write `{}`", file.display()))?;
                    log!("compress"; "{} ({} -> {} bytes)", file.display(), text.len(), out.len());
                } else {
                    print!("{out}");
                }
            }
            Compressed::Skipped(reason) => {
                if reason == SkipReason::UnsupportedKind {
                    debug!("compress"; "skipping {}: not a js/css file", file.display());
                }
                // Passthrough: the original text stands.
                if !cli.write {
                    print!("{text}");
                }
            }
        }
    }

    Ok(())
}
