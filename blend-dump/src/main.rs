//! blend-dump - prints the layout of a `.blend` file
//!
//! Shows the file header, one line per block with the structure it holds,
//! and optionally the full SDNA catalog.

use anyhow::{Context, Result};
use blend_rs::{BlendFile, ParseOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "blend-dump")]
#[command(about = "Print the header, blocks and SDNA catalog of a .blend file")]
#[command(version)]
struct Cli {
    /// Path to the .blend file
    input: PathBuf,

    /// Fail on unrecognized header flags
    #[arg(long)]
    strict: bool,

    /// Check every catalog index before printing
    #[arg(long)]
    validate: bool,

    /// Print every structure definition in the catalog
    #[arg(long)]
    structs: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let options = ParseOptions::new()
        .with_strict_flags(cli.strict)
        .with_validate_indices(cli.validate);

    let blend = BlendFile::open_with(&cli.input, options)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    print!("{}", blend.header);

    let Some(sdna) = blend.sdna() else {
        println!("No DNA1 block found; {} blocks", blend.blocks.len());
        return Ok(());
    };

    if cli.structs {
        print!("{sdna}");
    }

    for (i, block) in blend.blocks.iter().enumerate() {
        let header = &block.header;
        match sdna.struct_for_block(header) {
            Ok(structure) => {
                let index = structure.type_index as usize;
                let name = sdna.type_name(index)?;
                let size = sdna.type_size(index)?;
                println!(
                    "File Block {i}: {} {name} {size}byte x {} ({}byte)",
                    header.code, header.count, header.size
                );
            }
            Err(err) => println!(
                "File Block {i}: {} <{err}> x {} ({}byte)",
                header.code, header.count, header.size
            ),
        }
    }

    Ok(())
}
