//! Export the built-in transliteration scheme to JSON or TOML
//!
//! Usage:
//!   cargo run -p export_scheme -- --format toml
//!   cargo run -p export_scheme -- --format json --output malayalam-arabi.json
//!
//! The exported file can be edited and passed back to the `libmalayalam`
//! binary with `--scheme`.

use anyhow::{Context, Result};
use clap::Parser;
use libmalayalam::SchemeDef;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "export_scheme")]
#[command(about = "Export the built-in Malayalam -> Arabic scheme")]
struct Args {
    /// Output format: json or toml
    #[arg(short, long, default_value = "toml")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn render(def: &SchemeDef, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(def)?),
        "toml" => Ok(toml::to_string_pretty(def)?),
        _ => anyhow::bail!("Unsupported format: {}. Use 'json' or 'toml'", format),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let def = libmalayalam::scheme().to_def();
    let output = render(&def, &args.format)?;

    if let Some(path) = args.output {
        std::fs::write(&path, output)
            .with_context(|| format!("failed to write {}", path.display()))?;
    } else {
        print!("{}", output);
    }

    Ok(())
}
