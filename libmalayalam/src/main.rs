use anyhow::{Context, Result};
use clap::Parser;
use libmalayalam::{Config, Scheme, Transliterator};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Transliterate Malayalam text into Arabi-Malayalam.
///
/// With no TEXT arguments, every line read from stdin is transliterated.
#[derive(Parser, Debug)]
#[command(name = "libmalayalam")]
struct Args {
    /// Text to transliterate
    text: Vec<String>,

    /// Engine config (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use a custom scheme (TOML) instead of the built-in tables
    #[arg(long)]
    scheme: Option<PathBuf>,

    /// Print each segment with the rule that produced it
    #[arg(long)]
    explain: bool,
}

fn build_engine(args: &Args) -> Result<Transliterator> {
    let config = match &args.config {
        Some(path) => Config::load_toml(path).map_err(|e| anyhow::anyhow!("{}", e))?,
        None => Config::default(),
    };
    let scheme = match &args.scheme {
        Some(path) => Scheme::load_toml(path).map_err(|e| anyhow::anyhow!("{}", e))?,
        None => libmalayalam::scheme(),
    };
    Ok(Transliterator::new(scheme, config))
}

fn emit(engine: &Transliterator, input: &str, explain: bool, out: &mut impl Write) -> Result<()> {
    let comp = engine.compose(input);
    writeln!(out, "{}", comp.text())?;
    if explain {
        for seg in comp.segments() {
            let src = &input[seg.source.clone()];
            writeln!(out, "  {:<8} → {:<8} {:?}", src, comp.output_of(seg), seg.kind)?;
        }
    }
    Ok(())
}

/// Transliterate every line of `input`, one output line each.
fn run_lines(
    engine: &Transliterator,
    input: impl BufRead,
    explain: bool,
    out: &mut impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read input line")?;
        emit(engine, &line, explain, out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let engine = build_engine(&args)?;
    tracing::info!(scheme = %engine.scheme().name, "engine ready");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.text.is_empty() {
        let input = args.text.join(" ");
        return emit(&engine, &input, args.explain, &mut out);
    }

    run_lines(&engine, io::stdin().lock(), args.explain, &mut out)
}
