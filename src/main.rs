//! `resicolor` command-line entry point.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use resicolor::engine::{color_by_value_with, RunOutcome};
use resicolor::host::PmlScript;
use resicolor::options::Options;

/// Color alpha-carbons by the per-residue value in columns 63-66 of a PDB
/// file, emitting a PyMOL script.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// PDB file to read values from.
    path: PathBuf,
    /// TOML options file (marker atom, record types, color name prefix).
    #[arg(long)]
    options: Option<PathBuf>,
    /// Write the PyMOL script here instead of stdout.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn load_options(path: Option<&Path>) -> anyhow::Result<Options> {
    match path {
        Some(p) => Options::load(p)
            .with_context(|| format!("loading options from {}", p.display())),
        None => Ok(Options::default()),
    }
}

/// Run the pipeline into an in-memory script so nothing is written unless
/// the run succeeds.
fn render(
    cli: &Cli,
    opts: &Options,
) -> anyhow::Result<(RunOutcome, Vec<u8>)> {
    let mut script = PmlScript::new(Vec::new());
    let outcome = color_by_value_with(&cli.path, &mut script, opts)
        .with_context(|| format!("coloring {}", cli.path.display()))?;
    Ok((outcome, script.into_inner()?))
}

fn write_script(path: Option<&Path>, script: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            out.write_all(script)?;
            out.flush()?;
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(script)?;
            out.flush()?;
        }
    }
    Ok(())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let opts = load_options(cli.options.as_deref())?;
    let (outcome, script) = render(cli, &opts)?;
    match outcome {
        // Leave any previous output in place
        RunOutcome::NoData => Ok(()),
        RunOutcome::Colored(summary) => {
            write_script(cli.output.as_deref(), &script)?;
            log::info!(
                "wrote script for {} residues",
                summary.residue_count()
            );
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
