use anyhow::{Context, Result};
use clap::Parser;
use slider_solver::input::parse_board;
use slider_solver::report::write_report;
use slider_solver::{Board, Solver, SolverConfig};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file: the dimension, then one row of tiles per line
    board_file: PathBuf,

    /// Give up after this many search rounds
    #[clap(long)]
    max_rounds: Option<u64>,
}

fn read_board_file(path: &Path) -> Result<Board> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;
    parse_board(&content).with_context(|| format!("invalid board in {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let initial = read_board_file(&args.board_file)?;
    log::info!(
        "loaded {n}x{n} board from {}",
        args.board_file.display(),
        n = initial.dimension()
    );

    let mut config = SolverConfig::new();
    if let Some(rounds) = args.max_rounds {
        config = config.with_max_rounds(rounds);
    }
    let solver = Solver::with_config(&initial, &config).context("search did not finish")?;
    if let Some(slides) = solver.slides() {
        let listed: Vec<String> = slides.iter().map(ToString::to_string).collect();
        log::debug!("slides: {}", listed.join(" "));
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&solver, &mut out)?;
    out.flush()?;
    Ok(())
}
