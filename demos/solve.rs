use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use regina::board::Board;
use regina::solver::engine::{Resolution, SolveMode, SolverEngine};
use regina::solver::model::ConstraintModel;
use regina::solver::stats::render_stats_table;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Stop at the first solution.
    First,
    /// Verify that the solution is unique.
    Unique,
}

/// Solve a Queens region puzzle from an ASCII board file.
///
/// The file holds one line per row with one region character per cell, e.g.
/// a 4x4 board with column-stripe regions is four lines of "ABCD".
#[derive(Debug, Parser)]
#[command(name = "solve")]
struct Args {
    /// Path to the board file.
    board: PathBuf,
    #[arg(long, value_enum, default_value = "unique")]
    mode: Mode,
    /// Print per-constraint search statistics.
    #[arg(long)]
    stats: bool,
    /// Emit the resolution as JSON instead of a board overlay.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let text = match fs::read_to_string(&args.board) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {}: {}", args.board.display(), err);
            process::exit(1);
        }
    };
    let board: Board = match text.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid board: {}", err);
            process::exit(1);
        }
    };

    let mode = match args.mode {
        Mode::First => SolveMode::FirstSolution,
        Mode::Unique => SolveMode::VerifyUnique,
    };
    let engine = SolverEngine::with_mode(mode);
    let (resolution, stats) = engine.solve(&board).unwrap_or_else(|err| {
        eprintln!("solve failed: {}", err);
        process::exit(1);
    });

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&resolution).expect("resolution serializes")
        );
    } else {
        match &resolution {
            Resolution::Solved(placement) => {
                for row in 0..board.size() {
                    let line: String = (0..board.size())
                        .map(|col| {
                            if placement.column_of(row) == col {
                                'Q'
                            } else {
                                (b'a' + board.region_at(row, col).index() as u8) as char
                            }
                        })
                        .collect();
                    println!("{}", line);
                }
                println!("markers: {}", placement);
            }
            Resolution::NoSolution => println!("no valid placement exists"),
            Resolution::MultipleSolutions => {
                println!("puzzle is ambiguous: more than one valid placement")
            }
        }
    }

    if args.stats {
        let model = ConstraintModel::build(&board);
        println!("{}", render_stats_table(&stats, model.constraints()));
    }
}
