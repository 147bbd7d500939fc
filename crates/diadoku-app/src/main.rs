//! Command-line sudoku solver for classic and diagonal grids.

use std::{
    io::{self, Write as _},
    process::ExitCode,
};

use clap::Parser;
use diadoku_core::{Board, Topology};
use diadoku_solver::{AssignmentLog, BacktrackingSolver, Resolution};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 81-character grid, row by row; digits are givens, `.` marks a blank.
    grid: String,

    /// Require each main diagonal to contain all nine digits.
    #[arg(long)]
    diagonal: bool,

    /// Print every intermediate board from the solving trace.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let board = match Board::parse(&args.grid) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let topology = if args.diagonal {
        Topology::diagonal()
    } else {
        Topology::standard()
    };
    let solver = BacktrackingSolver::new(topology);
    let mut log = AssignmentLog::new();

    match solver.solve(&board, &mut log) {
        Resolution::Solved(solution) => {
            if args.trace {
                // Trace output is cosmetic; a broken pipe must not discard
                // the solution.
                if let Err(err) = replay(&log) {
                    log::warn!("failed to replay solving trace: {err}");
                }
            }
            println!("{solution}");
            println!("{}", solution.to_line());
            ExitCode::SUCCESS
        }
        Resolution::Unsatisfiable => {
            println!("no solution exists for this grid");
            ExitCode::FAILURE
        }
    }
}

fn replay(log: &AssignmentLog) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for (step, snapshot) in log.snapshots().iter().enumerate() {
        writeln!(stdout, "step {}:", step + 1)?;
        writeln!(stdout, "{snapshot}")?;
    }
    Ok(())
}
