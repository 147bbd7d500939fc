//! Constraint-propagation sudoku solver with backtracking search.
//!
//! The solver runs three propagation rules ([`Eliminate`], [`OnlyChoice`],
//! and [`NakedTwins`]) in a fixed cycle via the [`Propagator`], with a
//! depth-first [`BacktrackingSolver`] that branches on the unsolved cell
//! with the fewest candidates whenever propagation stalls.
//! Every cell determination is appended to an [`AssignmentLog`] so external
//! consumers can replay the solving trace.
//!
//! [`Eliminate`]: technique::Eliminate
//! [`OnlyChoice`]: technique::OnlyChoice
//! [`NakedTwins`]: technique::NakedTwins
//!
//! # Examples
//!
//! ```
//! use diadoku_core::{Board, Topology};
//! use diadoku_solver::{AssignmentLog, BacktrackingSolver, Resolution};
//!
//! let board = Board::parse(
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
//! )?;
//! let solver = BacktrackingSolver::new(Topology::diagonal());
//! let mut log = AssignmentLog::new();
//!
//! match solver.solve(&board, &mut log) {
//!     Resolution::Solved(solution) => {
//!         assert!(solution.is_valid_solution(solver.topology()));
//!     }
//!     Resolution::Unsatisfiable => unreachable!("this grid has a solution"),
//! }
//! # Ok::<(), diadoku_core::ParseError>(())
//! ```

pub use self::{propagator::*, recorder::*, solver::*, trace_board::*};

pub mod technique;

mod propagator;
mod recorder;
mod solver;
mod trace_board;

#[cfg(test)]
mod testing;
