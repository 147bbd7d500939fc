//! Core data structures for the diadoku sudoku engine.
//!
//! This crate provides the board-structure and board-state types shared by
//! the solver and the command-line front end:
//!
//! - [`digit`] / [`digit_set`]: type-safe digits 1-9 and per-cell candidate
//!   sets backed by a 16-bit bitset
//! - [`cell`] / [`cell_set`]: board coordinates (`A1`..`I9`, row-major index
//!   0-80) and bitsets over the 81 cells
//! - [`topology`]: the static constraint structure of rows, columns, boxes
//!   and (for the diagonal variant) the two main diagonals, with per-cell
//!   unit and peer lookups computed once
//! - [`board`]: the mutable candidate-set state, including parsing from and
//!   rendering to the 81-character grid format
//!
//! # Examples
//!
//! ```
//! use diadoku_core::{Board, Cell, Topology};
//!
//! let board = Board::parse(
//!     "2.............62....1....7...6..8...3...9...7...6..4...4....8....52.............3",
//! )?;
//! assert_eq!(board.solved_count(), 17);
//!
//! let topology = Topology::diagonal();
//! assert_eq!(topology.units().len(), 29);
//! assert_eq!(topology.peers(Cell::from_coords(0, 0)).len(), 26);
//! # Ok::<(), diadoku_core::ParseError>(())
//! ```

pub mod board;
pub mod cell;
pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod error;
pub mod topology;

pub use self::{
    board::Board,
    cell::Cell,
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    error::ParseError,
    topology::{Topology, Unit, UnitKind, Variant},
};
