//! Test utilities for technique implementations.
//!
//! [`TechniqueTester`] is a fluent harness: build a board, apply a
//! technique, then chain assertions about which candidates were removed,
//! which cells were solved, and which cells were left alone.

use diadoku_core::{Board, Cell, Digit, Topology};

use crate::{AssignmentLog, TraceBoard, technique::Technique};

/// A test harness for verifying technique implementations.
///
/// The tester snapshots the board state when a technique is first applied
/// and compares later assertions against that snapshot. All assertion
/// methods panic with a descriptive message on failure and use
/// `#[track_caller]` to report the calling test's location.
#[derive(Debug)]
pub struct TechniqueTester {
    topology: Topology,
    initial: Option<Board>,
    current: Board,
    log: AssignmentLog,
}

impl TechniqueTester {
    /// Creates a tester over `board` under `topology`.
    pub fn new(topology: Topology, board: Board) -> Self {
        Self {
            topology,
            initial: None,
            current: board,
            log: AssignmentLog::new(),
        }
    }

    /// Creates a tester from an 81-character line under the standard
    /// topology.
    ///
    /// # Panics
    ///
    /// Panics if the line cannot be parsed.
    #[track_caller]
    pub fn from_line(line: &str) -> Self {
        Self::new(Topology::standard(), Board::parse(line).unwrap())
    }

    /// Creates a tester from an 81-character line under `topology`.
    ///
    /// # Panics
    ///
    /// Panics if the line cannot be parsed.
    #[track_caller]
    pub fn with_topology(topology: Topology, line: &str) -> Self {
        Self::new(topology, Board::parse(line).unwrap())
    }

    /// Returns the board for pre-application setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.current
    }

    /// Returns the current board state.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Returns the assignment log accumulated so far.
    #[must_use]
    pub fn log(&self) -> &AssignmentLog {
        &self.log
    }

    /// Applies the technique once and returns self for chaining.
    #[must_use]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        self.snapshot_initial();
        let mut view = TraceBoard::new(&mut self.current, &self.topology, &mut self.log);
        technique.apply(&mut view);
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    #[must_use]
    pub fn apply_until_stalled<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        self.snapshot_initial();
        loop {
            let mut view = TraceBoard::new(&mut self.current, &self.topology, &mut self.log);
            if !technique.apply(&mut view) {
                break;
            }
        }
        self
    }

    fn snapshot_initial(&mut self) {
        if self.initial.is_none() {
            self.initial = Some(self.current.clone());
        }
    }

    #[track_caller]
    fn initial(&self) -> &Board {
        self.initial
            .as_ref()
            .expect("apply a technique before asserting")
    }

    /// Asserts that `cell` is solved with `digit`.
    #[track_caller]
    #[must_use]
    pub fn assert_solved(self, cell: Cell, digit: Digit) -> Self {
        assert_eq!(
            self.current.solved_digit(cell),
            Some(digit),
            "expected {cell} to be solved with {digit}, candidates are {}",
            self.current.candidates(cell)
        );
        self
    }

    /// Asserts that each digit in `digits` was a candidate of `cell`
    /// before application and no longer is.
    #[track_caller]
    #[must_use]
    pub fn assert_removed<I>(self, cell: Cell, digits: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        for digit in digits {
            assert!(
                self.initial().candidates(cell).contains(digit),
                "{digit} was not a candidate of {cell} to begin with"
            );
            assert!(
                !self.current.candidates(cell).contains(digit),
                "expected {digit} to be removed from {cell}, candidates are {}",
                self.current.candidates(cell)
            );
        }
        self
    }

    /// Asserts that the candidates of `cell` are unchanged.
    #[track_caller]
    #[must_use]
    pub fn assert_no_change(self, cell: Cell) -> Self {
        assert_eq!(
            self.initial().candidates(cell),
            self.current.candidates(cell),
            "expected {cell} to be untouched"
        );
        self
    }
}
