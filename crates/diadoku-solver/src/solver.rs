//! Backtracking search on top of constraint propagation.

use diadoku_core::{Board, Cell, Topology};

use crate::{AssignmentLog, Propagation, Propagator, TraceBoard};

/// The result of solving a board.
///
/// An unsatisfiable board is a normal answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A complete, valid assignment.
    Solved(Board),
    /// No assignment satisfies the constraints.
    Unsatisfiable,
}

impl Resolution {
    /// Returns `true` if a solution was found.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Resolution::Solved(_))
    }

    /// Returns the solved board, if any.
    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        match self {
            Resolution::Solved(board) => Some(board),
            Resolution::Unsatisfiable => None,
        }
    }

    /// Consumes the resolution, returning the solved board, if any.
    #[must_use]
    pub fn into_board(self) -> Option<Board> {
        match self {
            Resolution::Solved(board) => Some(board),
            Resolution::Unsatisfiable => None,
        }
    }
}

/// A depth-first solver that propagates before each branch.
///
/// Search runs propagation to a fixpoint, then picks the unsolved cell
/// with the fewest candidates and tries each in turn on a fresh copy of
/// the board. A contradiction abandons the branch; the first complete
/// assignment wins.
#[derive(Debug, Clone)]
pub struct BacktrackingSolver {
    topology: Topology,
    propagator: Propagator,
}

impl BacktrackingSolver {
    /// Creates a solver for `topology` with the standard propagator.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self::with_propagator(topology, Propagator::standard())
    }

    /// Creates a solver for `topology` with a custom propagator.
    #[must_use]
    pub fn with_propagator(topology: Topology, propagator: Propagator) -> Self {
        Self {
            topology,
            propagator,
        }
    }

    /// Returns the topology the solver works under.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves `board`, recording assignments into `log`.
    ///
    /// The log is cleared first, so after a successful solve it holds the
    /// snapshot history of that solve alone, including dead-end branches.
    pub fn solve(&self, board: &Board, log: &mut AssignmentLog) -> Resolution {
        log.clear();
        match self.search(board.clone(), log) {
            Some(solved) => Resolution::Solved(solved),
            None => Resolution::Unsatisfiable,
        }
    }

    fn search(&self, mut board: Board, log: &mut AssignmentLog) -> Option<Board> {
        let outcome = {
            let mut view = TraceBoard::new(&mut board, &self.topology, log);
            self.propagator.reduce(&mut view)
        };
        match outcome {
            Propagation::Solved => return Some(board),
            Propagation::Contradiction => return None,
            Propagation::Stalled => {}
        }

        // Fewest candidates first; ties break toward the lowest index.
        let cell = Cell::ALL
            .into_iter()
            .filter(|&cell| board.candidates(cell).len() > 1)
            .min_by_key(|&cell| (board.candidates(cell).len(), cell.index()))?;

        let candidates = board.candidates(cell);
        log::trace!("branching on {cell} with candidates {candidates}");
        for digit in candidates {
            let mut branch = board.clone();
            {
                let mut view = TraceBoard::new(&mut branch, &self.topology, log);
                view.assign(cell, digit);
            }
            if let Some(solved) = self.search(branch, log) {
                return Some(solved);
            }
        }
        None
    }
}
