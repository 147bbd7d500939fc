//! Mutable board view used by techniques.

use diadoku_core::{Board, Cell, CellSet, Digit, DigitSet, Topology};

use crate::AssignmentLog;

/// A mutable view over a [`Board`] that techniques operate through.
///
/// The view bundles the board with the (immutable) [`Topology`] and the
/// [`AssignmentLog`]. Its two mutation primitives, [`assign`] and
/// [`eliminate`], record a snapshot to the log exactly when a mutation
/// leaves a cell with a singleton candidate set, the determination event
/// external consumers observe.
///
/// [`assign`]: TraceBoard::assign
/// [`eliminate`]: TraceBoard::eliminate
#[derive(Debug)]
pub struct TraceBoard<'a> {
    board: &'a mut Board,
    topology: &'a Topology,
    log: &'a mut AssignmentLog,
}

impl<'a> TraceBoard<'a> {
    /// Creates a view over `board`.
    pub fn new(
        board: &'a mut Board,
        topology: &'a Topology,
        log: &'a mut AssignmentLog,
    ) -> Self {
        Self {
            board,
            topology,
            log,
        }
    }

    /// Returns the topology the board is solved under.
    ///
    /// The returned reference is independent of the view borrow, so
    /// callers can iterate units while mutating cells.
    #[must_use]
    pub fn topology(&self) -> &'a Topology {
        self.topology
    }

    /// Returns the peers of `cell`.
    #[must_use]
    pub fn peers(&self, cell: Cell) -> CellSet {
        self.topology.peers(cell)
    }

    /// Returns the candidate set of `cell`.
    #[must_use]
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.board.candidates(cell)
    }

    /// Returns the set of solved cells.
    #[must_use]
    pub fn solved_cells(&self) -> CellSet {
        self.board.solved_cells()
    }

    /// Returns the number of solved cells.
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.board.solved_count()
    }

    /// Returns `true` if some cell has run out of candidates.
    #[must_use]
    pub fn has_contradiction(&self) -> bool {
        self.board.has_contradiction()
    }

    /// Forces `cell` to exactly `digit`. Returns `true` if the candidate
    /// set changed; a change is recorded as a determination event.
    pub fn assign(&mut self, cell: Cell, digit: Digit) -> bool {
        let singleton = DigitSet::from_elem(digit);
        if self.board.candidates(cell) == singleton {
            return false;
        }
        self.board.set_candidates(cell, singleton);
        self.log.record(self.board);
        true
    }

    /// Removes `digit` from the candidates of `cell`. Returns `true` if
    /// the candidate set changed; a removal that leaves a singleton is
    /// recorded as a determination event.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> bool {
        let mut candidates = self.board.candidates(cell);
        if !candidates.remove(digit) {
            return false;
        }
        self.board.set_candidates(cell, candidates);
        if candidates.len() == 1 {
            self.log.record(self.board);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_records_once() {
        let mut board = Board::new();
        let topology = Topology::standard();
        let mut log = AssignmentLog::new();
        let mut view = TraceBoard::new(&mut board, &topology, &mut log);

        let cell = Cell::from_coords(0, 0);
        assert!(view.assign(cell, Digit::D5));
        // Re-assigning the same digit is a no-op and records nothing.
        assert!(!view.assign(cell, Digit::D5));

        assert_eq!(log.len(), 1);
        assert_eq!(board.solved_digit(Cell::from_coords(0, 0)), Some(Digit::D5));
    }

    #[test]
    fn test_eliminate_records_on_determination() {
        let mut board = Board::new();
        let topology = Topology::standard();
        let mut log = AssignmentLog::new();
        let cell = Cell::from_coords(4, 4);

        {
            let mut view = TraceBoard::new(&mut board, &topology, &mut log);
            for digit in [
                Digit::D1,
                Digit::D2,
                Digit::D3,
                Digit::D4,
                Digit::D5,
                Digit::D6,
                Digit::D7,
            ] {
                assert!(view.eliminate(cell, digit));
            }
        }
        // Seven eliminations leave {8, 9}: nothing determined yet.
        assert!(log.is_empty());

        {
            let mut view = TraceBoard::new(&mut board, &topology, &mut log);
            // The eighth elimination leaves the singleton {9}.
            assert!(view.eliminate(cell, Digit::D8));
            // Eliminating an absent digit changes and records nothing.
            assert!(!view.eliminate(cell, Digit::D8));
        }
        assert_eq!(log.len(), 1);
        assert_eq!(board.solved_digit(cell), Some(Digit::D9));
    }

    #[test]
    fn test_eliminate_into_contradiction_is_not_recorded() {
        let mut board = Board::new();
        let topology = Topology::standard();
        let mut log = AssignmentLog::new();
        let mut view = TraceBoard::new(&mut board, &topology, &mut log);

        let cell = Cell::from_coords(0, 0);
        for digit in Digit::ALL {
            view.eliminate(cell, digit);
        }
        assert!(view.has_contradiction());
        // Only the transition to a singleton was recorded, not the
        // transition to empty.
        assert_eq!(log.len(), 1);
    }
}
