//! Ordered log of cell determinations.

use diadoku_core::Board;

/// An append-only log of full-board snapshots, one per determination event.
///
/// A snapshot is appended each time a cell's candidate set is reduced to a
/// single digit. The log exists purely for external consumers (trace
/// replay, animation); solving correctness never depends on it.
///
/// The log is handed explicitly into propagation and search rather than
/// living in process-wide state, and [`BacktrackingSolver::solve`] clears
/// it at the start of every invocation so that it covers exactly one solve.
///
/// [`BacktrackingSolver::solve`]: crate::BacktrackingSolver::solve
///
/// # Examples
///
/// ```
/// use diadoku_core::Board;
/// use diadoku_solver::AssignmentLog;
///
/// let mut log = AssignmentLog::new();
/// log.record(&Board::new());
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct AssignmentLog {
    snapshots: Vec<Board>,
}

impl AssignmentLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a defensive copy of `board`.
    ///
    /// The copy matters: the caller keeps mutating the board afterwards,
    /// and recorded snapshots must not observe later mutation.
    pub fn record(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
    }

    /// Returns the recorded snapshots in determination order.
    #[must_use]
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Returns the number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Discards all recorded snapshots.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}
