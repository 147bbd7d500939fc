//! Constraint propagation to a fixpoint.

use crate::{
    TraceBoard,
    technique::{self, BoxedTechnique},
};

/// The outcome of running propagation to a fixpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Every cell is down to a single candidate.
    Solved,
    /// No technique makes further progress; the board may need search.
    Stalled,
    /// Some cell lost all of its candidates.
    Contradiction,
}

/// Applies a fixed sequence of techniques until the board stops changing.
///
/// Each cycle applies every technique once, in order. Cycles repeat while
/// the number of solved cells keeps growing, so cheap rules get another
/// pass at the openings an expensive rule creates.
#[derive(Debug, Clone)]
pub struct Propagator {
    techniques: Vec<BoxedTechnique>,
}

impl Propagator {
    /// Creates a propagator running `techniques` in the given order.
    #[must_use]
    pub fn new(techniques: Vec<BoxedTechnique>) -> Self {
        Self { techniques }
    }

    /// Creates a propagator with the standard rules.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(technique::standard_rules())
    }

    /// Returns the techniques in cycle order.
    #[must_use]
    pub fn techniques(&self) -> &[BoxedTechnique] {
        &self.techniques
    }

    /// Runs technique cycles until the board is solved, stalls, or hits a
    /// contradiction.
    pub fn reduce(&self, board: &mut TraceBoard<'_>) -> Propagation {
        loop {
            let solved_before = board.solved_count();
            for technique in &self.techniques {
                technique.apply(board);
            }
            if board.has_contradiction() {
                log::debug!("propagation found a contradiction");
                return Propagation::Contradiction;
            }
            let solved_after = board.solved_count();
            if solved_after == 81 {
                log::debug!("propagation solved the board");
                return Propagation::Solved;
            }
            if solved_after == solved_before {
                log::debug!("propagation stalled at {solved_after} solved cells");
                return Propagation::Stalled;
            }
        }
    }
}

impl Default for Propagator {
    fn default() -> Self {
        Self::standard()
    }
}
