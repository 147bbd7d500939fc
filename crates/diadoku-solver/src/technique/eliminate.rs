use crate::{
    TraceBoard,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "eliminate";

/// Removes the digit of every solved cell from all of that cell's peers.
///
/// A placed digit cannot reappear anywhere in the cell's row, column, box,
/// or diagonal. The solved cells are collected up front; cells that become
/// solved *by* these eliminations are propagated in the next cycle.
#[derive(Debug, Default, Clone, Copy)]
pub struct Eliminate;

impl Eliminate {
    /// Creates a new `Eliminate` technique.
    #[must_use]
    pub const fn new() -> Self {
        Eliminate
    }
}

impl Technique for Eliminate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut TraceBoard<'_>) -> bool {
        let mut changed = false;
        for cell in board.solved_cells() {
            let Some(digit) = board.candidates(cell).as_single() else {
                continue;
            };
            let peers = board.peers(cell);
            for peer in peers {
                changed |= board.eliminate(peer, digit);
            }
        }
        changed
    }
}
