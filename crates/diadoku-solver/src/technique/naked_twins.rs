use diadoku_core::{Cell, DigitSet};
use tinyvec::ArrayVec;

use crate::{
    TraceBoard,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "naked twins";

/// Eliminates the digits of a two-cell candidate pair from shared peers.
///
/// When two cells of a unit hold the same two-digit candidate set, those
/// two digits are pinned to that pair. Any cell that is a peer of *both*
/// pair members can no longer take either digit.
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedTwins;

impl NakedTwins {
    /// Creates a new `NakedTwins` technique.
    #[must_use]
    pub const fn new() -> Self {
        NakedTwins
    }
}

impl Technique for NakedTwins {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedTechnique {
        Box::new(*self)
    }

    fn apply(&self, board: &mut TraceBoard<'_>) -> bool {
        let mut changed = false;
        let topology = board.topology();
        for unit in topology.units() {
            let mut pairs: ArrayVec<[(Cell, DigitSet); 9]> = ArrayVec::new();
            for &cell in unit.cells() {
                let candidates = board.candidates(cell);
                if candidates.len() == 2 {
                    pairs.push((cell, candidates));
                }
            }
            for (i, &(first, digits)) in pairs.iter().enumerate() {
                for &(second, other) in &pairs[i + 1..] {
                    if digits != other {
                        continue;
                    }
                    let shared = topology.peers(first) & topology.peers(second);
                    for peer in shared {
                        for digit in digits {
                            changed |= board.eliminate(peer, digit);
                        }
                    }
                }
            }
        }
        changed
    }
}
