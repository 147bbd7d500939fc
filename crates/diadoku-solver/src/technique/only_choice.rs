use diadoku_core::Digit;

use crate::{
    TraceBoard,
    technique::{BoxedTechnique, Technique},
};

const NAME: &str = "only choice";

/// Forces a digit into the one cell of a unit that can still take it.
///
/// If a digit remains a candidate in exactly one cell of a unit, that cell
/// must hold it, whatever its other candidates are.
#[derive(Debug, Default, Clone, Copy)]
pub struct OnlyChoice;

impl OnlyChoice {
    /// Creates a new `OnlyChoice` technique.
    #[must_use]
    pub const fn new() -> Self {
        OnlyChoice
    }
}

impl Technique for OnlyChoice {
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
            for digit in Digit::ALL {
                let mut count = 0;
                let mut place = None;
                for &cell in unit.cells() {
                    if board.candidates(cell).contains(digit) {
                        count += 1;
                        place = Some(cell);
                    }
                }
                if count == 1
                    && let Some(cell) = place
                {
                    changed |= board.assign(cell, digit);
                }
            }
        }
        changed
    }
}
