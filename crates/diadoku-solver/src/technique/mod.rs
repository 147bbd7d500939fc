//! Constraint-propagation techniques.
//!
//! Each rule implements the [`Technique`] trait and is applied to a board
//! through a [`TraceBoard`] view. [`standard_rules`] returns the rules in
//! the fixed cycle order used by the [`Propagator`](crate::Propagator).

use std::fmt::Debug;

pub use self::{eliminate::Eliminate, naked_twins::NakedTwins, only_choice::OnlyChoice};
use crate::TraceBoard;

mod eliminate;
mod naked_twins;
mod only_choice;

/// Returns the standard propagation rules in cycle order: eliminate,
/// only-choice, naked-twins.
#[must_use]
pub fn standard_rules() -> Vec<BoxedTechnique> {
    vec![
        Box::new(Eliminate::new()),
        Box::new(OnlyChoice::new()),
        Box::new(NakedTwins::new()),
    ]
}

/// A constraint-propagation rule.
///
/// A technique scans the whole board once per application. It shrinks
/// candidate sets but never widens them, so repeated application reaches a
/// fixpoint.
pub trait Technique: Debug {
    /// Returns the name of the technique.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the technique.
    fn clone_box(&self) -> BoxedTechnique;

    /// Applies the technique once across the board.
    ///
    /// Returns `true` if any candidate set changed.
    fn apply(&self, board: &mut TraceBoard<'_>) -> bool;
}

/// A boxed technique.
pub type BoxedTechnique = Box<dyn Technique>;

impl Clone for BoxedTechnique {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
