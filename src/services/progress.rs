//! Progress label formatting

use crate::models::StepPosition;

/// Format the "Step X of Y" label for `position`
///
/// Uses the 1-based `number` of the step rather than its identifier, so
/// keyed wizards still read naturally.
pub fn format_step_label<S>(position: &StepPosition<S>) -> String {
    format!("Step {} of {}", position.number, position.count)
}
