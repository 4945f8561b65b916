//! Button-set selection
//!
//! Decides which navigation buttons a wizard step shows. The policy:
//!
//! - On any step but the first, lead with back-navigation. When the previous
//!   step *is* the first step, "First" and "Previous" would point at the same
//!   place, so only "Previous" is shown. Otherwise both are shown, "First"
//!   then "Previous".
//! - Always end with a single submit button: "Finish" on the last step,
//!   "Next" everywhere else.
//!
//! Selection is pure and never fails. Input is taken as-is without
//! validation.

use std::borrow::Cow;

use crate::models::{ButtonDescriptor, ButtonKind, ButtonLabels, ButtonSet, StepPosition};

/// Selects the button row for a step, using a configurable set of labels
#[derive(Debug, Clone)]
pub struct ButtonSelector<'a> {
    labels: Cow<'a, ButtonLabels>,
}

impl Default for ButtonSelector<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ButtonSelector<'a> {
    /// Create a selector with the default English labels
    pub fn new() -> Self {
        Self {
            labels: Cow::Owned(ButtonLabels::default()),
        }
    }

    /// Create a selector that takes its labels from `labels`
    pub fn with_labels(labels: &'a ButtonLabels) -> Self {
        Self {
            labels: Cow::Borrowed(labels),
        }
    }

    /// Build the ordered button row for `position`
    pub fn select<S>(&self, position: &StepPosition<S>) -> ButtonSet<S>
    where
        S: Clone + PartialEq,
    {
        let mut buttons = Vec::with_capacity(3);

        if let Some(previous) = &position.previous {
            if *previous == position.first {
                buttons.push(self.navigate(ButtonKind::GotoPrevious, position.first.clone()));
            } else {
                buttons.push(self.navigate(ButtonKind::GotoFirst, position.first.clone()));
                buttons.push(self.navigate(ButtonKind::GotoPrevious, previous.clone()));
            }
        }

        let trailing = if position.current == position.last {
            ButtonKind::Finish
        } else {
            ButtonKind::Next
        };
        buttons.push(ButtonDescriptor::submit(trailing, self.labels.get(trailing)));

        tracing::debug!(
            step = position.number,
            count = position.count,
            buttons = buttons.len(),
            trailing = %trailing,
            "selected wizard buttons"
        );

        ButtonSet::new(buttons)
    }

    fn navigate<S>(&self, kind: ButtonKind, target: S) -> ButtonDescriptor<S> {
        ButtonDescriptor::navigate(kind, target, self.labels.get(kind))
    }
}

/// Build the ordered button row for `position` with the default labels
pub fn select_buttons<S>(position: &StepPosition<S>) -> ButtonSet<S>
where
    S: Clone + PartialEq,
{
    ButtonSelector::new().select(position)
}
