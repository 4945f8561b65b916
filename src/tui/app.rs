//! Application state for the demo walkthrough
//!
//! Walks through a list of step keys using the button rows the selector
//! produces. Only the current step index is tracked; no form data is kept.

use crate::error::{WizardError, WizardResult};
use crate::models::{ButtonAction, ButtonKind, ButtonLabels, ButtonSet, StepPosition};
use crate::services::ButtonSelector;

/// How a walkthrough ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoOutcome {
    /// The user pressed Finish on the last step
    Finished,
    /// The user quit early
    Cancelled,
}

/// Main application state
#[derive(Debug)]
pub struct DemoApp<'a> {
    /// Precomputed position for every step, in order
    positions: Vec<StepPosition<String>>,

    /// Index of the step being shown
    index: usize,

    /// Index of the focused button in the current row
    pub focused: usize,

    selector: ButtonSelector<'a>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Set once the walkthrough ends
    pub outcome: Option<DemoOutcome>,

    /// Last action, shown under the step content
    pub status_message: Option<String>,
}

impl<'a> DemoApp<'a> {
    /// Create a walkthrough over `steps`
    pub fn new(steps: &[String], labels: &'a ButtonLabels) -> WizardResult<Self> {
        if steps.is_empty() {
            return Err(WizardError::Validation(
                "A wizard needs at least one step".into(),
            ));
        }

        // One position per step, rejecting duplicate keys up front
        let positions = (0..steps.len())
            .map(|i| StepPosition::from_steps(steps, i))
            .collect::<WizardResult<Vec<_>>>()?;

        let mut app = Self {
            positions,
            index: 0,
            focused: 0,
            selector: ButtonSelector::with_labels(labels),
            should_quit: false,
            outcome: None,
            status_message: None,
        };
        // Start with the submit button focused
        app.focus_primary();
        Ok(app)
    }

    /// Position of the step being shown
    pub fn position(&self) -> &StepPosition<String> {
        &self.positions[self.index]
    }

    /// Button row for the step being shown
    pub fn buttons(&self) -> ButtonSet<String> {
        self.selector.select(self.position())
    }

    /// Move focus one button to the right, wrapping around
    pub fn focus_next(&mut self) {
        let len = self.buttons().len();
        if len > 0 {
            self.focused = (self.focused + 1) % len;
        }
    }

    /// Move focus one button to the left, wrapping around
    pub fn focus_prev(&mut self) {
        let len = self.buttons().len();
        if len > 0 {
            self.focused = (self.focused + len - 1) % len;
        }
    }

    /// Press the focused button
    pub fn activate(&mut self) {
        let buttons = self.buttons();
        let Some(button) = buttons.get(self.focused) else {
            return;
        };

        match &button.action {
            ButtonAction::NavigateTo(target) => {
                // Jump back to the button's target
                if let Some(index) = self.positions.iter().position(|p| &p.current == target) {
                    tracing::debug!(from = self.index + 1, to = index + 1, "navigate to step");
                    self.index = index;
                    self.status_message = Some(format!("Went back to '{}'", target));
                }
            }
            ButtonAction::Submit => match button.kind {
                ButtonKind::Finish => {
                    tracing::info!(steps = self.positions.len(), "wizard finished");
                    self.status_message = Some("Wizard complete".to_string());
                    self.outcome = Some(DemoOutcome::Finished);
                    self.should_quit = true;
                    return;
                }
                _ => {
                    // Advance, staying put on the last step
                    let submitted = self.position().current.clone();
                    if self.index + 1 < self.positions.len() {
                        self.index += 1;
                    }
                    tracing::debug!(step = self.index + 1, "advanced to step");
                    self.status_message = Some(format!("Submitted '{}'", submitted));
                }
            },
        }

        self.focus_primary();
    }

    /// Quit without finishing
    pub fn cancel(&mut self) {
        self.outcome = Some(DemoOutcome::Cancelled);
        self.should_quit = true;
    }

    fn focus_primary(&mut self) {
        self.focused = self.buttons().len().saturating_sub(1);
    }
}
