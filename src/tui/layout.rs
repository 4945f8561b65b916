//! Layout definitions for the TUI
//!
//! Splits the wizard dialog into its body, button bar and key hints.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Fixed dialog width
pub const DIALOG_WIDTH: u16 = 64;

/// Fixed dialog height
pub const DIALOG_HEIGHT: u16 = 12;

/// Layout regions inside the wizard dialog
pub struct WizardLayout {
    /// Step content
    pub body: Rect,
    /// Navigation buttons
    pub buttons: Rect,
    /// Key hints
    pub hints: Rect,
}

impl WizardLayout {
    /// Calculate layout from the dialog's inner area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Self {
            body: chunks[0],
            buttons: chunks[2],
            hints: chunks[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
