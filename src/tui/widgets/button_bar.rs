//! Button bar widget
//!
//! Draws a wizard's button row left to right on a single line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::{ButtonSet, ButtonStyle};

/// Gap between adjacent buttons
const BUTTON_GAP: &str = "  ";

/// A row of wizard buttons
#[derive(Debug, Clone)]
pub struct ButtonBar<'a, S> {
    buttons: &'a ButtonSet<S>,
    focused: Option<usize>,
}

impl<'a, S> ButtonBar<'a, S> {
    /// Create a bar for `buttons` with nothing focused
    pub fn new(buttons: &'a ButtonSet<S>) -> Self {
        Self {
            buttons,
            focused: None,
        }
    }

    /// Highlight the button at `index`
    pub fn focused(mut self, index: usize) -> Self {
        self.focused = Some(index);
        self
    }

    /// Style for a button, taking emphasis and focus into account
    pub fn button_style(style: ButtonStyle, focused: bool) -> Style {
        let base = match style {
            ButtonStyle::Primary => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            ButtonStyle::Plain => Style::default().fg(Color::White),
        };

        if focused {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }

    /// The bar as a styled line
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.buttons.len() * 2);

        for (i, button) in self.buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(BUTTON_GAP));
            }
            let focused = self.focused == Some(i);
            spans.push(Span::styled(
                format!("[ {} ]", button.label),
                Self::button_style(button.style, focused),
            ));
        }

        Line::from(spans)
    }

    /// Width in cells needed to draw every button
    pub fn width(&self) -> u16 {
        u16::try_from(self.line().width()).unwrap_or(u16::MAX)
    }
}

impl<S> Widget for ButtonBar<'_, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let line = self.line();
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ButtonDescriptor, ButtonKind, StepPosition};
    use crate::services::select_buttons;

    fn row_text(buf: &Buffer) -> String {
        buf.content.iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_buttons_in_order() {
        let set = select_buttons(&StepPosition::ordinal(3, 3).unwrap());
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);

        ButtonBar::new(&set).render(area, &mut buf);

        assert_eq!(
            row_text(&buf).trim_end(),
            "[ First ]  [ Previous ]  [ Finish ]"
        );
    }

    #[test]
    fn test_width() {
        let set = select_buttons(&StepPosition::ordinal(1, 3).unwrap());
        assert_eq!(ButtonBar::new(&set).width(), "[ Next ]".len() as u16);
    }

    #[test]
    fn test_width_saturates_for_long_labels() {
        let long = "x".repeat(usize::from(u16::MAX) + 10);
        let set: ButtonSet<usize> = ButtonSet::new(vec![ButtonDescriptor::submit(ButtonKind::Next, long)]);
        assert_eq!(ButtonBar::new(&set).width(), u16::MAX);
    }

    #[test]
    fn test_primary_and_focus_styles() {
        let set = select_buttons(&StepPosition::ordinal(2, 3).unwrap());
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);

        ButtonBar::new(&set).focused(0).render(area, &mut buf);

        // "[ Previous ]" is focused and plain
        let previous = &buf.content[0];
        assert!(previous.modifier.contains(Modifier::REVERSED));
        assert_eq!(previous.fg, Color::White);

        // "[ Next ]" starts after "[ Previous ]" and the gap
        let next = &buf.content["[ Previous ]  ".len()];
        assert_eq!(next.symbol(), "[");
        assert_eq!(next.fg, Color::Green);
        assert!(next.modifier.contains(Modifier::BOLD));
        assert!(!next.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_truncates_to_area() {
        let set = select_buttons(&StepPosition::ordinal(4, 4).unwrap());
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);

        ButtonBar::new(&set).render(area, &mut buf);
        assert_eq!(row_text(&buf), "[ First ] ");
    }
}
