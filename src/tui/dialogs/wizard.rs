//! Wizard step dialog
//!
//! A centered box titled with the progress label, showing the current step
//! and its button row.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::services::format_step_label;
use crate::tui::app::DemoApp;
use crate::tui::layout::{centered_rect_fixed, WizardLayout, DIALOG_HEIGHT, DIALOG_WIDTH};
use crate::tui::widgets::ButtonBar;

/// Render the wizard dialog for the current step
pub fn render(frame: &mut Frame, app: &DemoApp) {
    let area = centered_rect_fixed(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let position = app.position();
    let block = Block::default()
        .title(format!(" {} ", format_step_label(position)))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = WizardLayout::new(inner);

    let mut body = vec![
        Line::from(vec![
            Span::styled("Step: ", Style::default().fg(Color::Cyan)),
            Span::styled(
                position.current.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ];
    if let Some(message) = &app.status_message {
        body.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(
        Paragraph::new(body).wrap(Wrap { trim: false }),
        layout.body,
    );

    let buttons = app.buttons();
    frame.render_widget(ButtonBar::new(&buttons).focused(app.focused), layout.buttons);

    let hints = Line::from(vec![
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Focus  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Press  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), layout.hints);
}
