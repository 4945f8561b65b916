//! Key handling for the demo walkthrough

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::DemoApp;

/// Apply a key press to the walkthrough
pub fn handle_key_event(app: &mut DemoApp, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.cancel(),
        KeyCode::Char('q') | KeyCode::Esc => app.cancel(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.activate(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ButtonLabels;
    use crate::tui::app::DemoOutcome;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_advances_and_escape_cancels() {
        let labels = ButtonLabels::default();
        let steps = vec!["a".to_string(), "b".to_string()];
        let mut app = DemoApp::new(&steps, &labels).unwrap();

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.position().current, "b");

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert_eq!(app.outcome, Some(DemoOutcome::Cancelled));
    }

    #[test]
    fn test_focus_keys() {
        let labels = ButtonLabels::default();
        let steps = vec!["a".to_string(), "b".to_string()];
        let mut app = DemoApp::new(&steps, &labels).unwrap();
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert_eq!(app.focused, 1);

        handle_key_event(&mut app, key(KeyCode::Left));
        assert_eq!(app.focused, 0);
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused, 1);

        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
