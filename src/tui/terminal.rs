//! Terminal setup and teardown
//!
//! Initializes and restores the terminal around the demo walkthrough,
//! including a panic hook that restores the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::settings::Settings;
use crate::error::WizardError;

use super::app::{DemoApp, DemoOutcome};
use super::event::{Event, EventHandler};
use super::handler::handle_key_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Restore terminal before printing panic info
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    // Enable raw mode and enter alternate screen
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Create terminal
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive walkthrough over `steps`
pub fn run_demo(settings: &Settings, steps: &[String]) -> Result<DemoOutcome> {
    // Create app state
    let mut app = DemoApp::new(steps, &settings.labels)?;

    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    restore_terminal()?;
    result?;

    Ok(app.outcome.unwrap_or(DemoOutcome::Cancelled))
}

fn event_loop(terminal: &mut Tui, app: &mut DemoApp) -> Result<()> {
    let events = EventHandler::default();

    // Main event loop
    while !app.should_quit {
        terminal.draw(|frame| super::dialogs::wizard::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            // Terminal will redraw on the next pass
            Event::Resize(_, _) => {}
            Event::Failed(message) => return Err(WizardError::Tui(message).into()),
        }
    }

    Ok(())
}
