//! Event handling for the TUI
//!
//! Reads crossterm events on a background thread and forwards the ones the
//! walkthrough cares about over a channel.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Reading from the terminal failed
    Failed(String),
}

/// Event handler for terminal events
pub struct EventHandler {
    receiver: mpsc::Receiver<Event>,
}

impl EventHandler {
    /// Start reading events, polling at `poll_interval`
    pub fn new(poll_interval: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();

        thread::spawn(move || loop {
            let event = match event::poll(poll_interval) {
                Ok(false) => continue,
                Ok(true) => match event::read() {
                    // Windows reports both press and release
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Event::Key(key)
                    }
                    Ok(CrosstermEvent::Resize(width, height)) => Event::Resize(width, height),
                    Ok(_) => continue,
                    Err(e) => Event::Failed(e.to_string()),
                },
                Err(e) => Event::Failed(e.to_string()),
            };

            let failed = matches!(event, Event::Failed(_));
            if sender.send(event).is_err() || failed {
                return;
            }
        });

        Self { receiver }
    }

    /// Get the next event (blocking)
    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.receiver.recv()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}
