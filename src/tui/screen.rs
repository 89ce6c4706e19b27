//! Screen trait and transition type shared by both applications.

use crossterm::event::KeyEvent;
use ratatui::Frame;

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Keep running; redraw on the next tick.
    Stay,
    /// A quiz was started; the event loop must fetch questions in the background.
    Fetch,
    /// Exit the application cleanly.
    Quit,
}

/// Implemented by each full-screen view.
///
/// The event loop calls [`Screen::render`] every tick and
/// [`Screen::handle_key`] for each key press.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;
}
