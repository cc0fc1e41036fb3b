//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::core::state::App;

/// Creates a test App with default settings and the Login root.
pub fn test_app() -> App {
    App::new()
}

/// Flatten a rendered buffer into one string of cell symbols.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}

/// Render with `draw` into a fresh `width` x `height` test terminal and return its text.
pub fn render_to_text(
    width: u16,
    height: u16,
    draw: impl FnOnce(&mut ratatui::Frame),
) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(draw).unwrap();
    buffer_text(terminal.backend().buffer())
}
