//! # TextField Component
//!
//! Single-line text entry used by the login form.
//!
//! ## Responsibilities
//!
//! - Capture text input and paste (newlines are dropped)
//! - Handle editing (backspace, delete, cursor movement)
//! - Mask the display for password entry
//!
//! ## Input Kind
//!
//! `InputKind` is the keyboard hint for the field. `Email` shows an address
//! placeholder; `Password` renders `•` per character unless `revealed` is set.
//! The buffer itself is never altered by the hint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MASK_CHAR: char = '•';
const EMAIL_PLACEHOLDER: &str = "name@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Password,
}

/// High-level events emitted by the TextField
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// Buffer text changed
    Changed(String),
    /// Enter pressed
    Submit,
}

pub struct TextField {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor as byte offset in buffer (Internal State)
    cursor: usize,
    /// Border title (Prop)
    pub label: &'static str,
    /// Keyboard hint (Prop)
    pub kind: InputKind,
    /// Show password text in the clear (Prop)
    pub revealed: bool,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
}

impl TextField {
    pub fn new(label: &'static str, kind: InputKind) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            label,
            kind,
            revealed: false,
            focused: false,
        }
    }

    /// Field pre-filled with `text`, cursor at the end.
    pub fn with_text(label: &'static str, kind: InputKind, text: &str) -> Self {
        let mut field = Self::new(label, kind);
        field.buffer = text.to_string();
        field.cursor = field.buffer.len();
        field
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text as it should appear on screen.
    pub fn display_text(&self) -> String {
        match self.kind {
            InputKind::Password if !self.revealed => {
                std::iter::repeat_n(MASK_CHAR, self.buffer.chars().count()).collect()
            }
            _ => self.buffer.clone(),
        }
    }

    /// Display columns between the start of the text and the cursor.
    fn cursor_column(&self) -> u16 {
        let before = &self.buffer[..self.cursor];
        let width = match self.kind {
            InputKind::Password if !self.revealed => before.chars().count(),
            _ => before.width(),
        };
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    fn insert_str(&mut self, text: &str) -> Option<FieldEvent> {
        let clean: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if clean.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
        Some(FieldEvent::Changed(self.buffer.clone()))
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(self.label, Style::default().fg(Color::White)));

        let content = if self.buffer.is_empty() && self.kind == InputKind::Email {
            Line::from(Span::styled(
                EMAIL_PLACEHOLDER,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(self.display_text())
        };

        // Keep the cursor in view when text overflows the box
        let inner_width = area.width.saturating_sub(2);
        let column = self.cursor_column();
        let scroll_x = column.saturating_sub(inner_width.saturating_sub(1));

        let paragraph = Paragraph::new(content)
            .block(block)
            .style(Style::default().fg(Color::White))
            .scroll((0, scroll_x));
        frame.render_widget(paragraph, area);

        if self.focused && area.width > 2 && area.height > 2 {
            let x = area.x + 1 + column - scroll_x;
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut buf = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut buf))
            }
            TuiEvent::Paste(text) => self.insert_str(text),
            TuiEvent::Backspace => {
                let prev = prev_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Delete => {
                let next = next_char_boundary(&self.buffer, self.cursor)?;
                self.buffer.drain(self.cursor..next);
                Some(FieldEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor)?;
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor)?;
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(FieldEvent::Submit),
            _ => None,
        }
    }
}

fn prev_char_boundary(s: &str, pos: usize) -> Option<usize> {
    s[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_char_boundary(s: &str, pos: usize) -> Option<usize> {
    s[pos..].chars().next().map(|c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_text;

    fn type_str(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.handle_event(&TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_emits_changed() {
        let mut field = TextField::new("Email", InputKind::Email);
        let res = field.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(FieldEvent::Changed("a".to_string())));
        type_str(&mut field, "bc");
        assert_eq!(field.buffer, "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_backspace_and_delete_at_edges() {
        let mut field = TextField::new("Email", InputKind::Email);
        assert_eq!(field.handle_event(&TuiEvent::Backspace), None);

        type_str(&mut field, "ab");
        assert_eq!(field.handle_event(&TuiEvent::Delete), None);

        let res = field.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(FieldEvent::Changed("a".to_string())));
    }

    #[test]
    fn test_cursor_movement_edits_in_place() {
        let mut field = TextField::with_text("Email", InputKind::Email, "usr");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::InputChar('s'));
        assert_eq!(field.buffer, "ussr");

        field.handle_event(&TuiEvent::CursorHome);
        field.handle_event(&TuiEvent::Delete);
        assert_eq!(field.buffer, "ssr");

        field.handle_event(&TuiEvent::CursorEnd);
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut field = TextField::new("Email", InputKind::Email);
        type_str(&mut field, "é✓");
        field.handle_event(&TuiEvent::CursorLeft);
        field.handle_event(&TuiEvent::Backspace);
        assert_eq!(field.buffer, "✓");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_paste_strips_newlines() {
        let mut field = TextField::new("Email", InputKind::Email);
        let res = field.handle_event(&TuiEvent::Paste("user@\nexample.com\r\n".to_string()));
        assert_eq!(res, Some(FieldEvent::Changed("user@example.com".to_string())));
        assert_eq!(field.handle_event(&TuiEvent::Paste("\n".to_string())), None);
    }

    #[test]
    fn test_password_masking() {
        let mut field = TextField::with_text("Password", InputKind::Password, "abc");
        assert_eq!(field.display_text(), "•••");
        field.revealed = true;
        assert_eq!(field.display_text(), "abc");
    }

    #[test]
    fn test_enter_submits() {
        let mut field = TextField::new("Password", InputKind::Password);
        assert_eq!(field.handle_event(&TuiEvent::Submit), Some(FieldEvent::Submit));
    }

    #[test]
    fn test_render_placeholder_and_mask() {
        let mut email = TextField::new("Email", InputKind::Email);
        let text = render_to_text(30, 3, |f| {
            let area = f.area();
            email.render(f, area)
        });
        assert!(text.contains("Email"));
        assert!(text.contains(EMAIL_PLACEHOLDER));

        let mut password = TextField::with_text("Password", InputKind::Password, "hunter2");
        let text = render_to_text(30, 3, |f| {
            let area = f.area();
            password.render(f, area)
        });
        assert!(text.contains("•••••••"));
        assert!(!text.contains("hunter2"));
    }
}
