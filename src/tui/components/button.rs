//! # Button Component
//!
//! Stateless, props-only. A bracketed label that highlights when focused.
//! Activation is handled by the owning screen, which knows what the button
//! means; the button only draws itself.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const ACCENT: Color = Color::Rgb(0xFF, 0x00, 0x50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Filled with the accent color.
    Primary,
    /// Plain text link.
    Text,
}

pub struct Button<'a> {
    pub label: &'a str,
    pub focused: bool,
    pub style: ButtonStyle,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, style: ButtonStyle, focused: bool) -> Self {
        Self {
            label,
            focused,
            style,
        }
    }

    /// Width the button needs, brackets included.
    pub fn width(label: &str) -> u16 {
        u16::try_from(unicode_width::UnicodeWidthStr::width(label) + 4).unwrap_or(u16::MAX)
    }

    fn line(&self) -> Line<'a> {
        let style = match (self.style, self.focused) {
            (ButtonStyle::Primary, true) => Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (ButtonStyle::Primary, false) => Style::default().fg(Color::White).bg(ACCENT),
            (ButtonStyle::Text, true) => Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            (ButtonStyle::Text, false) => Style::default().fg(Color::Gray),
        };
        let (open, close) = if self.focused { ("▶ ", " ◀") } else { ("[ ", " ]") };
        Line::from(vec![
            Span::raw(open),
            Span::styled(self.label, style),
            Span::raw(close),
        ])
    }
}

impl Component for Button<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.line()).alignment(Alignment::Center), area);
    }
}
