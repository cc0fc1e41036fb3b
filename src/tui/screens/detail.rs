//! # Detail Screen
//!
//! Purely presentational: the item name and one sentence about it.
//! Backspace and Esc both go back.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::detail::description;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::ACCENT;
use crate::tui::event::TuiEvent;

const CARD_WIDTH: u16 = 52;
const CARD_HEIGHT: u16 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
}

pub struct DetailScreen {
    /// Route parameter (Prop)
    pub item_name: String,
}

impl DetailScreen {
    pub fn new(item_name: String) -> Self {
        Self { item_name }
    }
}

impl Component for DetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [row] = Layout::vertical([Constraint::Length(CARD_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);

        let text = vec![
            Line::from(Span::styled("ⓘ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))),
            Line::default(),
            Line::from(Span::styled(
                self.item_name.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                description(&self.item_name),
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(text)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::uniform(1)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(paragraph, card);
    }
}

impl EventHandler for DetailScreen {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Backspace | TuiEvent::Escape => Some(DetailEvent::Back),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_text;

    #[test]
    fn test_renders_name_and_description() {
        let mut screen = DetailScreen::new("Debug".to_string());
        let text = render_to_text(60, 12, |f| {
            let area = f.area();
            screen.render(f, area);
        });

        assert!(text.contains("Debug"));
        assert!(text.contains("This is the detail screen for Debug."));
    }

    #[test]
    fn test_backspace_goes_back() {
        let mut screen = DetailScreen::new("Chat".to_string());
        assert_eq!(screen.handle_event(&TuiEvent::Backspace), Some(DetailEvent::Back));
        assert_eq!(screen.handle_event(&TuiEvent::Escape), Some(DetailEvent::Back));
        assert_eq!(screen.handle_event(&TuiEvent::InputChar('x')), None);
    }
}
