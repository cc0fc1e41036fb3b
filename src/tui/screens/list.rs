//! # List Screen
//!
//! Greets the logged-in email, lists the fixed entries, and shows the
//! placeholder transport row.
//!
//! Two focus zones, switched with Tab:
//! - **Items**: Up/Down select, Enter opens the detail screen
//! - **Transport**: Left/Right select a button, Enter presses it
//!
//! Space toggles Play/Pause from either zone.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};

use crate::core::list::{LIST_ITEMS, Transport, TransportControl, greeting};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{ACCENT, Button, ButtonStyle};
use crate::tui::event::TuiEvent;

const CONTENT_WIDTH: u16 = 44;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFocus {
    Items,
    Transport,
}

/// Events emitted by the list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// An entry was selected.
    Open(&'static str),
    /// A transport button was pressed; carries the notice text.
    Transport(String),
}

pub struct ListScreen {
    /// Route parameter (Prop)
    pub email: Option<String>,
    pub transport: Transport,
    pub focus: ListFocus,
    pub selected: usize,
    pub transport_selected: TransportControl,
    list_state: ListState,
}

impl ListScreen {
    pub fn new(email: Option<String>) -> Self {
        Self {
            email,
            transport: Transport::default(),
            focus: ListFocus::Items,
            selected: 0,
            transport_selected: TransportControl::PlayPause,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index.min(LIST_ITEMS.len() - 1);
        self.list_state.select(Some(self.selected));
    }

    fn move_transport(&mut self, step: isize) {
        let controls = TransportControl::ALL;
        let current = controls
            .iter()
            .position(|c| *c == self.transport_selected)
            .unwrap_or(0);
        let next = (current as isize + step).clamp(0, controls.len() as isize - 1);
        self.transport_selected = controls[next as usize];
    }

    fn press(&mut self, control: TransportControl) -> Option<ListEvent> {
        Some(ListEvent::Transport(self.transport.press(control)))
    }
}

fn icon_for(label: &str) -> &'static str {
    match label {
        "Settings" => "⚙",
        "Profile" => "☺",
        "Debug" => "⚒",
        "Study" => "⌖",
        "Chat" => "✉",
        _ => "ⓘ",
    }
}

impl Component for ListScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        let [column] = Layout::horizontal([Length(CONTENT_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);

        let list_height = LIST_ITEMS.len() as u16 + 2;
        let [greeting_area, _, list_area, _, transport_area] = Layout::vertical([
            Length(1),
            Length(1),
            Length(list_height),
            Length(1),
            Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        frame.render_widget(
            Paragraph::new(Line::from(greeting(self.email.as_deref())).centered())
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            greeting_area,
        );

        let items: Vec<ListItem> = LIST_ITEMS
            .iter()
            .map(|label| {
                ListItem::new(Line::from(vec![
                    Span::styled(icon_for(label), Style::default().fg(ACCENT)),
                    Span::raw("  "),
                    Span::styled(*label, Style::default().fg(Color::White)),
                ]))
            })
            .collect();

        let border_style = if self.focus == ListFocus::Items {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let list = List::new(items)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(border_style),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
            .highlight_symbol("› ");
        frame.render_stateful_widget(list, list_area, &mut self.list_state);

        let widths = TransportControl::ALL.map(|c| Length(Button::width(self.transport.label(c))));
        let buttons = Layout::horizontal(widths)
            .flex(Flex::Center)
            .spacing(2)
            .split(transport_area);
        for (control, button_area) in TransportControl::ALL.into_iter().zip(buttons.iter()) {
            let focused = self.focus == ListFocus::Transport && self.transport_selected == control;
            Button::new(self.transport.label(control), ButtonStyle::Primary, focused)
                .render(frame, *button_area);
        }
    }
}

impl EventHandler for ListScreen {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match (self.focus, event) {
            (_, TuiEvent::FocusNext | TuiEvent::FocusPrev) => {
                self.focus = match self.focus {
                    ListFocus::Items => ListFocus::Transport,
                    ListFocus::Transport => ListFocus::Items,
                };
                None
            }
            (_, TuiEvent::InputChar(' ')) => self.press(TransportControl::PlayPause),
            (ListFocus::Items, TuiEvent::CursorUp) => {
                self.select(self.selected.saturating_sub(1));
                None
            }
            (ListFocus::Items, TuiEvent::CursorDown) => {
                self.select(self.selected + 1);
                None
            }
            (ListFocus::Items, TuiEvent::Submit) => {
                LIST_ITEMS.get(self.selected).copied().map(ListEvent::Open)
            }
            (ListFocus::Transport, TuiEvent::CursorLeft) => {
                self.move_transport(-1);
                None
            }
            (ListFocus::Transport, TuiEvent::CursorRight) => {
                self.move_transport(1);
                None
            }
            (ListFocus::Transport, TuiEvent::Submit) => self.press(self.transport_selected),
            _ => None,
        }
    }
}
