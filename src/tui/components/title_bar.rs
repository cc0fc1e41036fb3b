//! # TitleBar Component
//!
//! Top status bar showing where the user is and any pending notice.
//!
//! ## Responsibilities
//!
//! - Display the back-stack as a breadcrumb (`Login › List › Debug`)
//! - Display the current notice (toast), if one is up
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(vec!["Login".into(), "List".into()], Some("Playing".into()));
//! title_bar.render(frame, area);
//! ```
//!
//! ### State Ownership
//!
//! Both props come from core `App` state: the breadcrumb from the
//! navigation stack, the notice from `App::notice`. The TitleBar doesn't
//! care where they come from. It just renders what it's given.
//!
//! ## Conditional Formatting
//!
//! 1. **Notice**: `"Waypoint | Login › List | Playing"`
//! 2. **Default**: `"Waypoint | Login › List"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const BREADCRUMB_SEPARATOR: &str = " › ";

/// Top status bar component showing the breadcrumb and notice.
pub struct TitleBar {
    /// Route titles from root to top
    pub breadcrumb: Vec<String>,
    /// Transient notice text
    pub notice: Option<String>,
}

impl TitleBar {
    pub fn new(breadcrumb: Vec<String>, notice: Option<String>) -> Self {
        Self { breadcrumb, notice }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Waypoint", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.breadcrumb.join(BREADCRUMB_SEPARATOR)),
        ];

        if let Some(notice) = &self.notice {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                notice.clone(),
                Style::default().fg(Color::Black).bg(Color::Yellow),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
