use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::TitleBar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hints_area] = layout.areas(frame.area());

    let breadcrumb = app
        .navigation
        .routes()
        .map(|route| route.title().to_string())
        .collect();
    let notice = app.notice.as_ref().map(|n| n.text.clone());
    TitleBar::new(breadcrumb, notice).render(frame, title_area);

    tui.screen.render(frame, main_area);

    frame.render_widget(
        Paragraph::new(tui.screen.key_hints()).style(Style::default().fg(Color::DarkGray)),
        hints_area,
    );
}
