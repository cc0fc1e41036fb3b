//! # Screens
//!
//! One screen per [`Route`] variant. Each screen takes the route's fields as
//! props, keeps its own local state, and emits screen-specific events.
//!
//! [`ActiveScreen`] is the mounted screen. It is rebuilt from the top of the
//! navigation stack whenever the stack changes, so per-screen state lives
//! exactly as long as the screen is on display:
//!
//! ```text
//! Route::Login               → LoginScreen   (fresh LoginForm)
//! Route::List { email }      → ListScreen    (fresh Transport)
//! Route::Detail { item_name } → DetailScreen
//! ```
//!
//! Screen events are translated into core `Action`s here, so screens never
//! touch `App` directly.

pub mod detail;
pub mod list;
pub mod login;

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::action::Action;
use crate::core::list::{open_item, open_item_notice};
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub use detail::{DetailEvent, DetailScreen};
pub use list::{ListEvent, ListScreen};
pub use login::{LoginEvent, LoginScreen};

pub enum ActiveScreen {
    Login(LoginScreen),
    List(ListScreen),
    Detail(DetailScreen),
}

impl ActiveScreen {
    /// Build the screen for `route`, passing its typed fields as props.
    pub fn mount(route: &Route, app: &App) -> Self {
        match route {
            Route::Login => ActiveScreen::Login(LoginScreen::new(app.prefill_email.as_deref())),
            Route::List { email } => ActiveScreen::List(ListScreen::new(email.clone())),
            Route::Detail { item_name } => {
                ActiveScreen::Detail(DetailScreen::new(item_name.clone()))
            }
        }
    }

    /// Key help shown in the footer.
    pub fn key_hints(&self) -> &'static str {
        match self {
            ActiveScreen::Login(_) => {
                "Tab/↑↓ Move  Enter Select  Ctrl+R Show/Hide  Ctrl+C Quit"
            }
            ActiveScreen::List(_) => {
                "↑↓ Select  Enter Open  Tab Controls  Space Play/Pause  Esc Back  Ctrl+C Quit"
            }
            ActiveScreen::Detail(_) => "Esc/Backspace Back  Ctrl+C Quit",
        }
    }
}

impl Component for ActiveScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            ActiveScreen::Login(screen) => screen.render(frame, area),
            ActiveScreen::List(screen) => screen.render(frame, area),
            ActiveScreen::Detail(screen) => screen.render(frame, area),
        }
    }
}

impl EventHandler for ActiveScreen {
    type Event = Vec<Action>;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match self {
            ActiveScreen::Login(screen) => match screen.handle_event(event)? {
                LoginEvent::Navigate(route) => Some(vec![Action::Navigate(route)]),
            },
            ActiveScreen::List(screen) => match screen.handle_event(event)? {
                ListEvent::Open(label) => Some(vec![
                    Action::Notify(open_item_notice(label)),
                    Action::Navigate(open_item(label)),
                ]),
                ListEvent::Transport(notice) => Some(vec![Action::Notify(notice)]),
            },
            ActiveScreen::Detail(screen) => match screen.handle_event(event)? {
                DetailEvent::Back => Some(vec![Action::Back]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_mount_matches_route() {
        let app = test_app();
        assert!(matches!(
            ActiveScreen::mount(&Route::Login, &app),
            ActiveScreen::Login(_)
        ));

        let list = ActiveScreen::mount(
            &Route::List {
                email: Some("user@example.com".to_string()),
            },
            &app,
        );
        match list {
            ActiveScreen::List(screen) => {
                assert_eq!(screen.email.as_deref(), Some("user@example.com"))
            }
            _ => panic!("Expected List screen"),
        }

        let detail = ActiveScreen::mount(
            &Route::Detail {
                item_name: "Study".to_string(),
            },
            &app,
        );
        match detail {
            ActiveScreen::Detail(screen) => assert_eq!(screen.item_name, "Study"),
            _ => panic!("Expected Detail screen"),
        }
    }

    #[test]
    fn test_login_mount_uses_prefill() {
        let mut app = test_app();
        app.prefill_email = Some("pre@example.com".to_string());
        match ActiveScreen::mount(&Route::Login, &app) {
            ActiveScreen::Login(screen) => assert_eq!(screen.form.email, "pre@example.com"),
            _ => panic!("Expected Login screen"),
        }
    }

    #[test]
    fn test_list_open_notifies_then_navigates() {
        let app = test_app();
        let mut screen = ActiveScreen::mount(&Route::List { email: None }, &app);

        let actions = screen.handle_event(&TuiEvent::Submit);
        assert_eq!(
            actions,
            Some(vec![
                Action::Notify("Opening Settings".to_string()),
                Action::Navigate(Route::Detail {
                    item_name: "Settings".to_string()
                }),
            ])
        );
    }

    #[test]
    fn test_detail_backspace_is_back() {
        let app = test_app();
        let mut screen = ActiveScreen::mount(
            &Route::Detail {
                item_name: "Chat".to_string(),
            },
            &app,
        );
        assert_eq!(
            screen.handle_event(&TuiEvent::Backspace),
            Some(vec![Action::Back])
        );
    }

    #[test]
    fn test_escape_reaches_screen_first() {
        let app = test_app();
        let mut detail = ActiveScreen::mount(
            &Route::Detail {
                item_name: "Chat".to_string(),
            },
            &app,
        );
        assert_eq!(
            detail.handle_event(&TuiEvent::Escape),
            Some(vec![Action::Back])
        );

        // Login and List leave Esc to the host
        let mut login = ActiveScreen::mount(&Route::Login, &app);
        assert_eq!(login.handle_event(&TuiEvent::Escape), None);
        let mut list = ActiveScreen::mount(&Route::List { email: None }, &app);
        assert_eq!(list.handle_event(&TuiEvent::Escape), None);
    }
}
