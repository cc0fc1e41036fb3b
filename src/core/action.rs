//! # Actions
//!
//! Everything that can happen in Waypoint becomes an `Action`.
//! User logs in? That's `Action::Navigate(Route::List { .. })`.
//! User presses Esc? That's `Action::Back`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` telling the event loop what else to do.
//! No terminal I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Navigation changes are not reported through `Effect`: the stack notifies
//! its subscribers, and the renderer remounts from that.

use log::{debug, info};
use std::time::Instant;

use crate::core::route::Route;
use crate::core::state::{App, Notice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Push a route onto the back-stack.
    Navigate(Route),
    /// Pop the top route. No-op at the root.
    Back,
    /// Post a transient notice.
    Notify(String),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => {
            app.navigation.push(route);
            Effect::None
        }
        Action::Back => {
            if app.navigation.pop().is_none() {
                debug!("Back ignored: cannot pop past root");
            }
            Effect::None
        }
        Action::Notify(text) => {
            if app.notices_enabled {
                debug!("Notice: {}", text);
                app.notice = Some(Notice::new(text, Instant::now()));
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested at {}", app.navigation.current());
            Effect::Quit
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::NavChange;
    use crate::test_support::test_app;

    #[test]
    fn test_navigate_pushes() {
        let mut app = test_app();
        let route = Route::List {
            email: Some("user@example.com".to_string()),
        };
        let effect = update(&mut app, Action::Navigate(route.clone()));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.current_route(), &route);
        assert_eq!(app.navigation.depth(), 2);
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut app = test_app();
        let rx = app.navigation.subscribe();

        let effect = update(&mut app, Action::Back);

        assert_eq!(effect, Effect::None);
        assert_eq!(app.navigation.depth(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_back_pops_and_notifies() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::List { email: None }));
        let rx = app.navigation.subscribe();

        update(&mut app, Action::Back);

        assert_eq!(app.current_route(), &Route::Login);
        assert_eq!(
            rx.try_recv(),
            Ok(NavChange::Popped(Route::List { email: None }))
        );
    }

    #[test]
    fn test_notify_sets_notice() {
        let mut app = test_app();
        update(&mut app, Action::Notify("Playing".to_string()));
        assert_eq!(app.notice.as_ref().map(|n| n.text.as_str()), Some("Playing"));
    }

    #[test]
    fn test_notify_respects_disabled_notices() {
        let mut app = test_app();
        app.notices_enabled = false;
        update(&mut app, Action::Notify("Playing".to_string()));
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
