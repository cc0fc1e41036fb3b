//! # Application State
//!
//! Core state for Waypoint. Domain logic only, no TUI-specific types.
//! Per-screen presentation state (form buffers, list selection) lives in
//! the `tui` module and is dropped when its screen unmounts.
//!
//! ```text
//! App
//! ├── navigation: NavigationStack   // back-stack, top = visible screen
//! ├── notice: Option<Notice>        // transient toast in the title bar
//! ├── notices_enabled: bool         // config switch for notices
//! ├── notice_duration: Duration     // how long a notice stays up
//! └── prefill_email: Option<String> // seeds the login form on mount
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::time::{Duration, Instant};

use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavigationStack;
use crate::core::route::Route;

/// A fire-and-forget message shown until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub posted_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>, posted_at: Instant) -> Self {
        Self {
            text: text.into(),
            posted_at,
        }
    }

    pub fn is_expired(&self, now: Instant, duration: Duration) -> bool {
        now.saturating_duration_since(self.posted_at) >= duration
    }
}

pub struct App {
    pub navigation: NavigationStack,
    pub notice: Option<Notice>,
    pub notices_enabled: bool,
    pub notice_duration: Duration,
    pub prefill_email: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            navigation: NavigationStack::new(Route::Login),
            notice: None,
            notices_enabled: config.notices_enabled,
            notice_duration: config.notice_duration,
            prefill_email: config.prefill_email.clone(),
        }
    }

    pub fn current_route(&self) -> &Route {
        self.navigation.current()
    }

    /// Drop the notice if it has run its course. Returns true if one was removed.
    pub fn expire_notice(&mut self, now: Instant) -> bool {
        match &self.notice {
            Some(notice) if notice.is_expired(now, self.notice_duration) => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.current_route(), &Route::Login);
        assert_eq!(app.navigation.depth(), 1);
        assert!(app.notice.is_none());
        assert!(app.notices_enabled);
    }

    #[test]
    fn test_from_config_copies_settings() {
        let config = ResolvedConfig {
            prefill_email: Some("user@example.com".to_string()),
            notices_enabled: false,
            notice_duration: Duration::from_millis(10),
            ..Default::default()
        };
        let app = App::from_config(&config);
        assert_eq!(app.prefill_email.as_deref(), Some("user@example.com"));
        assert!(!app.notices_enabled);
        assert_eq!(app.notice_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_expire_notice() {
        let mut app = test_app();
        let posted = Instant::now();
        app.notice = Some(Notice::new("Playing", posted));

        assert!(!app.expire_notice(posted + app.notice_duration / 2));
        assert!(app.notice.is_some());

        assert!(app.expire_notice(posted + app.notice_duration));
        assert!(app.notice.is_none());

        // Nothing left to expire
        assert!(!app.expire_notice(posted + app.notice_duration * 2));
    }
}
