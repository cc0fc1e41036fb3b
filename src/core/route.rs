//! # Routes
//!
//! Every destination in Waypoint is a variant of [`Route`]. Parameters
//! travel as typed fields on the variant, so pushing a screen means
//! constructing a complete value:
//!
//! ```rust,ignore
//! update(&mut app, Action::Navigate(Route::Detail { item_name: "Debug".into() }));
//! ```
//!
//! There is no string-keyed argument bag to get wrong. The host matches on
//! the variant to pick both the screen and its inputs.

use std::fmt;

/// A navigable destination plus the parameters it needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Start screen.
    #[default]
    Login,
    /// Landing list, greeted with the email used to log in.
    List { email: Option<String> },
    /// Detail page for one list entry.
    Detail { item_name: String },
}

impl Route {
    /// Short label used in the title bar breadcrumb.
    pub fn title(&self) -> &str {
        match self {
            Route::Login => "Login",
            Route::List { .. } => "List",
            Route::Detail { item_name } => item_name,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => write!(f, "Login"),
            Route::List { email: Some(email) } => write!(f, "List(email={email})"),
            Route::List { email: None } => write!(f, "List"),
            Route::Detail { item_name } => write!(f, "Detail(item_name={item_name})"),
        }
    }
}
