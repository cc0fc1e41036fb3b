//! # Login Form
//!
//! Form state for the Login screen. Lives only as long as the screen is
//! mounted; popping back to Login starts over with a fresh form.
//!
//! ```text
//!            edit_* / toggle_visibility (error untouched)
//!              ┌──────┐            ┌──────┐
//!              ▼      │            ▼      │
//!         ┌─────────┐ │  submit  ┌────────────────────┐
//!         │ Editing │─┴────────▶│ ShowingError(msg)  │
//!         └─────────┘   invalid  └────────────────────┘
//!              │                          │
//!              └──── submit, valid ───────┴──▶ push(List { email })
//! ```
//!
//! Only `submit` sets or clears the error message. Editing a field leaves a
//! previous error on screen until the next submit attempt.

use crate::core::route::Route;
use crate::core::validation::is_email_valid;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email.";
pub const EMPTY_PASSWORD_MESSAGE: &str = "Password cannot be empty.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub password_visible: bool,
    /// Empty when there is no error.
    pub error_message: String,
}

/// Which state the form is in, derived from `error_message`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStatus<'a> {
    Editing,
    ShowingError(&'a str),
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form with the email field already filled in.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn edit_email(&mut self, text: impl Into<String>) {
        self.email = text.into();
    }

    pub fn edit_password(&mut self, text: impl Into<String>) {
        self.password = text.into();
    }

    pub fn toggle_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    pub fn status(&self) -> LoginStatus<'_> {
        if self.error_message.is_empty() {
            LoginStatus::Editing
        } else {
            LoginStatus::ShowingError(&self.error_message)
        }
    }

    /// Validate the form. Returns the route to push on success; on failure
    /// the error message is set and no route is returned.
    pub fn submit(&mut self) -> Option<Route> {
        self.error_message.clear();

        if is_blank(&self.email) || !is_email_valid(&self.email) {
            self.error_message = INVALID_EMAIL_MESSAGE.to_string();
            None
        } else if is_blank(&self.password) {
            self.error_message = EMPTY_PASSWORD_MESSAGE.to_string();
            None
        } else {
            Some(Route::List {
                email: Some(self.email.clone()),
            })
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
