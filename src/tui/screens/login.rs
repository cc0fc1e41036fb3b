//! # Login Screen
//!
//! Email/password form. Owns a [`LoginForm`] for as long as it is mounted.
//!
//! Focus order (Tab / Down forward, Shift+Tab / Up back):
//!
//! ```text
//! Email → Password → Show/Hide → Forgot password? → Log In → Google → GitHub
//! ```
//!
//! Enter in Email jumps to Password; Enter in Password submits. Ctrl+R
//! toggles password visibility from anywhere on the screen. The forgot
//! password link and the social buttons are placeholders with no action.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::core::login::LoginForm;
use crate::core::route::Route;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Button, ButtonStyle, FieldEvent, InputKind, TextField};
use crate::tui::event::TuiEvent;

const FORM_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    Visibility,
    ForgotPassword,
    LogIn,
    Google,
    GitHub,
}

impl LoginFocus {
    const ORDER: [LoginFocus; 7] = [
        LoginFocus::Email,
        LoginFocus::Password,
        LoginFocus::Visibility,
        LoginFocus::ForgotPassword,
        LoginFocus::LogIn,
        LoginFocus::Google,
        LoginFocus::GitHub,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Events emitted by the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    /// Form validated; push this route.
    Navigate(Route),
}

pub struct LoginScreen {
    pub form: LoginForm,
    pub focus: LoginFocus,
    email: TextField,
    password: TextField,
}

impl LoginScreen {
    pub fn new(prefill_email: Option<&str>) -> Self {
        let form = prefill_email.map(LoginForm::with_email).unwrap_or_default();
        Self {
            email: TextField::with_text("Email", InputKind::Email, &form.email),
            password: TextField::new("Password", InputKind::Password),
            form,
            focus: LoginFocus::Email,
        }
    }

    fn submit(&mut self) -> Option<LoginEvent> {
        let route = self.form.submit();
        if route.is_none() {
            debug!("Login rejected: {}", self.form.error_message);
        }
        route.map(LoginEvent::Navigate)
    }

    fn activate(&mut self) -> Option<LoginEvent> {
        match self.focus {
            LoginFocus::Visibility => {
                self.form.toggle_visibility();
                None
            }
            LoginFocus::LogIn => self.submit(),
            LoginFocus::ForgotPassword | LoginFocus::Google | LoginFocus::GitHub => {
                debug!("{:?} pressed (no action)", self.focus);
                None
            }
            LoginFocus::Email | LoginFocus::Password => None,
        }
    }

    /// Push form state down into the field props before drawing.
    fn sync_props(&mut self) {
        self.email.focused = self.focus == LoginFocus::Email;
        self.password.focused = self.focus == LoginFocus::Password;
        self.password.revealed = self.form.password_visible;
    }
}

impl Component for LoginScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::Length;

        self.sync_props();

        let [column] = Layout::horizontal([Length(FORM_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(area);

        let [
            heading_area,
            _,
            email_area,
            password_area,
            error_area,
            forgot_area,
            _,
            login_area,
            _,
            alt_label_area,
            alt_buttons_area,
        ] = Layout::vertical([
            Length(1),
            Length(1),
            Length(3),
            Length(3),
            Length(1),
            Length(1),
            Length(1),
            Length(1),
            Length(1),
            Length(1),
            Length(1),
        ])
        .flex(Flex::Center)
        .areas(column);

        frame.render_widget(
            Paragraph::new(Line::from("LOGIN FORM").centered())
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            heading_area,
        );

        self.email.render(frame, email_area);

        let toggle_label = if self.form.password_visible { "Hide" } else { "Show" };
        let [field_area, toggle_area] =
            Layout::horizontal([Constraint::Min(10), Length(Button::width(toggle_label))])
                .areas(password_area);
        self.password.render(frame, field_area);
        let toggle_row = Rect {
            y: toggle_area.y + 1,
            height: 1,
            ..toggle_area
        };
        Button::new(
            toggle_label,
            ButtonStyle::Text,
            self.focus == LoginFocus::Visibility,
        )
        .render(frame, toggle_row.intersection(toggle_area));

        if !self.form.error_message.is_empty() {
            frame.render_widget(
                Paragraph::new(self.form.error_message.as_str())
                    .style(Style::default().fg(Color::Red))
                    .alignment(Alignment::Center),
                error_area,
            );
        }

        Button::new(
            "Forgot password?",
            ButtonStyle::Text,
            self.focus == LoginFocus::ForgotPassword,
        )
        .render(frame, forgot_area);

        Button::new("Log In", ButtonStyle::Primary, self.focus == LoginFocus::LogIn)
            .render(frame, login_area);

        frame.render_widget(
            Paragraph::new("Or log in with")
                .style(Style::default().fg(Color::White))
                .alignment(Alignment::Center),
            alt_label_area,
        );

        let [google_area, github_area] =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .areas(alt_buttons_area);
        Button::new("Google", ButtonStyle::Text, self.focus == LoginFocus::Google)
            .render(frame, google_area);
        Button::new("GitHub", ButtonStyle::Text, self.focus == LoginFocus::GitHub)
            .render(frame, github_area);
    }
}

impl EventHandler for LoginScreen {
    type Event = LoginEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::FocusNext | TuiEvent::CursorDown => {
                self.focus = self.focus.next();
                None
            }
            TuiEvent::FocusPrev | TuiEvent::CursorUp => {
                self.focus = self.focus.prev();
                None
            }
            TuiEvent::ToggleVisibility => {
                self.form.toggle_visibility();
                None
            }
            _ => match self.focus {
                LoginFocus::Email => match self.email.handle_event(event)? {
                    FieldEvent::Changed(text) => {
                        self.form.edit_email(text);
                        None
                    }
                    FieldEvent::Submit => {
                        self.focus = LoginFocus::Password;
                        None
                    }
                },
                LoginFocus::Password => match self.password.handle_event(event)? {
                    FieldEvent::Changed(text) => {
                        self.form.edit_password(text);
                        None
                    }
                    FieldEvent::Submit => self.submit(),
                },
                _ => match event {
                    TuiEvent::Submit | TuiEvent::InputChar(' ') => self.activate(),
                    _ => None,
                },
            },
        }
    }
}
