//! # TUI Adapter
//!
//! The ratatui-specific layer and the navigation host. Handles terminal I/O,
//! renders the active screen, and translates keyboard events into
//! core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Navigation Host
//!
//! `TuiState` subscribes to the navigation stack when it is created. After
//! each batch of actions it drains that subscription; any change remounts
//! the screen from the new top route. Screens never mount each other.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Notice visible**: polls every ~100ms so the notice clears on time.
//! - **Idle**: sleeps up to 500ms, only redraws on events, navigation
//!   changes, or terminal resize.

mod component;
pub mod components;
pub mod event;
pub mod screens;
mod ui;

pub use component::{Component, EventHandler};

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::NavChange;
use crate::core::state::App;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::screens::ActiveScreen;

const NOTICE_POLL: Duration = Duration::from_millis(100);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core logic)
pub struct TuiState {
    /// Screen for the current top of the navigation stack
    pub screen: ActiveScreen,
    nav_changes: Receiver<NavChange>,
}

impl TuiState {
    /// Subscribe to `app`'s navigation stack and mount its current route.
    pub fn new(app: &mut App) -> Self {
        let nav_changes = app.navigation.subscribe();
        Self {
            screen: ActiveScreen::mount(app.current_route(), app),
            nav_changes,
        }
    }

    /// Turn one terminal event into actions and apply them.
    pub fn handle_event(&mut self, app: &mut App, event: &TuiEvent) -> Effect {
        let actions = match event {
            TuiEvent::ForceQuit => vec![Action::Quit],
            TuiEvent::Resize => Vec::new(),
            // Screen gets first refusal; unclaimed Esc is Back
            TuiEvent::Escape => self
                .screen
                .handle_event(event)
                .unwrap_or_else(|| vec![Action::Back]),
            _ => self.screen.handle_event(event).unwrap_or_default(),
        };

        let mut effect = Effect::None;
        for action in actions {
            debug!("Dispatching {:?}", action);
            if update(app, action) == Effect::Quit {
                effect = Effect::Quit;
            }
        }
        effect
    }

    /// Drain navigation changes; remount if any arrived. Returns true on remount.
    pub fn sync(&mut self, app: &App) -> bool {
        let changes: Vec<NavChange> = self.nav_changes.try_iter().collect();
        if changes.is_empty() {
            return false;
        }
        debug!("Remounting after {} navigation change(s)", changes.len());
        self.screen = ActiveScreen::mount(app.current_route(), app);
        true
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for form editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset on redraw
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&mut app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if app.notice.is_some() {
            NOTICE_POLL
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if tui.handle_event(&mut app, &event) == Effect::Quit {
                should_quit = true;
                break;
            }
            // Remount before the next queued event so it reaches the new screen
            if tui.sync(&app) {
                needs_redraw = true;
            }
        }

        if should_quit {
            break;
        }

        if app.expire_notice(Instant::now()) {
            needs_redraw = true;
        }
    }

    ratatui::restore();
    Ok(())
}
