use ratatui::Terminal;
use ratatui::backend::TestBackend;

use waypoint::core::action::{Action, Effect, update};
use waypoint::core::login::{EMPTY_PASSWORD_MESSAGE, INVALID_EMAIL_MESSAGE};
use waypoint::core::navigation::NavChange;
use waypoint::core::route::Route;
use waypoint::core::state::App;
use waypoint::tui::event::TuiEvent;
use waypoint::tui::screens::ActiveScreen;
use waypoint::tui::{Component, TuiState};

// ============================================================================
// Helper Functions
// ============================================================================

/// Feeds one event through the host and remounts on navigation, like the event loop.
fn send(tui: &mut TuiState, app: &mut App, event: TuiEvent) -> Effect {
    let effect = tui.handle_event(app, &event);
    tui.sync(app);
    effect
}

fn type_str(tui: &mut TuiState, app: &mut App, text: &str) {
    for c in text.chars() {
        send(tui, app, TuiEvent::InputChar(c));
    }
}

/// Renders the mounted screen alone and returns the buffer text.
fn render_screen(tui: &mut TuiState) -> String {
    let backend = TestBackend::new(80, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            tui.screen.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

fn login_error(tui: &TuiState) -> String {
    match &tui.screen {
        ActiveScreen::Login(screen) => screen.form.error_message.clone(),
        _ => panic!("Expected Login screen"),
    }
}

/// Log in as `email` with `password` via the keyboard, starting on a fresh Login screen.
fn log_in(tui: &mut TuiState, app: &mut App, email: &str, password: &str) {
    type_str(tui, app, email);
    send(tui, app, TuiEvent::Submit); // email → password
    type_str(tui, app, password);
    send(tui, app, TuiEvent::Submit);
}

// ============================================================================
// Login
// ============================================================================

#[test]
fn test_empty_submit_shows_email_error() {
    let mut app = App::new();
    let mut tui = TuiState::new(&mut app);

    log_in(&mut tui, &mut app, "", "");

    assert_eq!(login_error(&tui), INVALID_EMAIL_MESSAGE);
    assert_eq!(app.navigation.depth(), 1);
    assert!(render_screen(&mut tui).contains(INVALID_EMAIL_MESSAGE));
}

#[test]
fn test_missing_password_shows_password_error() {
    let mut app = App::new();
    let mut tui = TuiState::new(&mut app);

    log_in(&mut tui, &mut app, "user@example.com", "");

    assert_eq!(login_error(&tui), EMPTY_PASSWORD_MESSAGE);
    assert_eq!(app.current_route(), &Route::Login);
}

#[test]
fn test_valid_login_pushes_list_with_email() {
    let mut app = App::new();
    let mut tui = TuiState::new(&mut app);
    let observer = app.navigation.subscribe();

    log_in(&mut tui, &mut app, "user@example.com", "x");

    let routes: Vec<&Route> = app.navigation.routes().collect();
    let expected = Route::List {
        email: Some("user@example.com".to_string()),
    };
    assert_eq!(routes, vec![&Route::Login, &expected]);
    assert_eq!(observer.try_recv(), Ok(NavChange::Pushed(expected)));
    assert!(render_screen(&mut tui).contains("Hello user@example.com!"));
}

// ============================================================================
// List → Detail → Back
// ============================================================================

#[test]
fn test_open_debug_renders_detail() {
    let mut app = App::new();
    let mut tui = TuiState::new(&mut app);
    log_in(&mut tui, &mut app, "user@example.com", "x");

    send(&mut tui, &mut app, TuiEvent::CursorDown);
    send(&mut tui, &mut app, TuiEvent::CursorDown);
    send(&mut tui, &mut app, TuiEvent::Submit);

    assert_eq!(
        app.current_route(),
        &Route::Detail {
            item_name: "Debug".to_string()
        }
    );
    assert_eq!(
        app.notice.as_ref().map(|n| n.text.as_str()),
        Some("Opening Debug")
    );

    let text = render_screen(&mut tui);
    assert!(text.contains("Debug"));
    assert!(text.contains("This is the detail screen for Debug."));
}

#[test]
fn test_back_walks_down_to_root_and_stops() {
    let mut app = App::new();
    let mut tui = TuiState::new(&mut app);
    log_in(&mut tui, &mut app, "user@example.com", "x");
    send(&mut tui, &mut app, TuiEvent::Submit); // open Settings
    assert_eq!(app.navigation.depth(), 3);

    send(&mut tui, &mut app, TuiEvent::Backspace);
    assert!(matches!(tui.screen, ActiveScreen::List(_)));

    send(&mut tui, &mut app, TuiEvent::Escape);
    assert!(matches!(tui.screen, ActiveScreen::Login(_)));

    send(&mut tui, &mut app, TuiEvent::Escape);
    assert_eq!(app.navigation.depth(), 1);
    assert_eq!(app.current_route(), &Route::Login);
}

#[test]
fn test_play_pause_twice_restores_label() {
    let mut app = App::new();
    let mut tui = TuiState::new(&mut app);
    log_in(&mut tui, &mut app, "user@example.com", "x");

    let mut labels = Vec::new();
    for _ in 0..3 {
        match &tui.screen {
            ActiveScreen::List(screen) => labels.push(screen.transport.play_pause_label()),
            _ => panic!("Expected List screen"),
        }
        send(&mut tui, &mut app, TuiEvent::InputChar(' '));
    }

    assert_eq!(labels, vec!["Play", "Pause", "Play"]);
}

// ============================================================================
// Reducer
// ============================================================================

#[test]
fn test_reducer_pop_on_single_element_stack() {
    let mut app = App::new();
    assert_eq!(update(&mut app, Action::Back), Effect::None);
    assert_eq!(app.navigation.depth(), 1);
}

#[test]
fn test_quit_from_any_screen() {
    let mut app = App::new();
    let mut tui = TuiState::new(&mut app);
    log_in(&mut tui, &mut app, "user@example.com", "x");
    assert_eq!(send(&mut tui, &mut app, TuiEvent::ForceQuit), Effect::Quit);
}
