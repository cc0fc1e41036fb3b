use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Widgets like `Button` and `TitleBar` are pure props. Screens and
/// `TextField` also carry local state (focus, cursor, list selection)
/// that lives only as long as they stay mounted.
///
/// `render` takes `&mut self` so a screen can push its state into
/// child props, or update a `ListState`, on the way out.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns a [`TuiEvent`] into something the owner understands.
pub trait EventHandler {
    /// What this handler emits: `FieldEvent`, `LoginEvent`, and so on.
    type Event;

    /// `None` means the event was consumed locally (or ignored).
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
