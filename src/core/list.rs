//! List screen data: the fixed entries and the inert transport controls.

use crate::core::route::Route;

/// Entries shown on the List screen, in display order.
pub const LIST_ITEMS: [&str; 5] = ["Settings", "Profile", "Debug", "Study", "Chat"];

/// Greeting shown above the list. A missing email renders as empty.
pub fn greeting(email: Option<&str>) -> String {
    format!("Hello {}!", email.unwrap_or_default())
}

/// Route pushed when a list entry is selected.
pub fn open_item(label: &str) -> Route {
    Route::Detail {
        item_name: label.to_string(),
    }
}

/// Notice posted when a list entry is selected.
pub fn open_item_notice(label: &str) -> String {
    format!("Opening {label}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportControl {
    Prev,
    PlayPause,
    Next,
}

impl TransportControl {
    pub const ALL: [TransportControl; 3] = [
        TransportControl::Prev,
        TransportControl::PlayPause,
        TransportControl::Next,
    ];
}

/// Playback placeholder. No media engine sits behind it; only the flag moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Transport {
    pub is_playing: bool,
}

impl Transport {
    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn play_pause_label(&self) -> &'static str {
        if self.is_playing { "Pause" } else { "Play" }
    }

    pub fn label(&self, control: TransportControl) -> &'static str {
        match control {
            TransportControl::Prev => "Prev",
            TransportControl::PlayPause => self.play_pause_label(),
            TransportControl::Next => "Next",
        }
    }

    /// Apply a button press and return the notice text for it.
    pub fn press(&mut self, control: TransportControl) -> String {
        match control {
            TransportControl::Prev => "Previous track".to_string(),
            TransportControl::PlayPause => {
                self.toggle();
                let notice = if self.is_playing { "Playing" } else { "Paused" };
                notice.to_string()
            }
            TransportControl::Next => "Next track".to_string(),
        }
    }
}
