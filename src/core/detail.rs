//! Detail screen text.

/// Sentence shown under the item name.
pub fn description(item_name: &str) -> String {
    format!("This is the detail screen for {item_name}.")
}
