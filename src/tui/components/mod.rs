//! # TUI Components
//!
//! Reusable building blocks shared by the screens.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Breadcrumb of the back-stack plus the current notice
//! - `Button`: Focusable label; the owning screen decides what it does
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `TextField`: Single-line entry with an email or password input kind
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields set by the
//! parent), not by reaching into `App`. This keeps dependencies explicit
//! and makes each component testable with a `TestBackend` alone.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! TitleBar::new(breadcrumb, notice).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! TitleBar::from_app(&app).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs         (this file)
//! ├── title_bar.rs   (Top status bar)
//! ├── button.rs      (Focusable button)
//! └── text_field.rs  (Single-line text entry)
//! ```

pub mod button;
pub mod text_field;
mod title_bar;

pub use button::{ACCENT, Button, ButtonStyle};
pub use text_field::{FieldEvent, InputKind, TextField};
pub use title_bar::TitleBar;
