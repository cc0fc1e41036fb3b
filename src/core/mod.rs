//! # Core Application Logic
//!
//! This module contains Waypoint's routing and screen logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route (destinations) │
//!                    │  • NavigationStack      │
//!                    │  • Action / update()    │
//!                    │  • Screen models        │
//!                    │                         │
//!                    │  No terminal, no UI.    │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: The `Route` enum. One variant per screen, typed parameters
//! - [`navigation`]: The back-stack and its change notifications
//! - [`state`]: The `App` struct. All cross-screen state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`login`], [`list`], [`detail`]: Per-screen models
//! - [`validation`]: Email check used by the login form
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod detail;
pub mod list;
pub mod login;
pub mod navigation;
pub mod route;
pub mod state;
pub mod validation;
