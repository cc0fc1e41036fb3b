//! # Navigation Stack
//!
//! The back-stack of visited routes. The top entry is the screen on display.
//!
//! ```text
//! NavigationStack
//! ├── root: Route                        // start destination, never removed
//! ├── above: Vec<Route>                  // pushed routes, last = top
//! └── subscribers: Vec<Sender<NavChange>>
//! ```
//!
//! Keeping the root outside the vector makes `current()` total: the stack
//! cannot be empty, so there is no failure path to handle.
//!
//! ## Change Notification
//!
//! Renderers call [`NavigationStack::subscribe`] and drain the receiver
//! between frames. Each successful push or pop sends one [`NavChange`].
//! A pop at the root changes nothing and sends nothing.

use log::{debug, info};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::core::route::Route;

/// A change that was applied to the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavChange {
    Pushed(Route),
    Popped(Route),
}

pub struct NavigationStack {
    root: Route,
    above: Vec<Route>,
    subscribers: Vec<Sender<NavChange>>,
}

impl NavigationStack {
    pub fn new(root: Route) -> Self {
        Self {
            root,
            above: Vec::new(),
            subscribers: Vec::new(),
        }
    }

    /// The route on top of the stack.
    pub fn current(&self) -> &Route {
        self.above.last().unwrap_or(&self.root)
    }

    /// Number of entries, root included. Always at least 1.
    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    /// Iterate from root to top.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        std::iter::once(&self.root).chain(self.above.iter())
    }

    pub fn can_pop(&self) -> bool {
        !self.above.is_empty()
    }

    pub fn push(&mut self, route: Route) {
        info!("Navigation push: {} (depth {})", route, self.depth() + 1);
        self.above.push(route.clone());
        self.notify(NavChange::Pushed(route));
    }

    /// Remove the top route. Returns `None` at the root, leaving the stack as it was.
    pub fn pop(&mut self) -> Option<Route> {
        let Some(route) = self.above.pop() else {
            debug!("Navigation pop ignored: already at root ({})", self.root);
            return None;
        };
        info!("Navigation pop: {} (depth {})", route, self.depth());
        self.notify(NavChange::Popped(route.clone()));
        Some(route)
    }

    /// Register for change notifications.
    pub fn subscribe(&mut self) -> Receiver<NavChange> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self, change: NavChange) {
        // Dropped receivers fail to send; prune them
        self.subscribers.retain(|tx| tx.send(change.clone()).is_ok());
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}
