//! Observable connection state.
//!
//! One state for the whole session, re-evaluated on every remote call:
//! `Connecting` while a call is in flight, `Connected` after any response
//! is received, `Error` after a transport failure. A decoding failure is
//! not a connectivity failure and leaves the state at `Connected`.

use std::sync::Arc;

use tokio::sync::watch;

/// Connectivity to the remote authority, as last observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// A call is in flight (also the initial state of a session).
    Connecting,
    /// The last call received a response.
    Connected,
    /// The last call failed at the transport layer.
    Error,
}

/// Shared handle publishing [`ConnectionState`] changes.
///
/// Cloning shares the underlying channel: reconfigured clients keep
/// reporting into the same session-wide state. Display surfaces subscribe
/// and re-render on change; state is replaced atomically, never mutated in
/// place.
#[derive(Debug, Clone)]
pub struct ConnectionMonitor {
    tx: Arc<watch::Sender<ConnectionState>>,
}

impl ConnectionMonitor {
    /// New monitor starting in [`ConnectionState::Connecting`].
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ConnectionState::Connecting);
        Self { tx: Arc::new(tx) }
    }

    /// Current state.
    #[must_use]
    pub fn current(&self) -> ConnectionState {
        *self.tx.borrow()
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.tx.subscribe()
    }

    /// Publish a new state.
    pub(crate) fn set(&self, state: ConnectionState) {
        self.tx.send_replace(state);
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_connecting() {
        let monitor = ConnectionMonitor::new();
        assert_eq!(monitor.current(), ConnectionState::Connecting);
    }

    #[test]
    fn clones_share_state() {
        let monitor = ConnectionMonitor::new();
        let other = monitor.clone();

        monitor.set(ConnectionState::Error);
        assert_eq!(other.current(), ConnectionState::Error);

        other.set(ConnectionState::Connected);
        assert_eq!(monitor.current(), ConnectionState::Connected);
    }

    #[test]
    fn subscribers_observe_changes() {
        let monitor = ConnectionMonitor::new();
        let mut rx = monitor.subscribe();

        monitor.set(ConnectionState::Connected);
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(*rx.borrow_and_update(), ConnectionState::Connected);
    }
}
