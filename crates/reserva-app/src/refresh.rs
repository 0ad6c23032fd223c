//! Post-mutation refresh channel.
//!
//! Dependent read views must not poll the coordinator and must not learn
//! about mutations through cache edits - the coordinator never touches
//! cached occupancy. Instead it bumps a monotonically increasing counter
//! after the remote confirms a mutation; views subscribe and refetch on
//! change, using their current (post-mutation) selection.

use tokio::sync::watch;

/// Sender half: owned by the coordinator.
#[derive(Debug)]
pub struct RefreshSignal {
    tx: watch::Sender<u64>,
}

impl RefreshSignal {
    /// New signal starting at zero.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx }
    }

    /// Number of confirmed mutations so far.
    #[must_use]
    pub fn count(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Subscribe; the listener wakes on every bump.
    #[must_use]
    pub fn subscribe(&self) -> RefreshListener {
        RefreshListener { rx: self.tx.subscribe() }
    }

    /// Increment the counter by exactly one and wake subscribers.
    pub(crate) fn bump(&self) -> u64 {
        let next = self.count() + 1;
        self.tx.send_replace(next);
        next
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver half: held by each dependent read view.
#[derive(Debug, Clone)]
pub struct RefreshListener {
    rx: watch::Receiver<u64>,
}

impl RefreshListener {
    /// Wait for the next bump. `None` once the coordinator is gone.
    pub async fn changed(&mut self) -> Option<u64> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// True if a bump happened since the last observation.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Latest counter value, marking it observed.
    pub fn latest(&mut self) -> u64 {
        *self.rx.borrow_and_update()
    }
}
