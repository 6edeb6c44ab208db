//! One-shot delayed tasks for the orientation-change settle delay.
//!
//! Hosts often report an orientation change before the viewport has finished
//! resizing, so the recompute is deferred by a fixed delay. There is no clock
//! in here: the host passes "now" as a [`Duration`] since any fixed epoch, and
//! polls [`Debouncer::take_due`] from its own timer or frame loop.

use alloc::vec::Vec;
use core::time::Duration;

use log::trace;

/// Delay between an orientation-change event and its recompute.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// What happens when a new event arrives while one is pending.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SettlePolicy {
    /// Every event fires its own recompute; rapid flips recompute repeatedly.
    Overlap,
    /// A new event cancels the pending one. Last trigger wins.
    #[default]
    Coalesce,
}

/// Settle delay and policy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettleConfig {
    pub delay: Duration,
    pub policy: SettlePolicy,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SETTLE_DELAY,
            policy: SettlePolicy::default(),
        }
    }
}

/// Handle to a scheduled task, valid until it fires or is cancelled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

#[derive(Copy, Clone, Debug)]
struct Pending {
    handle: TaskHandle,
    due: Duration,
}

/// Schedules one-shot delayed tasks.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    config: SettleConfig,
    pending: Vec<Pending>,
    next_id: u64,
}

impl Debouncer {
    /// Create a debouncer with the given delay and policy.
    pub fn new(config: SettleConfig) -> Self {
        Self {
            config,
            pending: Vec::new(),
            next_id: 0,
        }
    }

    /// Delay and policy in use.
    pub fn config(&self) -> SettleConfig {
        self.config
    }

    /// Schedule a task due at `now + delay`.
    ///
    /// Under [`SettlePolicy::Coalesce`] this cancels whatever was pending.
    pub fn schedule(&mut self, now: Duration) -> TaskHandle {
        if self.config.policy == SettlePolicy::Coalesce && !self.pending.is_empty() {
            trace!("coalescing {} pending settle task(s)", self.pending.len());
            self.pending.clear();
        }
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        let due = now.saturating_add(self.config.delay);
        self.pending.push(Pending { handle, due });
        trace!("scheduled settle task {handle:?} due at {due:?}");
        handle
    }

    /// Cancel a task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Cancel everything pending.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    /// Whether a task is still pending.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|p| p.handle == handle)
    }

    /// Number of pending tasks.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Earliest due time, if anything is pending.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    /// Remove and count the tasks due at or before `now`.
    pub fn take_due(&mut self, now: Duration) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.due > now);
        before - self.pending.len()
    }
}
