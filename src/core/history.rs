//! Phase change history tracking.
//!
//! Provides an ordered record of the phase changes a signal went through,
//! stamped with simulated time rather than wall-clock time.

use super::phase::Phase;
use serde::{Deserialize, Serialize};

/// Why a phase change happened.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ChangeCause {
    /// The phase's duration ran out while time was advancing.
    Elapsed,
    /// The signal was reset by an intersection synchronize.
    Synchronized,
}

/// Record of a single phase change.
///
/// # Example
///
/// ```rust
/// use signalgrid::core::{ChangeCause, Phase, PhaseChange};
///
/// let change = PhaseChange {
///     from: Phase::Red,
///     to: Phase::Green,
///     at: 20,
///     cause: ChangeCause::Elapsed,
/// };
/// assert_eq!(change.to, Phase::Green);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PhaseChange {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// Simulated second, on the signal's own clock, at which the change happened
    pub at: u64,
    /// What triggered the change
    pub cause: ChangeCause,
}

/// Ordered history of the most recent phase changes.
///
/// `record` consumes the history and hands back the extended one, so a
/// history value is never observed half-updated. At most `limit` changes are
/// kept; recording past the limit drops the oldest.
///
/// # Example
///
/// ```rust
/// use signalgrid::core::{ChangeCause, Phase, PhaseChange, PhaseHistory};
///
/// let history = PhaseHistory::new()
///     .record(PhaseChange {
///         from: Phase::Red,
///         to: Phase::Green,
///         at: 20,
///         cause: ChangeCause::Elapsed,
///     })
///     .record(PhaseChange {
///         from: Phase::Green,
///         to: Phase::Yellow,
///         at: 45,
///         cause: ChangeCause::Elapsed,
///     });
///
/// assert_eq!(history.get_path(), vec![Phase::Red, Phase::Green, Phase::Yellow]);
/// assert_eq!(history.span(), Some(25));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseHistory {
    changes: Vec<PhaseChange>,
    limit: usize,
}

impl Default for PhaseHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseHistory {
    /// Number of changes kept by `new`.
    pub const DEFAULT_LIMIT: usize = 256;

    /// Create a new empty history keeping `DEFAULT_LIMIT` changes.
    pub fn new() -> Self {
        Self::with_limit(Self::DEFAULT_LIMIT)
    }

    /// Create a new empty history keeping at most `limit` changes (at least one).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            changes: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Record a change, returning the extended history.
    pub fn record(mut self, change: PhaseChange) -> Self {
        let limit = self.limit.max(1);
        if self.changes.len() >= limit {
            let excess = self.changes.len() + 1 - limit;
            self.changes.drain(..excess);
        }
        self.changes.push(change);
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Get the path of phases traversed by the retained changes.
    ///
    /// Returns the `from` phase of the first change, then the `to` phase of
    /// every change. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.changes.len() + 1);
        if let Some(first) = self.changes.first() {
            path.push(first.from);
        }
        path.extend(self.changes.iter().map(|change| change.to));
        path
    }

    /// Simulated seconds between the first and the last recorded change.
    ///
    /// Returns `None` if there are no changes.
    pub fn span(&self) -> Option<u64> {
        match (self.changes.first(), self.changes.last()) {
            (Some(first), Some(last)) => Some(last.at - first.at),
            _ => None,
        }
    }

    /// The most recent change, if any.
    pub fn last(&self) -> Option<&PhaseChange> {
        self.changes.last()
    }

    /// Get all changes in the order they were recorded.
    pub fn changes(&self) -> &[PhaseChange] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
