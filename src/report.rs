//! Read-only status snapshots.
//!
//! The display operations return these values instead of printing. The
//! `Display` impls give a plain-text rendering for callers that just want
//! something human readable; callers that want another format serialize or
//! walk the structs themselves.

use crate::core::{IntersectionId, Phase, SignalId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of one signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SignalStatus {
    pub id: SignalId,
    pub phase: Phase,
    /// Seconds spent in the current phase
    pub elapsed: u64,
    /// Seconds left before the next phase change
    pub remaining: u64,
}

/// Snapshot of one intersection and its signals in insertion order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IntersectionStatus {
    pub id: IntersectionId,
    pub active: bool,
    pub signals: Vec<SignalStatus>,
}

/// Snapshot of the whole system, intersections in creation order.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct SystemStatus {
    pub intersections: Vec<IntersectionStatus>,
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Signal {}: {} ({}s remaining)",
            self.id, self.phase, self.remaining
        )
    }
}

impl fmt::Display for IntersectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.active { "active" } else { "inactive" };
        write!(f, "Intersection {} [{}]", self.id, state)?;
        if self.signals.is_empty() {
            return write!(f, "\n  (no signals)");
        }
        for signal in &self.signals {
            write!(f, "\n  {signal}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Traffic system: {} intersection(s)",
            self.intersections.len()
        )?;
        for intersection in &self.intersections {
            write!(f, "\n{intersection}")?;
        }
        Ok(())
    }
}
