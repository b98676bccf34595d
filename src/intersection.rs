//! Intersections coordinate the signals they own.

use crate::core::{IntersectionId, SignalId};
use crate::error::TrafficError;
use crate::report::IntersectionStatus;
use crate::signal::{Signal, SignalTiming};
use tracing::{debug, info};

/// A set of signals that advance together and can be switched off as a unit.
///
/// Signals keep their insertion order. A new intersection is active.
#[derive(Clone, Debug)]
pub struct Intersection {
    id: IntersectionId,
    signals: Vec<Signal>,
    active: bool,
    next_signal: SignalId,
}

impl Intersection {
    pub(crate) fn new(id: IntersectionId) -> Self {
        Self {
            id,
            signals: Vec::new(),
            active: true,
            next_signal: SignalId::FIRST,
        }
    }

    /// Add a signal with the given durations and return its id.
    ///
    /// Allowed while inactive. Fails with `InvalidConfig` without consuming
    /// an id if any duration is zero.
    pub fn add_signal(
        &mut self,
        red: u32,
        yellow: u32,
        green: u32,
    ) -> Result<SignalId, TrafficError> {
        let timing = SignalTiming::new(red, yellow, green)?;
        let id = self.next_signal;
        self.next_signal = id.next();
        self.signals.push(Signal::new(id, timing));
        debug!(intersection = %self.id, signal = %id, red, yellow, green, "signal added");
        Ok(id)
    }

    /// Advance every signal by `seconds` if active; frozen otherwise.
    pub fn update(&mut self, seconds: u64) {
        if !self.active {
            return;
        }
        for signal in &mut self.signals {
            signal.advance(seconds);
        }
    }

    /// Switch the intersection on or off. Signal state is left untouched.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            info!(intersection = %self.id, active, "intersection status changed");
        }
        self.active = active;
    }

    /// Reset every signal to RED with nothing elapsed.
    pub fn synchronize(&mut self) {
        for signal in &mut self.signals {
            signal.reset();
        }
        info!(intersection = %self.id, signals = self.signals.len(), "intersection synchronized");
    }

    pub fn status(&self) -> IntersectionStatus {
        IntersectionStatus {
            id: self.id,
            active: self.active,
            signals: self.signals.iter().map(Signal::status).collect(),
        }
    }

    pub fn id(&self) -> IntersectionId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn signal(&self, id: SignalId) -> Option<&Signal> {
        self.signals.iter().find(|signal| signal.id() == id)
    }
}
