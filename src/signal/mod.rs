//! A single timed signal.
//!
//! A signal knows its timing, the phase it currently shows and how long it
//! has been showing it. Time only moves when `advance` is called.

mod timing;

pub use timing::SignalTiming;

use crate::core::{ChangeCause, Phase, PhaseChange, PhaseHistory, SignalId};
use crate::report::SignalStatus;
use tracing::debug;

/// A signal cycling RED → GREEN → YELLOW → RED with fixed durations.
///
/// Invariant: `elapsed_in_phase() < timing().duration(phase())` after every
/// operation.
///
/// # Example
///
/// ```rust
/// use signalgrid::core::{Phase, SignalId};
/// use signalgrid::signal::{Signal, SignalTiming};
///
/// let mut signal = Signal::new(SignalId(1), SignalTiming::new(20, 5, 25).unwrap());
/// signal.advance(20);
/// assert_eq!(signal.phase(), Phase::Green);
/// assert_eq!(signal.elapsed_in_phase(), 0);
///
/// signal.advance(30);
/// assert_eq!(signal.phase(), Phase::Red);
/// ```
#[derive(Clone, Debug)]
pub struct Signal {
    id: SignalId,
    timing: SignalTiming,
    phase: Phase,
    elapsed: u64,
    clock: u64,
    history: PhaseHistory,
}

impl Signal {
    /// Create a signal starting at RED with nothing elapsed.
    pub fn new(id: SignalId, timing: SignalTiming) -> Self {
        Self {
            id,
            timing,
            phase: Phase::Red,
            elapsed: 0,
            clock: 0,
            history: PhaseHistory::new(),
        }
    }

    /// Let `seconds` of simulated time pass.
    ///
    /// Any number of phase boundaries may be crossed in one call. Whole
    /// cycles leave phase and offset unchanged, so they are skipped in one
    /// step and not recorded in the history. The clock saturates at
    /// `u64::MAX`.
    pub fn advance(&mut self, seconds: u64) {
        if seconds == 0 {
            return;
        }

        let cycle = self.timing.cycle_length();
        let skipped = seconds - seconds % cycle;
        // elapsed < u32::MAX and seconds % cycle < 3 * u32::MAX, so this fits
        let mut offset = self.elapsed + seconds % cycle;
        let mut phase_started = self.clock.saturating_sub(self.elapsed).saturating_add(skipped);
        self.clock = self.clock.saturating_add(seconds);

        loop {
            let duration = u64::from(self.timing.duration(self.phase));
            if offset < duration {
                break;
            }
            offset -= duration;
            phase_started = phase_started.saturating_add(duration);
            self.enter(self.phase.next(), phase_started, ChangeCause::Elapsed);
        }

        self.elapsed = offset;
    }

    /// Put the signal back to RED with nothing elapsed.
    pub fn reset(&mut self) {
        if self.phase != Phase::Red {
            self.enter(Phase::Red, self.clock, ChangeCause::Synchronized);
        }
        self.elapsed = 0;
    }

    /// Current phase and time left in it.
    pub fn status(&self) -> SignalStatus {
        SignalStatus {
            id: self.id,
            phase: self.phase,
            elapsed: self.elapsed,
            remaining: self.remaining(),
        }
    }

    /// Seconds until the next phase change.
    pub fn remaining(&self) -> u64 {
        u64::from(self.timing.duration(self.phase)) - self.elapsed
    }

    pub fn id(&self) -> SignalId {
        self.id
    }

    pub fn timing(&self) -> &SignalTiming {
        &self.timing
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_in_phase(&self) -> u64 {
        self.elapsed
    }

    /// Total simulated seconds this signal has been advanced.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Most recent phase changes, oldest dropped past the history limit.
    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    fn enter(&mut self, to: Phase, at: u64, cause: ChangeCause) {
        let change = PhaseChange {
            from: self.phase,
            to,
            at,
            cause,
        };
        debug!(signal = %self.id, from = %change.from, to = %change.to, at, ?cause, "phase changed");
        self.history = std::mem::take(&mut self.history).record(change);
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(red: u32, yellow: u32, green: u32) -> Signal {
        Signal::new(SignalId(1), SignalTiming::new(red, yellow, green).unwrap())
    }

    #[test]
    fn new_signal_starts_red() {
        let signal = signal(20, 5, 25);

        assert_eq!(signal.phase(), Phase::Red);
        assert_eq!(signal.elapsed_in_phase(), 0);
        assert_eq!(signal.remaining(), 20);
        assert!(signal.history().is_empty());
    }

    #[test]
    fn advance_within_phase_accumulates() {
        let mut signal = signal(20, 5, 25);
        signal.advance(5);
        signal.advance(5);

        assert_eq!(signal.phase(), Phase::Red);
        assert_eq!(signal.elapsed_in_phase(), 10);
        assert_eq!(signal.remaining(), 10);
    }

    #[test]
    fn advance_changes_phase_exactly_at_boundary() {
        let mut signal = signal(20, 5, 25);
        signal.advance(20);

        assert_eq!(signal.phase(), Phase::Green);
        assert_eq!(signal.elapsed_in_phase(), 0);
    }

    #[test]
    fn advance_crosses_several_phases_in_one_call() {
        let mut signal = signal(20, 5, 25);
        signal.advance(47);

        assert_eq!(signal.phase(), Phase::Yellow);
        assert_eq!(signal.elapsed_in_phase(), 2);
        assert_eq!(
            signal.history().get_path(),
            vec![Phase::Red, Phase::Green, Phase::Yellow]
        );
    }

    #[test]
    fn full_cycle_returns_to_start() {
        let mut signal = signal(20, 5, 25);
        signal.advance(12);
        signal.advance(50);

        assert_eq!(signal.phase(), Phase::Red);
        assert_eq!(signal.elapsed_in_phase(), 12);
    }

    #[test]
    fn whole_cycles_are_skipped_without_history() {
        let mut signal = signal(2, 1, 3);
        signal.advance(6 * 1_000_000 + 4);

        assert_eq!(signal.phase(), Phase::Green);
        assert_eq!(signal.elapsed_in_phase(), 2);
        assert_eq!(signal.clock(), 6_000_004);

        let changes = signal.history().changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].at, 6_000_002);
    }

    #[test]
    fn advance_by_u64_max_after_partial_step() {
        let mut signal = signal(20, 5, 25);
        signal.advance(10);
        signal.advance(u64::MAX);

        // u64::MAX % 50 == 15, so the offset lands 25s into the cycle
        assert_eq!(signal.phase(), Phase::Green);
        assert_eq!(signal.elapsed_in_phase(), 5);
        assert_eq!(signal.clock(), u64::MAX);

        signal.advance(u64::MAX);
        let duration = u64::from(signal.timing().duration(signal.phase()));
        assert!(signal.elapsed_in_phase() < duration);
        assert_eq!(signal.clock(), u64::MAX);
    }

    #[test]
    fn advance_with_largest_durations_does_not_overflow() {
        let mut signal = signal(u32::MAX, u32::MAX, u32::MAX);
        signal.advance(u64::from(u32::MAX) - 1);
        signal.advance(u64::MAX);

        assert!(signal.elapsed_in_phase() < u64::from(u32::MAX));
    }

    #[test]
    fn history_stays_bounded_over_long_runs() {
        let mut signal = signal(1, 1, 1);
        for _ in 0..10_000 {
            signal.advance(1);
        }

        assert_eq!(signal.history().len(), PhaseHistory::DEFAULT_LIMIT);
        assert_eq!(signal.history().last().unwrap().at, 10_000);
    }

    #[test]
    fn history_records_simulated_time() {
        let mut signal = signal(20, 5, 25);
        for _ in 0..11 {
            signal.advance(5);
        }

        let at: Vec<u64> = signal.history().changes().iter().map(|c| c.at).collect();
        assert_eq!(at, vec![20, 45, 50]);
        assert_eq!(signal.phase(), Phase::Red);
        assert_eq!(signal.elapsed_in_phase(), 5);
    }

    #[test]
    fn advance_zero_is_noop() {
        let mut signal = signal(20, 5, 25);
        signal.advance(0);

        assert_eq!(signal.clock(), 0);
        assert_eq!(signal.phase(), Phase::Red);
    }

    #[test]
    fn reset_returns_to_red_and_records_change() {
        let mut signal = signal(20, 5, 25);
        signal.advance(30);
        signal.reset();

        assert_eq!(signal.phase(), Phase::Red);
        assert_eq!(signal.elapsed_in_phase(), 0);

        let last = signal.history().last().unwrap();
        assert_eq!(last.from, Phase::Green);
        assert_eq!(last.cause, ChangeCause::Synchronized);
        assert_eq!(last.at, 30);
    }

    #[test]
    fn reset_while_red_only_clears_elapsed() {
        let mut signal = signal(20, 5, 25);
        signal.advance(7);
        signal.reset();

        assert_eq!(signal.elapsed_in_phase(), 0);
        assert!(signal.history().is_empty());
    }

    #[test]
    fn advance_after_reset_keeps_clock_consistent() {
        let mut signal = signal(20, 5, 25);
        signal.advance(30);
        signal.reset();
        signal.advance(20);

        assert_eq!(signal.phase(), Phase::Green);
        assert_eq!(signal.history().last().unwrap().at, 50);
    }

    #[test]
    fn status_reports_phase_and_remaining() {
        let mut signal = signal(20, 5, 25);
        signal.advance(22);

        let status = signal.status();
        assert_eq!(status.id, SignalId(1));
        assert_eq!(status.phase, Phase::Green);
        assert_eq!(status.elapsed, 2);
        assert_eq!(status.remaining, 23);
    }
}
