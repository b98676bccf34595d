//! Validated phase durations for a signal.

use crate::core::Phase;
use crate::error::{ConfigViolation, TrafficError};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Red, yellow and green durations in simulated seconds.
///
/// A `SignalTiming` can only be obtained through validation, so every value
/// in circulation has three positive durations. Deserialization goes
/// through the same validation.
///
/// # Example
///
/// ```rust
/// use signalgrid::core::Phase;
/// use signalgrid::signal::SignalTiming;
///
/// let timing = SignalTiming::new(20, 5, 25).unwrap();
/// assert_eq!(timing.duration(Phase::Green), 25);
/// assert_eq!(timing.cycle_length(), 50);
///
/// assert!(SignalTiming::new(0, 5, 25).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTiming")]
pub struct SignalTiming {
    red: u32,
    yellow: u32,
    green: u32,
}

/// Unvalidated wire shape of `SignalTiming`.
#[derive(Deserialize)]
struct RawTiming {
    red: u32,
    yellow: u32,
    green: u32,
}

impl TryFrom<RawTiming> for SignalTiming {
    type Error = TrafficError;

    fn try_from(raw: RawTiming) -> Result<Self, Self::Error> {
        SignalTiming::new(raw.red, raw.yellow, raw.green)
    }
}

impl SignalTiming {
    /// Validate the durations, failing with `InvalidConfig` listing every
    /// offending phase.
    pub fn new(red: u32, yellow: u32, green: u32) -> Result<Self, TrafficError> {
        match Self::validate(red, yellow, green) {
            Validation::Success(timing) => Ok(timing),
            Validation::Failure(violations) => Err(TrafficError::InvalidConfig(
                violations.iter().copied().collect(),
            )),
        }
    }

    /// Check all three durations, accumulating ALL violations.
    pub fn validate(
        red: u32,
        yellow: u32,
        green: u32,
    ) -> Validation<SignalTiming, NonEmptyVec<ConfigViolation>> {
        let candidate = SignalTiming { red, yellow, green };

        let checks = Phase::CYCLE
            .iter()
            .map(|&phase| require_positive(phase, candidate.duration(phase)))
            .collect::<Vec<_>>();

        Validation::all_vec(checks).map(move |_| candidate)
    }

    /// Duration of the given phase in seconds.
    pub fn duration(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Red => self.red,
            Phase::Yellow => self.yellow,
            Phase::Green => self.green,
        }
    }

    /// Seconds needed to go through every phase once.
    pub fn cycle_length(&self) -> u64 {
        u64::from(self.red) + u64::from(self.yellow) + u64::from(self.green)
    }

    pub fn red(&self) -> u32 {
        self.red
    }

    pub fn yellow(&self) -> u32 {
        self.yellow
    }

    pub fn green(&self) -> u32 {
        self.green
    }
}

fn require_positive(phase: Phase, seconds: u32) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if seconds > 0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NonPositiveDuration { phase })
    }
}
