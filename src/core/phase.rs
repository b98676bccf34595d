//! Signal phases and their fixed cycle order.
//!
//! Every signal cycles through the same three phases. The order is fixed:
//! RED → GREEN → YELLOW → RED.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The light a signal currently shows.
///
/// Phases form a closed cycle. `next` is a pure function and never fails,
/// there is no terminal phase.
///
/// # Example
///
/// ```rust
/// use signalgrid::core::Phase;
///
/// let phase = Phase::Red;
/// assert_eq!(phase.next(), Phase::Green);
/// assert_eq!(phase.next().next(), Phase::Yellow);
/// assert_eq!(phase.next().next().next(), Phase::Red);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Phase {
    #[default]
    Red,
    Green,
    Yellow,
}

impl Phase {
    /// All phases in cycle order, starting from the canonical `Red`.
    pub const CYCLE: [Phase; 3] = [Phase::Red, Phase::Green, Phase::Yellow];

    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "RED",
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
        }
    }

    /// The phase that follows this one in the cycle.
    pub fn next(&self) -> Phase {
        match self {
            Self::Red => Self::Green,
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
