//! Identifier newtypes.
//!
//! Ids are handed out by the aggregate that owns the counter: a
//! `TrafficSystem` numbers its intersections, an `Intersection` numbers its
//! signals. Both start at 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an intersection, unique within one traffic system.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntersectionId(pub u32);

/// Identifier of a signal, unique within its intersection.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalId(pub u32);

impl IntersectionId {
    pub const FIRST: IntersectionId = IntersectionId(1);

    pub(crate) fn next(self) -> Self {
        IntersectionId(self.0 + 1)
    }
}

impl SignalId {
    pub const FIRST: SignalId = SignalId(1);

    pub(crate) fn next(self) -> Self {
        SignalId(self.0 + 1)
    }
}

impl fmt::Display for IntersectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

impl fmt::Display for SignalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_increase() {
        assert_eq!(IntersectionId::FIRST, IntersectionId(1));
        assert_eq!(IntersectionId::FIRST.next(), IntersectionId(2));
        assert_eq!(SignalId::FIRST.next().next(), SignalId(3));
    }

    #[test]
    fn ids_display_with_prefix() {
        assert_eq!(IntersectionId(4).to_string(), "I4");
        assert_eq!(SignalId(2).to_string(), "S2");
    }

    #[test]
    fn ids_serialize_as_plain_numbers() {
        assert_eq!(serde_json::to_string(&IntersectionId(7)).unwrap(), "7");
        let id: SignalId = serde_json::from_str("3").unwrap();
        assert_eq!(id, SignalId(3));
    }
}
