//! Error types for signal configuration and registry lookups.

use crate::core::{IntersectionId, Phase};
use thiserror::Error;

/// A single problem found while validating signal timing
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("{phase} duration must be positive")]
    NonPositiveDuration { phase: Phase },
}

/// Errors that can occur when operating on a traffic system
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrafficError {
    /// A signal was configured with one or more unusable durations
    #[error("Invalid signal configuration: {}", join_violations(.0))]
    InvalidConfig(Vec<ConfigViolation>),

    /// The referenced intersection is not registered
    #[error("Intersection {0} not found")]
    NotFound(IntersectionId),
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
