//! Core phase types.
//!
//! This module contains the pure building blocks every signal is made of:
//! - The `Phase` cycle
//! - Identifier newtypes for intersections and signals
//! - Phase change history stamped with simulated time
//!
//! Nothing in here reads a clock or performs I/O.

mod history;
mod id;
mod phase;

pub use history::{ChangeCause, PhaseChange, PhaseHistory};
pub use id::{IntersectionId, SignalId};
pub use phase::Phase;
