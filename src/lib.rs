//! Signalgrid: a small simulation of timed traffic signals
//!
//! A `TrafficSystem` owns intersections, each intersection owns signals, and
//! each signal cycles RED → GREEN → YELLOW → RED with fixed durations. Time
//! is simulated: it only moves when the caller passes an elapsed number of
//! seconds to `update_system`.
//!
//! # Core Concepts
//!
//! - **Phase**: the light a signal shows, with a fixed cycle order
//! - **Signal**: validated timing plus the current phase and offset
//! - **Intersection**: signals that advance together and can be switched off
//! - **TrafficSystem**: registry that allocates ids and fans out updates
//! - **Reports**: structured snapshots returned instead of printed text
//!
//! # Example
//!
//! ```rust
//! use signalgrid::core::Phase;
//! use signalgrid::TrafficSystem;
//!
//! let mut system = TrafficSystem::new();
//! let crossing = system.create_intersection();
//! system.add_signal(crossing, 20, 5, 25).unwrap();
//!
//! system.update_system(20);
//! let status = system.system_status();
//! assert_eq!(status.intersections[0].signals[0].phase, Phase::Green);
//!
//! // Simulated outage: nothing moves while inactive
//! system.set_intersection_status(crossing, false).unwrap();
//! system.update_system(100);
//! let frozen = system.system_status();
//! assert_eq!(frozen.intersections[0].signals, status.intersections[0].signals);
//!
//! // Restore and restart every signal from RED
//! system.set_intersection_status(crossing, true).unwrap();
//! system.synchronize_intersection(crossing).unwrap();
//! let signal = &system.system_status().intersections[0].signals[0];
//! assert_eq!((signal.phase, signal.elapsed), (Phase::Red, 0));
//! ```

pub mod core;
pub mod error;
pub mod intersection;
pub mod report;
pub mod signal;
pub mod system;

// Re-export commonly used types
pub use crate::core::{IntersectionId, Phase, SignalId};
pub use error::{ConfigViolation, TrafficError};
pub use intersection::Intersection;
pub use report::{IntersectionStatus, SignalStatus, SystemStatus};
pub use signal::{Signal, SignalTiming};
pub use system::TrafficSystem;
