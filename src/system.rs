//! The traffic system: registry of intersections.

use crate::core::{IntersectionId, SignalId};
use crate::error::TrafficError;
use crate::intersection::Intersection;
use crate::report::SystemStatus;
use indexmap::IndexMap;
use tracing::{debug, info, warn};

/// Root aggregate owning every intersection.
///
/// Intersection ids are allocated from a counter owned by the system, so two
/// systems never influence each other's numbering. Intersections are kept in
/// creation order and are never removed.
///
/// # Example
///
/// ```rust
/// use signalgrid::core::Phase;
/// use signalgrid::TrafficSystem;
///
/// let mut system = TrafficSystem::new();
/// let crossing = system.create_intersection();
/// let signal = system.add_signal(crossing, 20, 5, 25).unwrap();
///
/// for _ in 0..4 {
///     system.update_system(5);
/// }
///
/// let status = system.system_status();
/// assert_eq!(status.intersections[0].signals[0].id, signal);
/// assert_eq!(status.intersections[0].signals[0].phase, Phase::Green);
/// ```
#[derive(Clone, Debug)]
pub struct TrafficSystem {
    intersections: IndexMap<IntersectionId, Intersection>,
    next_intersection: IntersectionId,
}

impl Default for TrafficSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl TrafficSystem {
    pub fn new() -> Self {
        Self {
            intersections: IndexMap::new(),
            next_intersection: IntersectionId::FIRST,
        }
    }

    /// Register a new, active intersection and return its id.
    pub fn create_intersection(&mut self) -> IntersectionId {
        let id = self.next_intersection;
        self.next_intersection = id.next();
        self.intersections.insert(id, Intersection::new(id));
        info!(intersection = %id, "intersection created");
        id
    }

    /// Add a signal to an existing intersection.
    ///
    /// The intersection is looked up first, so an unknown id reports
    /// `NotFound` even when the durations are invalid too.
    pub fn add_signal(
        &mut self,
        intersection: IntersectionId,
        red: u32,
        yellow: u32,
        green: u32,
    ) -> Result<SignalId, TrafficError> {
        self.lookup_mut(intersection)?.add_signal(red, yellow, green)
    }

    /// Advance time at every intersection. Inactive ones stay frozen.
    pub fn update_system(&mut self, seconds: u64) {
        debug!(seconds, intersections = self.intersections.len(), "updating system");
        for intersection in self.intersections.values_mut() {
            intersection.update(seconds);
        }
    }

    pub fn set_intersection_status(
        &mut self,
        intersection: IntersectionId,
        active: bool,
    ) -> Result<(), TrafficError> {
        self.lookup_mut(intersection)?.set_active(active);
        Ok(())
    }

    pub fn synchronize_intersection(
        &mut self,
        intersection: IntersectionId,
    ) -> Result<(), TrafficError> {
        self.lookup_mut(intersection)?.synchronize();
        Ok(())
    }

    /// Snapshot of every intersection in creation order.
    pub fn system_status(&self) -> SystemStatus {
        SystemStatus {
            intersections: self
                .intersections
                .values()
                .map(Intersection::status)
                .collect(),
        }
    }

    pub fn intersection(&self, id: IntersectionId) -> Option<&Intersection> {
        self.intersections.get(&id)
    }

    /// All intersections in creation order.
    pub fn intersections(&self) -> impl Iterator<Item = &Intersection> {
        self.intersections.values()
    }

    pub fn len(&self) -> usize {
        self.intersections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intersections.is_empty()
    }

    fn lookup_mut(&mut self, id: IntersectionId) -> Result<&mut Intersection, TrafficError> {
        match self.intersections.get_mut(&id) {
            Some(intersection) => Ok(intersection),
            None => {
                warn!(intersection = %id, "unknown intersection");
                Err(TrafficError::NotFound(id))
            }
        }
    }
}
