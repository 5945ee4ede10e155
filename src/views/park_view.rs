use std::collections::HashSet;
use tracing::debug;
use crate::lifecycle::ParkSystem;
use crate::model::{Park, Visit, Visitor};
use crate::registry::{first_max, tally};

/// Queries answered from one park's point of view.
#[derive(Clone, Copy)]
pub struct ParkView<'a> {
    park: &'a Park,
    system: &'a ParkSystem,
}

impl<'a> ParkView<'a> {
    pub(crate) fn new(park: &'a Park, system: &'a ParkSystem) -> Self {
        Self { park, system }
    }

    pub fn park(&self) -> &'a Park {
        self.park
    }

    /// Every visit to this park, in registry order.
    pub fn trips(&self) -> Vec<&'a Visit> {
        let id = self.park.id();
        self.system.registry().iter().filter(|visit| visit.park_id() == id).collect()
    }

    /// The distinct visitors who came here, in order of their first visit.
    pub fn visitors(&self) -> Vec<&'a Visitor> {
        let mut seen = HashSet::new();
        self.trips()
            .into_iter()
            .map(Visit::visitor_id)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.system.visitor_entity(id))
            .collect()
    }

    /// Number of visits, counting repeat visits by the same visitor.
    pub fn total_visits(&self) -> usize {
        self.trips().len()
    }

    /// The visitor with the most visits here. Ties go to whoever visited first;
    /// `None` if nobody has visited.
    pub fn best_visitor(&self) -> Option<&'a Visitor> {
        let counts = tally(self.trips().into_iter().map(Visit::visitor_id));
        debug!(park_id = %self.park.id(), visitors = counts.len(), "best_visitor");
        first_max(&counts).and_then(|id| self.system.visitor_entity(id))
    }
}
