use std::collections::HashSet;
use crate::lifecycle::ParkSystem;
use crate::model::{Park, ParkId, Visit, Visitor};

/// Queries answered from one visitor's point of view.
#[derive(Clone, Copy)]
pub struct VisitorView<'a> {
    visitor: &'a Visitor,
    system: &'a ParkSystem,
}

impl<'a> VisitorView<'a> {
    pub(crate) fn new(visitor: &'a Visitor, system: &'a ParkSystem) -> Self {
        Self { visitor, system }
    }

    pub fn visitor(&self) -> &'a Visitor {
        self.visitor
    }

    /// Every visit this visitor made, in registry order.
    pub fn trips(&self) -> Vec<&'a Visit> {
        let id = self.visitor.id();
        self.system.registry().iter().filter(|visit| visit.visitor_id() == id).collect()
    }

    /// The distinct parks visited, in order of the first visit to each.
    pub fn parks(&self) -> Vec<&'a Park> {
        let mut seen = HashSet::new();
        self.trips()
            .into_iter()
            .map(Visit::park_id)
            .filter(|id| seen.insert(*id))
            .filter_map(|id| self.system.park_entity(id))
            .collect()
    }

    /// Number of visits this visitor made to `park`, repeats included.
    pub fn total_visits_at_park(&self, park: ParkId) -> usize {
        self.trips().into_iter().filter(|visit| visit.park_id() == park).count()
    }
}
