//! The visit registry: every visit ever recorded, in the order it was recorded.
//!
//! The registry is append-only. Collaborators get read-only iteration; only the
//! [`ParkSystem`](crate::lifecycle::ParkSystem) can record or amend visits, and nothing
//! can remove one. Every derived query in [`views`](crate::views) is a scan over it.

pub mod tally;

pub use tally::*;

use serde::Serialize;
use tracing::debug;
use crate::framework::ResourceStore;
use crate::model::{ParkId, Visit, VisitCreate, VisitId, VisitUpdate};
use crate::validation::ValidationError;
use crate::visit_resource::VisitDirectory;

#[derive(Serialize)]
#[serde(transparent)]
pub struct VisitRegistry {
    visits: ResourceStore<Visit>,
}

impl VisitRegistry {
    pub fn new() -> Self {
        Self { visits: crate::visit_resource::new() }
    }

    /// Validates a visit and appends it. Nothing is appended if any field is rejected.
    pub(crate) fn record(
        &mut self,
        params: VisitCreate,
        directory: &dyn VisitDirectory,
    ) -> Result<VisitId, ValidationError> {
        self.visits.create(params, directory)
    }

    /// Reassigns fields of a recorded visit in place; its position does not change.
    pub(crate) fn amend(
        &mut self,
        id: VisitId,
        update: VisitUpdate,
        directory: &dyn VisitDirectory,
    ) -> Result<&Visit, ValidationError> {
        self.visits
            .update(id, update, directory)?
            .ok_or_else(|| ValidationError::UnknownVisit(id.to_string()))
    }

    pub fn get(&self, id: VisitId) -> Option<&Visit> {
        self.visits.get(id)
    }

    /// Iterates over every visit in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, Visit> {
        self.visits.iter()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    /// The park with the most visits across the whole registry, or `None` when the
    /// registry is empty. Ties go to the park that appears first.
    pub fn most_visited_park(&self) -> Option<ParkId> {
        let counts = tally(self.iter().map(Visit::park_id));
        debug!(parks = counts.len(), visits = self.len(), "most_visited_park");
        first_max(&counts)
    }
}

impl Default for VisitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a VisitRegistry {
    type Item = &'a Visit;
    type IntoIter = std::slice::Iter<'a, Visit>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
