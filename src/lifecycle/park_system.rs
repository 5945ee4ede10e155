use tracing::{debug, info, instrument};
use crate::framework::ResourceStore;
use crate::model::{
    Park, ParkCreate, ParkId, ParkUpdate, Visit, VisitCreate, VisitId, VisitUpdate, Visitor,
    VisitorCreate, VisitorId, VisitorUpdate,
};
use crate::registry::VisitRegistry;
use crate::validation::ValidationError;
use crate::views::{ParkView, VisitorView};
use crate::visit_resource::VisitDirectory;

/// The orchestrator for parks, visitors and the visits that link them.
///
/// `ParkSystem` is responsible for:
/// - **Ownership**: It owns the park store, the visitor store and the [`VisitRegistry`].
/// - **Dependency Wiring**: Visits are validated against the stores it owns, so a visit
///   can only name a visitor and a park that exist in the same system.
/// - **Queries**: [`ParkView`] and [`VisitorView`] borrow the system to answer questions.
///
/// Several systems can live side by side; each has its own registry.
///
/// # Example
///
/// ```ignore
/// let mut system = ParkSystem::new();
///
/// let park = system.create_park(ParkCreate::new("Yellowstone"))?;
/// let ana = system.create_visitor(VisitorCreate::new("Ana"))?;
/// system.create_visit(VisitCreate::new(ana, park, "June 1st", "June 5th"))?;
///
/// assert_eq!(system.park(park).unwrap().total_visits(), 1);
/// ```
pub struct ParkSystem {
    parks: ResourceStore<Park>,
    visitors: ResourceStore<Visitor>,
    registry: VisitRegistry,
}

/// The stores a visit is checked against.
struct Roster<'a> {
    parks: &'a ResourceStore<Park>,
    visitors: &'a ResourceStore<Visitor>,
}

impl VisitDirectory for Roster<'_> {
    fn has_visitor(&self, id: VisitorId) -> bool {
        self.visitors.contains(id)
    }

    fn has_park(&self, id: ParkId) -> bool {
        self.parks.contains(id)
    }
}

impl ParkSystem {
    /// Creates a system with no parks, no visitors and an empty registry.
    pub fn new() -> Self {
        info!("Starting park system");
        Self {
            parks: crate::park_resource::new(),
            visitors: crate::visitor_resource::new(),
            registry: VisitRegistry::new(),
        }
    }

    // --- Parks ---

    #[instrument(skip(self, params))]
    pub fn create_park(&mut self, params: ParkCreate) -> Result<ParkId, ValidationError> {
        debug!(?params, "create_park called");
        self.parks.create(params, &())
    }

    /// Always fails: a park's name is locked once the park exists.
    #[instrument(skip(self, name))]
    pub fn rename_park(&mut self, id: ParkId, name: impl Into<String>) -> Result<(), ValidationError> {
        let update = ParkUpdate { name: Some(name.into()) };
        match self.parks.update(id, update, &())? {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownPark(id.to_string())),
        }
    }

    pub fn park(&self, id: ParkId) -> Option<ParkView<'_>> {
        self.parks.get(id).map(|park| ParkView::new(park, self))
    }

    /// All parks in creation order.
    pub fn parks(&self) -> impl Iterator<Item = &Park> {
        self.parks.iter()
    }

    /// The park with the most visits across the registry, or `None` if nothing has
    /// been visited yet. Ties go to the park visited first.
    pub fn most_visited(&self) -> Option<&Park> {
        self.registry
            .most_visited_park()
            .and_then(|id| self.parks.get(id))
    }

    // --- Visitors ---

    #[instrument(skip(self, params))]
    pub fn create_visitor(&mut self, params: VisitorCreate) -> Result<VisitorId, ValidationError> {
        debug!(?params, "create_visitor called");
        self.visitors.create(params, &())
    }

    #[instrument(skip(self, name))]
    pub fn rename_visitor(&mut self, id: VisitorId, name: impl Into<String>) -> Result<(), ValidationError> {
        let update = VisitorUpdate { name: Some(name.into()) };
        match self.visitors.update(id, update, &())? {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownVisitor(id.to_string())),
        }
    }

    pub fn visitor(&self, id: VisitorId) -> Option<VisitorView<'_>> {
        self.visitors.get(id).map(|visitor| VisitorView::new(visitor, self))
    }

    /// All visitors in creation order.
    pub fn visitors(&self) -> impl Iterator<Item = &Visitor> {
        self.visitors.iter()
    }

    // --- Visits ---

    /// Validates all four fields, then appends the visit to the registry.
    /// If any field is rejected the registry is left exactly as it was.
    #[instrument(skip(self, params))]
    pub fn create_visit(&mut self, params: VisitCreate) -> Result<VisitId, ValidationError> {
        debug!(?params, "create_visit called");
        let roster = Roster { parks: &self.parks, visitors: &self.visitors };
        self.registry.record(params, &roster)
    }

    /// Reassigns any subset of a visit's fields. Each provided field is validated
    /// again and the update applies only if all of them pass.
    #[instrument(skip(self, update))]
    pub fn update_visit(&mut self, id: VisitId, update: VisitUpdate) -> Result<&Visit, ValidationError> {
        debug!(?update, "update_visit called");
        let roster = Roster { parks: &self.parks, visitors: &self.visitors };
        self.registry.amend(id, update, &roster)
    }

    pub fn visit(&self, id: VisitId) -> Option<&Visit> {
        self.registry.get(id)
    }

    /// Read-only access to every recorded visit.
    pub fn registry(&self) -> &VisitRegistry {
        &self.registry
    }

    pub(crate) fn park_entity(&self, id: ParkId) -> Option<&Park> {
        self.parks.get(id)
    }

    pub(crate) fn visitor_entity(&self, id: VisitorId) -> Option<&Visitor> {
        self.visitors.get(id)
    }
}

impl Default for ParkSystem {
    fn default() -> Self {
        Self::new()
    }
}
