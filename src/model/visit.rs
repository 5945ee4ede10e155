use serde::{Serialize, Deserialize};
use super::{entity_id, ParkId, VisitorId};

entity_id!(
    /// Identifies a [`Visit`] within its registry.
    VisitId, "visit"
);

/// A single trip: one visitor at one park between two dates.
///
/// Visits only hold the ids of the visitor and park they link; the entities
/// themselves are owned by their stores and shared by every visit that names them.
/// Dates are kept exactly as written, e.g. `"September 1st"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visit {
    pub(crate) id: VisitId,
    pub(crate) visitor: VisitorId,
    pub(crate) park: ParkId,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
}

impl Visit {
    pub fn id(&self) -> VisitId {
        self.id
    }

    pub fn visitor_id(&self) -> VisitorId {
        self.visitor
    }

    pub fn park_id(&self) -> ParkId {
        self.park
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }
}

/// Payload for recording a new visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitCreate {
    pub visitor: VisitorId,
    pub park: ParkId,
    pub start_date: String,
    pub end_date: String,
}

impl VisitCreate {
    pub fn new(
        visitor: VisitorId,
        park: ParkId,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            visitor,
            park,
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}

/// Payload for reassigning fields of an existing visit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitUpdate {
    pub visitor: Option<VisitorId>,
    pub park: Option<ParkId>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}
