use serde::{Serialize, Deserialize};
use super::entity_id;

entity_id!(
    /// Identifies a [`Visitor`] within its system.
    VisitorId, "visitor"
);

/// Represents a person who takes trips to parks.
///
/// Unlike a park, a visitor can be renamed any number of times; each new name is
/// validated again.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Visitor {
    pub(crate) id: VisitorId,
    pub(crate) name: String,
}

impl Visitor {
    pub fn id(&self) -> VisitorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Payload for creating a new visitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitorCreate {
    pub name: String,
}

impl VisitorCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Payload for updating an existing visitor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitorUpdate {
    pub name: Option<String>,
}
