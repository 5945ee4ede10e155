use serde::{Serialize, Deserialize};
use super::entity_id;

entity_id!(
    /// Identifies a [`Park`] within its system.
    ParkId, "park"
);

/// Represents a national park.
///
/// # Entity
/// This struct implements the [`Entity`](crate::framework::Entity) trait,
/// allowing it to be managed by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// The name is written once, when the park is created. There is no mutator; the
/// only way to change it is an update, and every update that names it is rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Park {
    pub(crate) id: ParkId,
    pub(crate) name: String,
}

impl Park {
    pub fn id(&self) -> ParkId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Payload for creating a new park.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkCreate {
    pub name: String,
}

impl ParkCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Payload for updating an existing park.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParkUpdate {
    pub name: Option<String>,
}
