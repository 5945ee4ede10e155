//! Entity trait implementation for the Park domain type.
//!
//! See the trait implementation on [`Park`] for method documentation.

use crate::framework::Entity;
use crate::model::{Park, ParkCreate, ParkId, ParkUpdate};
use crate::validation::{validate_park_name, ValidationError};

impl Entity for Park {
    type Id = ParkId;
    type CreateParams = ParkCreate;
    type UpdateParams = ParkUpdate;
    type Error = ValidationError;
    type Context<'c> = ();

    fn id(&self) -> ParkId { self.id }

    /// Creates a new Park, rejecting names shorter than three characters.
    fn from_create_params(id: ParkId, params: ParkCreate) -> Result<Self, ValidationError> {
        validate_park_name(&params.name)?;
        Ok(Self { id, name: params.name })
    }

    /// The name was set at creation and is locked from then on, so any update that
    /// carries a name fails, even one repeating the current name.
    fn on_update(&mut self, update: ParkUpdate, _ctx: &()) -> Result<(), ValidationError> {
        match update.name {
            Some(_) => Err(ValidationError::ParkNameLocked(self.name.clone())),
            None => Ok(()),
        }
    }
}
