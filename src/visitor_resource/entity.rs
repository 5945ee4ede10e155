//! Entity trait implementation for the Visitor domain type.

use crate::framework::Entity;
use crate::model::{Visitor, VisitorCreate, VisitorId, VisitorUpdate};
use crate::validation::{validate_visitor_name, ValidationError};

impl Entity for Visitor {
    type Id = VisitorId;
    type CreateParams = VisitorCreate;
    type UpdateParams = VisitorUpdate;
    type Error = ValidationError;
    type Context<'c> = ();

    fn id(&self) -> VisitorId { self.id }

    fn from_create_params(id: VisitorId, params: VisitorCreate) -> Result<Self, ValidationError> {
        validate_visitor_name(&params.name)?;
        Ok(Self { id, name: params.name })
    }

    /// Handles renames. Every new name is checked against the 1 to 15 character rule.
    fn on_update(&mut self, update: VisitorUpdate, _ctx: &()) -> Result<(), ValidationError> {
        if let Some(name) = update.name {
            validate_visitor_name(&name)?;
            self.name = name;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_revalidates() {
        let mut visitor = Visitor::from_create_params(VisitorId(1), VisitorCreate::new("Ana")).unwrap();

        let rename = VisitorUpdate { name: Some("Ana Maria".into()) };
        assert_eq!(visitor.on_update(rename, &()), Ok(()));
        assert_eq!(visitor.name(), "Ana Maria");

        let too_long = VisitorUpdate { name: Some("Ana Maria Lopez-Garcia".into()) };
        assert_eq!(visitor.on_update(too_long, &()), Err(ValidationError::VisitorName));
        assert_eq!(visitor.name(), "Ana Maria");
    }
}
