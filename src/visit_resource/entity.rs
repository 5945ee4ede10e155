//! Entity trait implementation for the Visit domain type.
//!
//! A visit is checked in two steps. [`Entity::from_create_params`] checks both dates,
//! then [`Entity::on_create`] asks the injected [`VisitDirectory`] whether the
//! visitor and park it names exist. Updates run the same checks on whichever fields
//! they carry and apply nothing unless all of them pass.

use crate::framework::Entity;
use crate::model::{ParkId, Visit, VisitCreate, VisitId, VisitUpdate, VisitorId};
use crate::validation::{check_date_format, ValidationError};

/// Lookup used by visits to confirm the entities they reference exist.
pub trait VisitDirectory {
    fn has_visitor(&self, id: VisitorId) -> bool;
    fn has_park(&self, id: ParkId) -> bool;
}

fn check_visitor(directory: &dyn VisitDirectory, id: VisitorId) -> Result<(), ValidationError> {
    if directory.has_visitor(id) {
        Ok(())
    } else {
        Err(ValidationError::UnknownVisitor(id.to_string()))
    }
}

fn check_park(directory: &dyn VisitDirectory, id: ParkId) -> Result<(), ValidationError> {
    if directory.has_park(id) {
        Ok(())
    } else {
        Err(ValidationError::UnknownPark(id.to_string()))
    }
}

fn check_start_date(date: &str) -> Result<(), ValidationError> {
    check_date_format(date).then_some(()).ok_or(ValidationError::StartDate)
}

fn check_end_date(date: &str) -> Result<(), ValidationError> {
    check_date_format(date).then_some(()).ok_or(ValidationError::EndDate)
}

impl Entity for Visit {
    type Id = VisitId;
    type CreateParams = VisitCreate;
    type UpdateParams = VisitUpdate;
    type Error = ValidationError;
    type Context<'c> = dyn VisitDirectory + 'c;

    fn id(&self) -> VisitId { self.id }

    fn from_create_params(id: VisitId, params: VisitCreate) -> Result<Self, ValidationError> {
        check_start_date(&params.start_date)?;
        check_end_date(&params.end_date)?;
        Ok(Self {
            id,
            visitor: params.visitor,
            park: params.park,
            start_date: params.start_date,
            end_date: params.end_date,
        })
    }

    fn on_create(&self, directory: &(dyn VisitDirectory + '_)) -> Result<(), ValidationError> {
        check_visitor(directory, self.visitor)?;
        check_park(directory, self.park)
    }

    fn on_update(&mut self, update: VisitUpdate, directory: &(dyn VisitDirectory + '_)) -> Result<(), ValidationError> {
        if let Some(visitor) = update.visitor {
            check_visitor(directory, visitor)?;
        }
        if let Some(park) = update.park {
            check_park(directory, park)?;
        }
        if let Some(start_date) = &update.start_date {
            check_start_date(start_date)?;
        }
        if let Some(end_date) = &update.end_date {
            check_end_date(end_date)?;
        }

        if let Some(visitor) = update.visitor {
            self.visitor = visitor;
        }
        if let Some(park) = update.park {
            self.park = park;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Knows visitor 1 and park 1 only.
    struct Fixed;

    impl VisitDirectory for Fixed {
        fn has_visitor(&self, id: VisitorId) -> bool { id == VisitorId(1) }
        fn has_park(&self, id: ParkId) -> bool { id == ParkId(1) }
    }

    fn visit() -> Visit {
        let params = VisitCreate::new(VisitorId(1), ParkId(1), "June 1st", "June 5th");
        Visit::from_create_params(VisitId(1), params).unwrap()
    }

    #[test]
    fn test_dates_are_checked_at_creation() {
        let bad_start = VisitCreate::new(VisitorId(1), ParkId(1), "June", "June 5th");
        assert_eq!(Visit::from_create_params(VisitId(1), bad_start), Err(ValidationError::StartDate));

        let bad_end = VisitCreate::new(VisitorId(1), ParkId(1), "June 1st", "June 31st");
        assert_eq!(Visit::from_create_params(VisitId(1), bad_end), Err(ValidationError::EndDate));
    }

    #[test]
    fn test_references_are_checked_on_create() {
        assert_eq!(visit().on_create(&Fixed), Ok(()));

        let mut stray = visit();
        stray.park = ParkId(9);
        assert_eq!(stray.on_create(&Fixed), Err(ValidationError::UnknownPark("park_9".into())));

        stray.visitor = VisitorId(4);
        assert_eq!(stray.on_create(&Fixed), Err(ValidationError::UnknownVisitor("visitor_4".into())));
    }

    #[test]
    fn test_update_is_all_or_nothing() {
        let mut visit = visit();
        let update = VisitUpdate {
            start_date: Some("July 2nd".into()),
            end_date: Some("July 3".into()),
            ..Default::default()
        };
        assert_eq!(visit.on_update(update, &Fixed), Err(ValidationError::EndDate));
        assert_eq!(visit.start_date(), "June 1st");

        let update = VisitUpdate {
            start_date: Some("July 2nd".into()),
            end_date: Some("July 3rd".into()),
            ..Default::default()
        };
        assert_eq!(visit.on_update(update, &Fixed), Ok(()));
        assert_eq!((visit.start_date(), visit.end_date()), ("July 2nd", "July 3rd"));
    }
}
