//! The single error type raised when an entity field is rejected.

use thiserror::Error;

/// Errors that can occur while constructing or updating parks, visitors and visits.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// The park name is shorter than three characters.
    #[error("National Park's name must be a string more than 2 characters long")]
    ParkName,

    /// A park name was assigned after the park was created.
    #[error("National Park's name cannot be changed once set: {0}")]
    ParkNameLocked(String),

    /// The visitor name is empty or longer than fifteen characters.
    #[error("Visitor's name must be a string between 1 and 15 characters inclusive")]
    VisitorName,

    /// The start date is not written like `"September 1st"`.
    #[error("Start date must be in 'September 1st' format")]
    StartDate,

    /// The end date is not written like `"September 1st"`.
    #[error("End date must be in 'September 1st' format")]
    EndDate,

    /// The visit references a visitor that was never created.
    #[error("Visitor must be an existing visitor: {0}")]
    UnknownVisitor(String),

    /// The visit references a park that was never created.
    #[error("National Park must be an existing national park: {0}")]
    UnknownPark(String),

    /// The visit to update was never recorded.
    #[error("Visit not found: {0}")]
    UnknownVisit(String),
}
