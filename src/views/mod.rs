//! Read-only handles that answer relationship queries.
//!
//! A view borrows one entity together with the [`ParkSystem`](crate::lifecycle::ParkSystem)
//! it belongs to. Nothing is cached: every query scans the visit registry, so the
//! answers always reflect the visits recorded so far.

pub mod park_view;
pub mod visitor_view;

pub use park_view::*;
pub use visitor_view::*;
