//! Runtime orchestration.
//!
//! # Main Components
//!
//! - [`ParkSystem`] - Owns every store and wires visits to the parks and visitors they name
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod park_system;
pub mod tracing;

pub use self::park_system::*;
pub use self::tracing::setup_tracing;
