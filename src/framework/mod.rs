//! Generic resource framework.
//!
//! This module provides the core building blocks for managing typed entities with
//! validated create and update operations.
//!
//! # Main Components
//!
//! - [`Entity`] - Trait that resource types implement to be managed by a store
//! - [`ResourceStore`] - Generic insertion-ordered store that manages entities

pub mod core;

// Re-export core types for convenience
pub use core::*;
