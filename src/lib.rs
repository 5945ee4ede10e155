//! # Park Visits
//!
//! > **Visitors, national parks and the trips that link them.**
//!
//! This crate models a many-to-many relationship in memory. A [`Visit`](model::Visit)
//! links one [`Visitor`](model::Visitor) to one [`Park`](model::Park) between two dates,
//! and every question about who went where is answered by scanning the registry of
//! visits.
//!
//! ## 🏗️ Design
//!
//! ### Typed ids instead of shared pointers
//! Parks and visitors live in their own stores. A visit holds a [`ParkId`](model::ParkId)
//! and a [`VisitorId`](model::VisitorId), so the compiler already guarantees a visit
//! points at a park and a visitor. What is left to check at runtime is that they exist,
//! which the [`ParkSystem`](lifecycle::ParkSystem) does before recording the visit.
//!
//! ### An explicit registry
//! There is no global list of visits. Each `ParkSystem` owns a
//! [`VisitRegistry`](registry::VisitRegistry) that only grows, and hands out read-only
//! access to it.
//!
//! ### One error type
//! Every rejected field surfaces as a [`ValidationError`](validation::ValidationError).
//! Queries never fail; they return an empty list or `None`.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`Entity`](framework::Entity) trait and
//! [`ResourceStore`](framework::ResourceStore) that create, validate and log entities.
//!
//! ### 2. The Data ([`model`]) and Rules ([`validation`])
//! Plain structs and DTOs, plus the name and date checks they must pass.
//!
//! ### 3. The Implementation ([`park_resource`], [`visitor_resource`], [`visit_resource`])
//! Concrete implementations of the `Entity` trait.
//!
//! ### 4. The Ledger ([`registry`]) and Queries ([`views`])
//! The append-only visit registry and the [`ParkView`](views::ParkView) /
//! [`VisitorView`](views::VisitorView) handles that query it.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`ParkSystem`](lifecycle::ParkSystem) ties the stores together.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod park_resource;
pub mod registry;
pub mod validation;
pub mod views;
pub mod visit_resource;
pub mod visitor_resource;
