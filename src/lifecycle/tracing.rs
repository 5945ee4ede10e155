//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **Entity Operations**: Create and Update on every store, with the new size
//! - **Entry Points**: Spans for each `ParkSystem` operation that changes state
//! - **Errors**: The rejected field and entity id, at `warn`
//! - **Aggregations**: `best_visitor` and `most_visited_park` at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to the store only
//! RUST_LOG=park_visits::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Starting park system
//! INFO create_park: Created entity_type="Park" id=park_1 size=1
//! INFO create_visitor: Created entity_type="Visitor" id=visitor_1 size=1
//! INFO create_visit: Created entity_type="Visit" id=visit_1 size=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line comes from
        .compact()
        .init();
}
