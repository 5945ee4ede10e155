//! Visit-specific resource logic and entity implementation.

pub mod entity;

pub use entity::VisitDirectory;

use crate::framework::ResourceStore;
use crate::model::{Visit, VisitId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates an empty visit store whose ids start at `visit_1`.
pub fn new() -> ResourceStore<Visit> {
    let visit_id_counter = AtomicU64::new(1);
    ResourceStore::new(move || VisitId(visit_id_counter.fetch_add(1, Ordering::SeqCst)))
}
