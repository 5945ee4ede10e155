//! Visitor-specific resource logic and entity implementation.

pub mod entity;

use crate::framework::ResourceStore;
use crate::model::{Visitor, VisitorId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates an empty visitor store whose ids start at `visitor_1`.
pub fn new() -> ResourceStore<Visitor> {
    let visitor_id_counter = AtomicU64::new(1);
    ResourceStore::new(move || VisitorId(visitor_id_counter.fetch_add(1, Ordering::SeqCst)))
}
