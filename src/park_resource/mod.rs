//! Park-specific resource logic and entity implementation.

pub mod entity;

use crate::framework::ResourceStore;
use crate::model::{Park, ParkId};
use std::sync::atomic::{AtomicU64, Ordering};

/// Creates an empty park store whose ids start at `park_1`.
pub fn new() -> ResourceStore<Park> {
    let park_id_counter = AtomicU64::new(1);
    ResourceStore::new(move || ParkId(park_id_counter.fetch_add(1, Ordering::SeqCst)))
}
