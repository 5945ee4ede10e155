//! # Core Resource Framework
//!
//! This module defines the generic building blocks for every entity kind in the system.
//!
//! ## Key Types
//!
//! - [`Entity`]: The trait that all resource types must implement.
//! - [`ResourceStore`]: The generic, insertion-ordered store that manages entities.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use serde::{Serialize, Serializer};
use tracing::{debug, info, warn};


// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Trait that any resource entity must implement to be managed by a [`ResourceStore`].
///
/// # Architecture Note
/// By defining a contract (`Entity`) that all our resource types (Park, Visitor, Visit)
/// must satisfy, we can write the `ResourceStore` logic *once* and reuse it everywhere.
///
/// Associated types keep the payloads apart: a `Park` store only accepts a `ParkCreate`
/// payload, and you can't hand it a `VisitCreate` by accident.
///
/// # Context
/// Every hook receives a `Context`. Entities that reference other entities (a `Visit`
/// points at a `Visitor` and a `Park`) use it to check those references exist.
/// Leaf entities use `()`.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Copy + Display + Debug + Send + Sync;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type CreateParams: Debug;

    /// The data required to update an existing instance.
    type UpdateParams: Debug;

    /// The error raised when a payload is rejected.
    type Error: std::error::Error + Clone;

    /// The dependencies injected into the hooks, borrowed for the length of one call.
    type Context<'c>: ?Sized;

    /// Returns the id assigned to this entity by its store.
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and Payload, validating every field.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    /// Called after `from_create_params` and before the entity is stored.
    /// Returning an error aborts the creation; nothing is stored.
    fn on_create(&self, _ctx: &Self::Context<'_>) -> Result<(), Self::Error> { Ok(()) }

    /// Called when an update request is received.
    /// Implementations validate the whole update before applying any of it.
    fn on_update(&mut self, update: Self::UpdateParams, ctx: &Self::Context<'_>) -> Result<(), Self::Error>;
}

// =============================================================================
// 2. THE GENERIC STORE
// =============================================================================

/// The generic store that owns a collection of entities.
///
/// Entities are kept in insertion order and are never removed, so iteration always
/// reflects the order in which they were created.
pub struct ResourceStore<T: Entity> {
    items: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceStore<T> {
    pub fn new(next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static) -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        }
    }

    /// Validates and stores a new entity, returning its id.
    pub fn create(&mut self, params: T::CreateParams, ctx: &T::Context<'_>) -> Result<T::Id, T::Error> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");

        let item = T::from_create_params((self.next_id_fn)(), params)
            .and_then(|item| item.on_create(ctx).map(|_| item));

        match item {
            Ok(item) => {
                let id = item.id();
                self.index.insert(id, self.items.len());
                self.items.push(item);
                info!(entity_type, %id, size = self.items.len(), "Created");
                Ok(id)
            }
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(e)
            }
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    /// Applies an update to an existing entity.
    ///
    /// Returns `Ok(None)` when no entity has the given id.
    pub fn update(&mut self, id: T::Id, update: T::UpdateParams, ctx: &T::Context<'_>) -> Result<Option<&T>, T::Error> {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?update, "Update");

        let Some(&pos) = self.index.get(&id) else {
            warn!(entity_type, %id, "Not found");
            return Ok(None);
        };
        let item = &mut self.items[pos];
        if let Err(e) = item.on_update(update, ctx) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(e);
        }
        info!(entity_type, %id, "Updated");
        Ok(Some(&self.items[pos]))
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterates over all entities in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity + Serialize> Serialize for ResourceStore<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}

/// Extract just the type name (e.g., "Park" instead of "park_visits::model::park::Park").
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
