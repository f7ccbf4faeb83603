//! The entity adapter: construction, mutations, selectors.

use crate::error::{AdapterError, Result};
use crate::paths::{flatten, lookup};
use crate::types::{EntityId, EntityState};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Adapter bound to one identifier path, driving any number of states.
///
/// The adapter is stateless: it holds only the bound path and operates
/// purely on the [`EntityState`] passed to each call. Entities are anything
/// `Serialize`; the identifier is resolved per entity, at mutation time, by
/// flattening the serialized shape and looking up the bound path. One
/// adapter instance can drive states of different entity types.
#[derive(Clone, Debug)]
pub struct EntityAdapter {
    id_path: String,
}

impl EntityAdapter {
    /// Create an adapter bound to `id_path`, e.g. `"id"` or `"ticket.id"`.
    ///
    /// The path must be non-empty; whether it exists in any particular
    /// entity is checked lazily, per entity, at mutation time.
    pub fn new(id_path: impl Into<String>) -> Result<Self> {
        let id_path = id_path.into();
        if id_path.is_empty() {
            return Err(AdapterError::EmptyIdentifierPath);
        }
        Ok(Self { id_path })
    }

    /// The bound identifier path.
    pub fn id_path(&self) -> &str {
        &self.id_path
    }

    /// Resolve an entity's identifier via the bound path.
    pub fn resolve_id<T: Serialize>(&self, entity: &T) -> Result<EntityId> {
        let value = serde_json::to_value(entity)?;
        let flat = flatten(&value);
        match flat.get(&self.id_path) {
            Some(resolved) => EntityId::from_value(resolved)
                .ok_or_else(|| AdapterError::UnsupportedIdentifier(self.id_path.clone())),
            // Not a flattened leaf: either nothing is at the path, or the
            // path addresses a container node whose leaves were flattened
            // past it.
            None => match lookup(&value, &self.id_path) {
                Some(_) => Err(AdapterError::UnsupportedIdentifier(self.id_path.clone())),
                None => Err(AdapterError::MissingIdentifier(self.id_path.clone())),
            },
        }
    }

    /// Insert an entity, overwriting any entity sharing its identifier.
    ///
    /// A new identifier is appended to the end of `ids`; an existing one
    /// keeps its position, so overwrites never reorder.
    pub fn add_one<T>(&self, state: &mut EntityState<T>, entity: T) -> Result<()>
    where
        T: Serialize + Clone,
    {
        let id = self.resolve_id(&entity)?;
        trace!(id = %id, "add entity");
        let fresh = Arc::make_mut(&mut state.entities)
            .insert(id.clone(), entity)
            .is_none();
        if fresh {
            state.ids.push(id);
        }
        Ok(())
    }

    /// Insert entities one by one, in input order.
    ///
    /// Stops at the first entity whose identifier fails to resolve;
    /// entities already applied stay applied.
    pub fn add_many<T, I>(&self, state: &mut EntityState<T>, entities: I) -> Result<()>
    where
        T: Serialize + Clone,
        I: IntoIterator<Item = T>,
    {
        for entity in entities {
            self.add_one(state, entity)?;
        }
        Ok(())
    }

    /// Insert an entity at the front of the ordering.
    ///
    /// A new identifier lands at index 0 of `ids`. An existing identifier
    /// keeps its position, matching [`EntityAdapter::add_one`]'s overwrite
    /// rule: overwrites never reorder.
    pub fn prepend_one<T>(&self, state: &mut EntityState<T>, entity: T) -> Result<()>
    where
        T: Serialize + Clone,
    {
        let id = self.resolve_id(&entity)?;
        trace!(id = %id, "prepend entity");
        let fresh = Arc::make_mut(&mut state.entities)
            .insert(id.clone(), entity)
            .is_none();
        if fresh {
            state.ids.insert(0, id);
        }
        Ok(())
    }

    /// Remove the entity sharing this entity's identifier, if present.
    ///
    /// An absent identifier is a no-op, not an error; only resolution
    /// itself can fail.
    pub fn remove_one<T>(&self, state: &mut EntityState<T>, entity: &T) -> Result<()>
    where
        T: Serialize + Clone,
    {
        let id = self.resolve_id(entity)?;
        self.remove_by_id(state, &id);
        Ok(())
    }

    /// Remove each entity's counterpart, in input order.
    pub fn remove_many<'a, T, I>(&self, state: &mut EntityState<T>, entities: I) -> Result<()>
    where
        T: Serialize + Clone + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for entity in entities {
            self.remove_one(state, entity)?;
        }
        Ok(())
    }

    /// Remove the entity under `id`, if any.
    ///
    /// The relative order of the remaining identifiers is preserved.
    pub fn remove_by_id<T: Clone>(&self, state: &mut EntityState<T>, id: &EntityId) {
        if !state.entities.contains_key(id) {
            return;
        }
        Arc::make_mut(&mut state.entities).remove(id);
        if let Some(pos) = state.ids.iter().position(|existing| existing == id) {
            state.ids.remove(pos);
        }
        trace!(id = %id, "removed entity");
    }

    /// Drop every entity, leaving the state empty.
    ///
    /// Installs a fresh map, so snapshots taken before the clear keep the
    /// old contents.
    pub fn clear<T>(&self, state: &mut EntityState<T>) {
        debug!(count = state.ids.len(), "clear state");
        state.ids.clear();
        state.entities = Arc::new(HashMap::new());
    }

    /// All entities, in the order defined by `ids`.
    pub fn get_all<'a, T>(&self, state: &'a EntityState<T>) -> Vec<&'a T> {
        state
            .ids
            .iter()
            .filter_map(|id| state.entities.get(id))
            .collect()
    }

    /// The entity under `id`, if present.
    pub fn get_by_id<'a, T>(&self, state: &'a EntityState<T>, id: &EntityId) -> Option<&'a T> {
        state.entities.get(id)
    }
}
