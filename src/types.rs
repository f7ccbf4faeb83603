//! Core types for the normalized collection.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Identifier value extracted from an entity.
///
/// Identifiers are either strings or JSON numbers. `serde_json::Number`
/// rejects non-finite floats at construction, so `Eq` and `Hash` hold.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    String(String),
    Number(Number),
}

impl EntityId {
    /// Extract an identifier from a resolved JSON value.
    ///
    /// Returns `None` for values that cannot serve as keys (objects,
    /// arrays, booleans, null).
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(EntityId::String(s.clone())),
            Value::Number(n) => Some(EntityId::Number(n.clone())),
            _ => None,
        }
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::String(s) => write!(f, "EntityId({s:?})"),
            EntityId::Number(n) => write!(f, "EntityId({n})"),
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::String(s) => write!(f, "{s}"),
            EntityId::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        EntityId::String(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        EntityId::String(s)
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        EntityId::Number(Number::from(n))
    }
}

impl From<u64> for EntityId {
    fn from(n: u64) -> Self {
        EntityId::Number(Number::from(n))
    }
}

/// Normalized collection state: insertion-ordered identifiers plus an
/// identifier-to-entity map, kept in bijection by the adapter operations.
///
/// Callers create and own the state; the adapter mutates whatever state is
/// passed to it. Writing the two fields directly can break the bijection,
/// so mutation should go through the adapter.
///
/// The entity map sits behind an `Arc`: every write installs a new map
/// value (cloning first when a snapshot is still held), so snapshots taken
/// with [`EntityState::snapshot`] are stable across later writes and
/// `Arc::ptr_eq` detects change in O(1).
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState<T> {
    /// Insertion-ordered identifiers. Never contains duplicates.
    pub ids: Vec<EntityId>,

    /// Identifier to entity map. Only `ids` defines order.
    pub entities: Arc<HashMap<EntityId, T>>,
}

impl<T> EntityState<T> {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            ids: Vec::new(),
            entities: Arc::new(HashMap::new()),
        }
    }

    /// Number of entities held.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether an identifier is currently present.
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Shared snapshot of the entity map as of now.
    ///
    /// Later writes install a new map; the snapshot keeps the old one.
    pub fn snapshot(&self) -> Arc<HashMap<EntityId, T>> {
        Arc::clone(&self.entities)
    }
}

impl<T> Default for EntityState<T> {
    fn default() -> Self {
        Self::new()
    }
}
