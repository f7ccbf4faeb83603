//! # Roster
//!
//! An ordered, deduplicated entity collection driven by path-resolved
//! identifiers.
//!
//! ## Core Concepts
//!
//! - **Entities**: arbitrarily-shaped records; anything `Serialize`
//! - **Identifier paths**: a dotted path (`"id"`, `"ticket.id"`) naming the
//!   field, possibly nested, whose value keys each entity
//! - **Normalized state**: insertion-ordered identifiers plus an
//!   identifier-to-entity map, kept in bijection
//! - **Copy-on-write**: every write installs a new entity map, so held
//!   snapshots stay stable and change detection is pointer equality
//!
//! ## Example
//!
//! ```
//! use roster::{EntityAdapter, EntityState};
//! use serde::Serialize;
//!
//! #[derive(Clone, Serialize)]
//! struct Ticket {
//!     id: String,
//!     title: String,
//! }
//!
//! # fn main() -> roster::Result<()> {
//! let adapter = EntityAdapter::new("id")?;
//! let mut state = EntityState::new();
//!
//! adapter.add_one(&mut state, Ticket { id: "t-1".into(), title: "first".into() })?;
//! adapter.add_one(&mut state, Ticket { id: "t-2".into(), title: "second".into() })?;
//!
//! assert_eq!(state.len(), 2);
//! assert_eq!(adapter.get_all(&state)[0].title, "first");
//! # Ok(())
//! # }
//! ```
//!
//! A state must not be mutated concurrently: the `&mut` receivers make
//! that unrepresentable within safe Rust, and any cross-thread sharing
//! discipline beyond that is the caller's responsibility.

pub mod adapter;
pub mod error;
pub mod paths;
pub mod types;

// Re-exports
pub use adapter::EntityAdapter;
pub use error::{AdapterError, Result};
pub use paths::{flatten, lookup};
pub use types::{EntityId, EntityState};
