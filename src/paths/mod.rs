//! Dotted-path resolution over nested values.
//!
//! Nested identifier paths like `"ticket.id"` are resolved by flattening
//! the whole value into a one-level map keyed by dot-joined paths, then
//! looking the path up there. Arrays flatten by index position, so
//! `"items.0.id"` addresses the first element's `id`.

mod flatten;

pub use flatten::{flatten, lookup};
