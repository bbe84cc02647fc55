//! Entities and partitions.
//!
//! An [`Entity`] carries three integer balance attributes and a 2-D
//! position. An [`EntitySet`] is the validated, ordered collection that
//! the search partitions; inside the engine an entity is referred to by
//! its index in that set.
//!
//! A [`Split`] is an unordered partition of the set into two disjoint,
//! non-empty groups stored in canonical orientation, and a
//! [`ScoredSplit`] pairs it with its cost under a total order.

mod entity;
mod split;

pub use entity::{Attributes, Entity, EntitySet, Position};
pub use split::{ScoredSplit, Split};
