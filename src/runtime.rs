//! Capabilities the host object runtime provides to the reflection layer.

mod class_table;
mod selector_table;

use std::{borrow::Cow, fmt::Debug, hash::Hash};

pub use class_table::*;
pub use selector_table::*;

/// Class registry keyed by binary name (`com.example.Foo`, `[I`, `int`).
pub trait ClassRegistry {
    type Class: Clone + Debug;

    fn class_for_name(&self, binary_name: &str) -> Option<Self::Class>;

    fn binary_name<'a>(&'a self, class: &'a Self::Class) -> Cow<'a, str>;
}

/// Interning of native method identifiers. Registering the same text twice
/// must return the same id.
pub trait IdentifierTable {
    type Id: Copy + Eq + Hash + Debug;

    fn register(&self, name: &str) -> Self::Id;
}
