use std::{
    borrow::Cow,
    sync::{
        Arc,
        atomic::{AtomicU32, Ordering::Relaxed},
    },
};

use dashmap::{DashMap, mapref::entry::Entry};
use tracing::debug;

use crate::{descriptor::PrimitiveType, runtime::ClassRegistry};

/// Handle handed out by [`ClassTable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRef {
    id: u32,
    name: Arc<str>,
}

impl ClassRef {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A concurrent [`ClassRegistry`] for hosts without a registry of their own.
#[derive(Debug, Default)]
pub struct ClassTable {
    classes: DashMap<Arc<str>, ClassRef>,
    next_id: AtomicU32,
}

impl ClassTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `binary_name`, or returns the handle it was defined with before.
    pub fn define(&self, binary_name: &str) -> ClassRef {
        if let Some(class) = self.classes.get(binary_name) {
            return class.clone();
        }
        match self.classes.entry(Arc::from(binary_name)) {
            Entry::Occupied(entry) => entry.get().clone(),
            Entry::Vacant(entry) => {
                let class = ClassRef {
                    id: self.next_id.fetch_add(1, Relaxed) + 1,
                    name: Arc::clone(entry.key()),
                };
                debug!(class = binary_name, id = class.id, "defined class");
                entry.insert(class.clone());
                class
            }
        }
    }

    pub fn define_primitives(&self) {
        use PrimitiveType::*;
        for primitive in [Boolean, Byte, Char, Short, Int, Long, Float, Double, Void] {
            self.define(primitive.name());
        }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassRegistry for ClassTable {
    type Class = ClassRef;

    fn class_for_name(&self, binary_name: &str) -> Option<ClassRef> {
        self.classes.get(binary_name).map(|class| class.clone())
    }

    fn binary_name<'a>(&'a self, class: &'a ClassRef) -> Cow<'a, str> {
        Cow::Borrowed(class.name())
    }
}
