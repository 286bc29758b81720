use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

use crate::runtime::IdentifierTable;

/// Interned native method identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selector(u32);

impl Selector {
    pub fn index(self) -> u32 {
        self.0
    }
}

pub struct SelectorTable {
    map: DashMap<Arc<str>, Selector>,
    // selector index -> name
    names: RwLock<Vec<Arc<str>>>,
}

/// Process-wide selector table.
pub static SELECTORS: Lazy<SelectorTable> = Lazy::new(SelectorTable::new);

impl SelectorTable {
    pub fn new() -> Self {
        Self {
            map: DashMap::new(),
            names: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self, selector: Selector) -> Option<Arc<str>> {
        self.names.read().get(selector.0 as usize).map(Arc::clone)
    }

    pub fn len(&self) -> usize {
        self.names.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SelectorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierTable for SelectorTable {
    type Id = Selector;

    fn register(&self, name: &str) -> Selector {
        debug_assert!(!name.is_empty(), "selector must not be empty");
        if let Some(selector) = self.map.get(name) {
            return *selector;
        }
        match self.map.entry(Arc::from(name)) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                // the shard stays locked until insert, so ids are assigned once
                let mut names = self.names.write();
                let selector = Selector(names.len() as u32);
                names.push(Arc::clone(entry.key()));
                drop(names);
                debug!(selector = name, index = selector.0, "registered selector");
                entry.insert(selector);
                selector
            }
        }
    }
}
