//! Runtime reflection metadata for translated Java classes.
//!
//! The translator emits one [`metadata::ClassInfo`] record per class. This
//! crate validates those records and answers reflective queries about them;
//! class objects and selector interning are supplied by the host through the
//! traits in [`runtime`].

pub mod consts;
pub mod descriptor;
pub mod error;
pub mod metadata;
pub mod reflection;
pub mod runtime;

#[cfg(test)]
mod fixtures;

use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{ReflectError, ReflectResult};
pub use reflection::{ClassMetadata, FieldMetadata, JavaType, MethodMetadata};

static START: Once = Once::new();

/// Installs a global `fmt` subscriber. Hosts that install their own subscriber
/// should not call this; if one is already set it is left in place.
pub fn init_tracing() {
    START.call_once(|| {
        let filter = filter::Targets::new()
            .with_default(Level::INFO)
            .with_target("classmeta", Level::DEBUG);
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(filter)
            .try_init();
    });
}
