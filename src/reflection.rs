//! Reflective views over the records in [`crate::metadata`].

mod class;
mod field;
mod lookup;
mod method;
pub mod types;

pub use class::ClassMetadata;
pub use field::FieldMetadata;
pub use method::{
    MethodMetadata, method_is_constructor, method_modifiers, method_return_type, method_selector,
};
pub use types::{JavaType, class_for_descriptor, parse_class_list, parse_type, parse_type_list};
