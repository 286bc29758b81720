use std::any::Any;

use crate::{
    consts::Modifier,
    error::ReflectResult,
    metadata::{ConstValue, FieldInfo, Ptr, blob_at_index, static_at_index, str_at_index},
    reflection::types::{JavaType, parse_type},
    runtime::ClassRegistry,
};

#[derive(Debug, Clone, Copy)]
pub struct FieldMetadata {
    info: &'static FieldInfo,
    ptr_table: &'static [Ptr],
}

impl FieldMetadata {
    pub(crate) fn new(info: &'static FieldInfo, ptr_table: &'static [Ptr]) -> Self {
        Self { info, ptr_table }
    }

    pub fn info(&self) -> &'static FieldInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn java_name(&self) -> &'static str {
        str_at_index(self.ptr_table, self.info.java_name_idx).unwrap_or(self.info.name)
    }

    pub fn type_descriptor(&self) -> &'static str {
        self.info.type_desc
    }

    pub fn field_type<R: ClassRegistry>(&self, registry: &R) -> ReflectResult<JavaType<R::Class>> {
        parse_type(registry, self.info.type_desc)
    }

    pub fn modifiers(&self) -> Modifier {
        Modifier::from_bits_retain(self.info.modifiers)
    }

    /// Compile-time value of a `static final` field. The inline storage of any
    /// other field is meaningless and is never read.
    pub fn constant_value(&self) -> Option<ConstValue> {
        if !self.modifiers().is_constant() {
            return None;
        }
        self.info
            .constant_value
            .decode(self.info.type_desc, self.ptr_table)
    }

    pub fn static_ref(&self) -> Option<&'static (dyn Any + Send + Sync)> {
        static_at_index(self.ptr_table, self.info.static_ref_idx)
    }

    pub fn static_value<T: Any>(&self) -> Option<&'static T> {
        self.static_ref()?.downcast_ref()
    }

    pub fn generic_signature(&self) -> Option<&'static str> {
        str_at_index(self.ptr_table, self.info.generic_signature_idx)
    }

    pub fn annotations(&self) -> Option<&'static [u8]> {
        blob_at_index(self.ptr_table, self.info.annotations_idx)
    }
}
