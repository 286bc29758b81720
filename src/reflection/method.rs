use crate::{
    consts::{CONSTRUCTOR_SELECTOR, CONSTRUCTOR_SELECTOR_PREFIX, Modifier},
    error::ReflectResult,
    metadata::{MethodInfo, Ptr, blob_at_index, str_at_index},
    reflection::types::{JavaType, parse_class_list, parse_type},
    runtime::{ClassRegistry, IdentifierTable},
};

/// Modifiers of `method`, or `PUBLIC` for synthetic members that carry no
/// record.
#[inline(always)]
pub fn method_modifiers(method: Option<&MethodInfo>) -> Modifier {
    method.map_or(Modifier::PUBLIC, |info| {
        Modifier::from_bits_retain(info.modifiers)
    })
}

#[inline(always)]
pub fn method_selector<I: IdentifierTable>(method: &MethodInfo, identifiers: &I) -> I::Id {
    identifiers.register(method.selector)
}

/// Constructors are recognized by the native naming convention, not by a
/// modifier bit.
pub fn method_is_constructor(method: &MethodInfo) -> bool {
    method.selector == CONSTRUCTOR_SELECTOR
        || method.selector.starts_with(CONSTRUCTOR_SELECTOR_PREFIX)
}

pub fn method_return_type<R: ClassRegistry>(
    method: Option<MethodMetadata>,
    registry: &R,
) -> Option<ReflectResult<JavaType<R::Class>>> {
    method.map(|method| method.return_type(registry))
}

/// A method record paired with the pointer table of its class.
#[derive(Debug, Clone, Copy)]
pub struct MethodMetadata {
    info: &'static MethodInfo,
    ptr_table: &'static [Ptr],
}

impl MethodMetadata {
    pub(crate) fn new(info: &'static MethodInfo, ptr_table: &'static [Ptr]) -> Self {
        Self { info, ptr_table }
    }

    pub fn info(&self) -> &'static MethodInfo {
        self.info
    }

    pub fn native_name(&self) -> &'static str {
        self.info.selector
    }

    /// Source-language name: the override from the pointer table when present,
    /// the native identifier otherwise.
    pub fn java_name(&self) -> &'static str {
        str_at_index(self.ptr_table, self.info.java_name_idx).unwrap_or(self.info.selector)
    }

    pub fn modifiers(&self) -> Modifier {
        method_modifiers(Some(self.info))
    }

    pub fn selector<I: IdentifierTable>(&self, identifiers: &I) -> I::Id {
        method_selector(self.info, identifiers)
    }

    pub fn is_constructor(&self) -> bool {
        method_is_constructor(self.info)
    }

    pub fn return_type_descriptor(&self) -> &'static str {
        self.info.return_type
    }

    pub fn return_type<R: ClassRegistry>(&self, registry: &R) -> ReflectResult<JavaType<R::Class>> {
        parse_type(registry, self.info.return_type)
    }

    pub fn generic_signature(&self) -> Option<&'static str> {
        str_at_index(self.ptr_table, self.info.generic_signature_idx)
    }

    pub fn exception_types<R: ClassRegistry>(&self, registry: &R) -> ReflectResult<Vec<R::Class>> {
        match str_at_index(self.ptr_table, self.info.exceptions_idx) {
            Some(list) => parse_class_list(registry, list),
            None => Ok(vec![]),
        }
    }

    pub fn annotations(&self) -> Option<&'static [u8]> {
        blob_at_index(self.ptr_table, self.info.annotations_idx)
    }

    pub fn parameter_annotations(&self) -> Option<&'static [u8]> {
        blob_at_index(self.ptr_table, self.info.param_annotations_idx)
    }
}
