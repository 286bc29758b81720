use tracing::error;

use crate::{
    consts::Modifier,
    error::ReflectResult,
    metadata::{
        ClassInfo, EnclosingMethodInfo, Ptr, PtrIdx, blob_at_index, ptr_at_index, str_at_index,
    },
    reflection::{FieldMetadata, MethodMetadata, types::parse_class_list},
    runtime::{ClassRegistry, IdentifierTable},
};

/// A class record whose version tag has been checked. Every accessor and
/// lookup goes through this handle.
#[derive(Debug, Clone, Copy)]
pub struct ClassMetadata(&'static ClassInfo);

impl ClassMetadata {
    /// # Panics
    ///
    /// If the record was emitted for another layout version. The layout of such
    /// a record is unknown, so there is nothing to recover.
    pub fn new(info: &'static ClassInfo) -> Self {
        match Self::try_new(info) {
            Ok(metadata) => metadata,
            Err(err) => {
                error!(class = info.type_name, "{err}");
                panic!("incompatible class metadata: {err}");
            }
        }
    }

    pub fn try_new(info: &'static ClassInfo) -> ReflectResult<Self> {
        info.check_version()?;
        Ok(ClassMetadata(info))
    }

    pub fn info(self) -> &'static ClassInfo {
        self.0
    }

    pub fn type_name(self) -> &'static str {
        self.0.type_name
    }

    pub fn package_name(self) -> Option<&'static str> {
        self.0.package_name
    }

    /// `package.Enclosing$Type`, omitting the parts that are absent.
    pub fn qualified_name(self) -> String {
        let mut name = String::new();
        if let Some(package) = self.0.package_name.filter(|p| !p.is_empty()) {
            name.push_str(package);
            name.push('.');
        }
        if let Some(enclosing) = self.0.enclosing_name {
            name.push_str(enclosing);
            name.push('$');
        }
        name.push_str(self.0.type_name);
        name
    }

    pub fn enclosing_name(self) -> Option<&'static str> {
        self.0.enclosing_name
    }

    pub fn generic_signature(self) -> Option<&'static str> {
        self.0.generic_signature
    }

    pub fn enclosing_method(self) -> Option<&'static EnclosingMethodInfo> {
        self.0.enclosing_method
    }

    pub fn modifiers(self) -> Modifier {
        Modifier::from_bits_retain(self.0.modifiers)
    }

    pub fn method_count(self) -> usize {
        self.0.methods.len()
    }

    pub fn field_count(self) -> usize {
        self.0.fields.len()
    }

    pub fn methods(self) -> impl Iterator<Item = MethodMetadata> {
        let ptr_table = self.0.ptr_table;
        self.0
            .methods
            .iter()
            .map(move |info| MethodMetadata::new(info, ptr_table))
    }

    pub fn fields(self) -> impl Iterator<Item = FieldMetadata> {
        let ptr_table = self.0.ptr_table;
        self.0
            .fields
            .iter()
            .map(move |info| FieldMetadata::new(info, ptr_table))
    }

    pub fn ptr_at(self, idx: PtrIdx) -> Option<Ptr> {
        ptr_at_index(self.0.ptr_table, idx)
    }

    pub fn inner_classes<R: ClassRegistry>(self, registry: &R) -> ReflectResult<Vec<R::Class>> {
        match str_at_index(self.0.ptr_table, self.0.inner_classes_idx) {
            Some(list) => parse_class_list(registry, list),
            None => Ok(vec![]),
        }
    }

    pub fn annotations(self) -> Option<&'static [u8]> {
        blob_at_index(self.0.ptr_table, self.0.annotations_idx)
    }
}

impl EnclosingMethodInfo {
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn selector(&self) -> &'static str {
        self.selector
    }

    pub fn selector_id<I: IdentifierTable>(&self, identifiers: &I) -> I::Id {
        identifiers.register(self.selector)
    }
}
