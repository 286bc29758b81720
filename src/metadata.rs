//! Record layout emitted by the translator, one `ClassInfo` per translated class.
//!
//! Everything here is `'static` and immutable. Optional data is reached through
//! a signed index into the owning class's pointer table; a negative index means
//! the datum is absent.

mod ptr_table;
mod raw_value;

use std::any::Any;

pub use ptr_table::*;
pub use raw_value::*;

use crate::{
    consts::METADATA_VERSION,
    error::{ReflectError, ReflectResult},
};

pub type PtrIdx = i16;

/// An entry of a class's pointer table.
#[derive(Debug, Clone, Copy)]
pub enum Ptr {
    Str(&'static str),
    Blob(&'static [u8]),
    Static(&'static (dyn Any + Send + Sync)),
}

#[repr(C)]
#[derive(Debug)]
pub struct MethodInfo {
    /// native identifier, already known to the host runtime
    pub selector: &'static str,
    pub return_type: &'static str,
    pub modifiers: u16,
    pub java_name_idx: PtrIdx,
    pub exceptions_idx: PtrIdx,
    pub generic_signature_idx: PtrIdx,
    pub annotations_idx: PtrIdx,
    pub param_annotations_idx: PtrIdx,
}

#[repr(C)]
#[derive(Debug)]
pub struct FieldInfo {
    pub name: &'static str,
    pub type_desc: &'static str,
    // only meaningful for static final fields
    pub constant_value: RawValue,
    pub modifiers: u16,
    pub java_name_idx: PtrIdx,
    pub static_ref_idx: PtrIdx,
    pub generic_signature_idx: PtrIdx,
    pub annotations_idx: PtrIdx,
}

#[repr(C)]
#[derive(Debug)]
pub struct EnclosingMethodInfo {
    pub type_name: &'static str,
    pub selector: &'static str,
}

#[repr(C)]
#[derive(Debug)]
pub struct ClassInfo {
    pub version: u32,
    pub type_name: &'static str,
    pub package_name: Option<&'static str>,
    pub enclosing_name: Option<&'static str>,
    pub modifiers: u16,
    pub methods: &'static [MethodInfo],
    pub fields: &'static [FieldInfo],
    pub inner_classes_idx: PtrIdx,
    pub enclosing_method: Option<&'static EnclosingMethodInfo>,
    pub generic_signature: Option<&'static str>,
    pub annotations_idx: PtrIdx,
    pub ptr_table: &'static [Ptr],
}

impl ClassInfo {
    pub fn check_version(&self) -> ReflectResult<()> {
        if self.version != METADATA_VERSION {
            return Err(ReflectError::VersionMismatch {
                type_name: self.type_name,
                expected: METADATA_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}
