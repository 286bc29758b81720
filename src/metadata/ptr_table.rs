use std::any::Any;

use crate::metadata::{Ptr, PtrIdx};

/// Resolves an optional index against a class's pointer table.
///
/// A negative index is absent. Any other index is trusted: the translator sizes
/// each table to the largest index it emits for that class, so an index past
/// the end is a producer defect and panics.
#[inline(always)]
pub fn ptr_at_index(ptr_table: &[Ptr], idx: PtrIdx) -> Option<Ptr> {
    if idx < 0 {
        return None;
    }
    Some(ptr_table[idx as usize])
}

pub fn str_at_index(ptr_table: &[Ptr], idx: PtrIdx) -> Option<&'static str> {
    match ptr_at_index(ptr_table, idx)? {
        Ptr::Str(s) => Some(s),
        other => panic!("pointer table entry {idx} is not a string: {other:?}"),
    }
}

pub fn blob_at_index(ptr_table: &[Ptr], idx: PtrIdx) -> Option<&'static [u8]> {
    match ptr_at_index(ptr_table, idx)? {
        Ptr::Blob(blob) => Some(blob),
        other => panic!("pointer table entry {idx} is not a blob: {other:?}"),
    }
}

pub fn static_at_index(
    ptr_table: &[Ptr],
    idx: PtrIdx,
) -> Option<&'static (dyn Any + Send + Sync)> {
    match ptr_at_index(ptr_table, idx)? {
        Ptr::Static(storage) => Some(storage),
        other => panic!("pointer table entry {idx} is not a static reference: {other:?}"),
    }
}
