use std::fmt::{Debug, Formatter};

use crate::metadata::{Ptr, PtrIdx, ptr_at_index};

/// Inline storage of a field's compile-time constant.
///
/// No discriminant is stored: the field's type descriptor says which member is
/// active. Reference constants are stored as an index into the owning class's
/// pointer table.
#[repr(C)]
#[derive(Copy, Clone)]
pub union RawValue {
    as_byte: i8,
    as_char: u16,
    as_short: i16,
    as_int: i32,
    as_long: i64,
    as_float: f32,
    as_double: f64,
    as_bool: u8,
    as_ptr_idx: PtrIdx,
}

// Every constructor starts from ZERO, so all eight bytes are always initialized
// and each member accepts any bit pattern.
impl RawValue {
    pub const ZERO: RawValue = RawValue { as_long: 0 };

    pub const fn byte(v: i8) -> Self {
        let mut raw = Self::ZERO;
        raw.as_byte = v;
        raw
    }

    pub const fn char(v: u16) -> Self {
        let mut raw = Self::ZERO;
        raw.as_char = v;
        raw
    }

    pub const fn short(v: i16) -> Self {
        let mut raw = Self::ZERO;
        raw.as_short = v;
        raw
    }

    pub const fn int(v: i32) -> Self {
        let mut raw = Self::ZERO;
        raw.as_int = v;
        raw
    }

    pub const fn long(v: i64) -> Self {
        RawValue { as_long: v }
    }

    pub const fn float(v: f32) -> Self {
        let mut raw = Self::ZERO;
        raw.as_float = v;
        raw
    }

    pub const fn double(v: f64) -> Self {
        RawValue { as_double: v }
    }

    pub const fn boolean(v: bool) -> Self {
        let mut raw = Self::ZERO;
        raw.as_bool = v as u8;
        raw
    }

    pub const fn ptr_idx(idx: PtrIdx) -> Self {
        let mut raw = Self::ZERO;
        raw.as_ptr_idx = idx;
        raw
    }

    /// Reads the member selected by the first character of `type_desc`.
    /// Returns `None` for descriptors that cannot carry a constant.
    pub fn decode(&self, type_desc: &str, ptr_table: &[Ptr]) -> Option<ConstValue> {
        // SAFETY: all bytes are initialized and every member is plain data
        let value = unsafe {
            match type_desc.as_bytes().first().copied()? {
                b'Z' => ConstValue::Boolean(self.as_bool != 0),
                b'B' => ConstValue::Byte(self.as_byte),
                b'C' => ConstValue::Char(self.as_char),
                b'S' => ConstValue::Short(self.as_short),
                b'I' => ConstValue::Int(self.as_int),
                b'J' => ConstValue::Long(self.as_long),
                b'F' => ConstValue::Float(self.as_float),
                b'D' => ConstValue::Double(self.as_double),
                b'L' | b'[' => ConstValue::Reference(ptr_at_index(ptr_table, self.as_ptr_idx)),
                _ => return None,
            }
        };
        Some(value)
    }
}

impl Default for RawValue {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Debug for RawValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // SAFETY: see `decode`
        write!(f, "RawValue({:#018x})", unsafe { self.as_long })
    }
}

#[derive(Debug, Clone, Copy)]
pub enum ConstValue {
    Boolean(bool),
    Byte(i8),
    Char(u16),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Reference(Option<Ptr>),
}

impl ConstValue {
    pub fn as_str(&self) -> Option<&'static str> {
        match self {
            ConstValue::Reference(Some(Ptr::Str(s))) => Some(*s),
            _ => None,
        }
    }
}
