use crate::metadata::PtrIdx;

/// Layout version of the records emitted by the translator. Records tagged with
/// any other value must not be read.
pub const METADATA_VERSION: u32 = 5;

/// Canonical "absent" pointer-table index. Any negative index is absent.
pub const NO_PTR: PtrIdx = -1;

// native identifiers of constructors
pub const CONSTRUCTOR_SELECTOR: &str = "init";
pub const CONSTRUCTOR_SELECTOR_PREFIX: &str = "initWith";

bitflags::bitflags! {
    /// `java.lang.reflect.Modifier` bits as stored in the records.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifier: u16 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const BRIDGE = 0x0040;
        const TRANSIENT = 0x0080;
        const VARARGS = 0x0080;
        const NATIVE = 0x0100;
        const INTERFACE = 0x0200;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
        const SYNTHETIC = 0x1000;
        const ANNOTATION = 0x2000;
        const ENUM = 0x4000;
        const MANDATED = 0x8000;
    }
}

impl Modifier {
    pub fn is_constant(self) -> bool {
        self.contains(Modifier::STATIC | Modifier::FINAL)
    }
}
