//! Hand-written records in the shape the translator emits.

use crate::{
    consts::{METADATA_VERSION, Modifier, NO_PTR},
    metadata::{ClassInfo, EnclosingMethodInfo, FieldInfo, MethodInfo, Ptr, RawValue},
};

const PUBLIC: u16 = Modifier::PUBLIC.bits();
const PRIVATE: u16 = Modifier::PRIVATE.bits();
const STATIC: u16 = Modifier::STATIC.bits();
const FINAL: u16 = Modifier::FINAL.bits();

const fn method(selector: &'static str, return_type: &'static str, modifiers: u16) -> MethodInfo {
    MethodInfo {
        selector,
        return_type,
        modifiers,
        java_name_idx: NO_PTR,
        exceptions_idx: NO_PTR,
        generic_signature_idx: NO_PTR,
        annotations_idx: NO_PTR,
        param_annotations_idx: NO_PTR,
    }
}

const fn field(name: &'static str, type_desc: &'static str, modifiers: u16) -> FieldInfo {
    FieldInfo {
        name,
        type_desc,
        constant_value: RawValue::ZERO,
        modifiers,
        java_name_idx: NO_PTR,
        static_ref_idx: NO_PTR,
        generic_signature_idx: NO_PTR,
        annotations_idx: NO_PTR,
    }
}

const fn class(type_name: &'static str, package_name: Option<&'static str>) -> ClassInfo {
    ClassInfo {
        version: METADATA_VERSION,
        type_name,
        package_name,
        enclosing_name: None,
        modifiers: PUBLIC,
        methods: &[],
        fields: &[],
        inner_classes_idx: NO_PTR,
        enclosing_method: None,
        generic_signature: None,
        annotations_idx: NO_PTR,
        ptr_table: &[],
    }
}

static COUNT_STORAGE: i32 = 42;

pub(crate) static FOO_PTRS: [Ptr; 11] = [
    Ptr::Str("size"),
    Ptr::Str("Ljava/io/IOException;Ljava/lang/InterruptedException;"),
    Ptr::Str("<T:Ljava/lang/Object;>(TT;)V"),
    Ptr::Blob(&[0xca, 0xfe]),
    Ptr::Str("Lcom/example/Foo$Bar;"),
    Ptr::Static(&COUNT_STORAGE),
    Ptr::Str("hello"),
    Ptr::Str("length"),
    Ptr::Str("Ljava/util/List<TT;>;"),
    Ptr::Blob(&[1, 2, 3]),
    Ptr::Str("read"),
];

pub(crate) static FOO_METHODS: [MethodInfo; 6] = [
    method("init", "V", PUBLIC),
    method("initWithInt:", "V", PUBLIC),
    method("size", "I", PUBLIC),
    MethodInfo {
        java_name_idx: 7,
        ..method("lengthWithInt:", "J", PUBLIC | STATIC)
    },
    MethodInfo {
        java_name_idx: 10,
        exceptions_idx: 1,
        generic_signature_idx: 2,
        annotations_idx: 3,
        param_annotations_idx: 9,
        ..method("readWithId:", "Ljava/lang/String;", PUBLIC)
    },
    MethodInfo {
        java_name_idx: 10,
        ..method("readWithInt:", "[[I", PUBLIC)
    },
];

pub(crate) static FOO_FIELDS: [FieldInfo; 8] = [
    FieldInfo {
        java_name_idx: 0,
        ..field("size_", "I", PRIVATE)
    },
    FieldInfo {
        constant_value: RawValue::long(1 << 40),
        ..field("MAX", "J", PUBLIC | STATIC | FINAL)
    },
    FieldInfo {
        constant_value: RawValue::ptr_idx(6),
        ..field("GREETING", "Ljava/lang/String;", PUBLIC | STATIC | FINAL)
    },
    FieldInfo {
        static_ref_idx: 5,
        ..field("count", "I", PUBLIC | STATIC)
    },
    FieldInfo {
        generic_signature_idx: 8,
        annotations_idx: 3,
        ..field("items", "Ljava/util/List;", PRIVATE)
    },
    FieldInfo {
        constant_value: RawValue::boolean(true),
        ..field("flag", "Z", STATIC | FINAL)
    },
    FieldInfo {
        constant_value: RawValue::double(0.5),
        ..field("ratio", "D", STATIC | FINAL)
    },
    FieldInfo {
        constant_value: RawValue::char(b'x' as u16),
        ..field("initial", "C", STATIC | FINAL)
    },
];

pub(crate) static FOO: ClassInfo = ClassInfo {
    methods: &FOO_METHODS,
    fields: &FOO_FIELDS,
    inner_classes_idx: 4,
    generic_signature: Some("<T:Ljava/lang/Object;>Ljava/lang/Object;"),
    annotations_idx: 3,
    ptr_table: &FOO_PTRS,
    ..class("Foo", Some("com.example"))
};

pub(crate) static BAR: ClassInfo = ClassInfo {
    enclosing_name: Some("Foo"),
    ..class("Bar", Some("com.example"))
};

static ENCLOSING: EnclosingMethodInfo = EnclosingMethodInfo {
    type_name: "com.example.Foo",
    selector: "runWithInt:",
};

pub(crate) static LOCAL: ClassInfo = ClassInfo {
    modifiers: 0,
    enclosing_method: Some(&ENCLOSING),
    ..class("Local", None)
};

pub(crate) static EMPTY: ClassInfo = class("Empty", Some(""));

pub(crate) static STALE: ClassInfo = ClassInfo {
    version: METADATA_VERSION - 1,
    ..class("Stale", None)
};
