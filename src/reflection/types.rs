use tracing::debug;

use crate::{
    descriptor::{self, PrimitiveType, TypeDescriptor},
    error::{ReflectError, ReflectResult},
    runtime::ClassRegistry,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType<C> {
    Primitive(PrimitiveType),
    Class(C),
    Array(Box<JavaType<C>>),
}

impl<C> JavaType<C> {
    pub fn dimensions(&self) -> usize {
        match self {
            JavaType::Array(component) => 1 + component.dimensions(),
            _ => 0,
        }
    }

    pub fn element_type(&self) -> &JavaType<C> {
        match self {
            JavaType::Array(component) => component.element_type(),
            _ => self,
        }
    }

    pub fn as_class(&self) -> Option<&C> {
        match self {
            JavaType::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<PrimitiveType> {
        match self {
            JavaType::Primitive(primitive) => Some(*primitive),
            _ => None,
        }
    }

    pub fn descriptor<R: ClassRegistry<Class = C>>(&self, registry: &R) -> String {
        match self {
            JavaType::Primitive(primitive) => primitive.descriptor().to_string(),
            JavaType::Class(class) => {
                let name = registry.binary_name(class).replace('.', "/");
                if name.starts_with('[') {
                    name
                } else {
                    format!("L{name};")
                }
            }
            JavaType::Array(component) => format!("[{}", component.descriptor(registry)),
        }
    }
}

/// Parses and resolves a single descriptor. Class descriptors are looked up by
/// binary name, so `Lcom/example/Foo;` resolves `com.example.Foo`.
pub fn parse_type<R: ClassRegistry>(
    registry: &R,
    descriptor: &str,
) -> ReflectResult<JavaType<R::Class>> {
    let parsed = descriptor::parse_type_descriptor(descriptor)?;
    resolve_type(registry, &parsed)
}

pub fn parse_type_list<R: ClassRegistry>(
    registry: &R,
    list: &str,
) -> ReflectResult<Vec<JavaType<R::Class>>> {
    descriptor::split_descriptor_list(list)?
        .iter()
        .map(|ty| resolve_type(registry, ty))
        .collect()
}

/// Resolves a descriptor to the class object representing it: primitives by
/// keyword, arrays by their `[`-prefixed binary name.
pub fn class_for_descriptor<R: ClassRegistry>(
    registry: &R,
    descriptor: &str,
) -> ReflectResult<R::Class> {
    let parsed = descriptor::parse_type_descriptor(descriptor)?;
    lookup_class(registry, &binary_name_of(&parsed))
}

pub fn parse_class_list<R: ClassRegistry>(
    registry: &R,
    list: &str,
) -> ReflectResult<Vec<R::Class>> {
    descriptor::split_descriptor_list(list)?
        .iter()
        .map(|ty| lookup_class(registry, &binary_name_of(ty)))
        .collect()
}

fn resolve_type<R: ClassRegistry>(
    registry: &R,
    ty: &TypeDescriptor<'_>,
) -> ReflectResult<JavaType<R::Class>> {
    Ok(match ty {
        TypeDescriptor::Primitive(primitive) => JavaType::Primitive(*primitive),
        TypeDescriptor::Object(internal_name) => {
            JavaType::Class(lookup_class(registry, &internal_name.replace('/', "."))?)
        }
        TypeDescriptor::Array(component) => {
            JavaType::Array(Box::new(resolve_type(registry, component)?))
        }
    })
}

fn binary_name_of(ty: &TypeDescriptor<'_>) -> String {
    match ty {
        TypeDescriptor::Primitive(primitive) => primitive.name().to_string(),
        TypeDescriptor::Object(internal_name) => internal_name.replace('/', "."),
        TypeDescriptor::Array(_) => ty.to_string().replace('/', "."),
    }
}

fn lookup_class<R: ClassRegistry>(registry: &R, binary_name: &str) -> ReflectResult<R::Class> {
    registry.class_for_name(binary_name).ok_or_else(|| {
        debug!(class = binary_name, "type not found");
        ReflectError::TypeNotFound(binary_name.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::ClassTable;

    fn registry() -> ClassTable {
        let table = ClassTable::new();
        table.define_primitives();
        table.define("com.example.Foo");
        table.define("java.lang.String");
        table.define("[I");
        table
    }

    #[test]
    fn test_primitive_round_trip() {
        let table = registry();
        for desc in ["Z", "B", "C", "S", "I", "J", "F", "D", "V"] {
            let ty = parse_type(&table, desc).unwrap();
            assert!(ty.as_primitive().is_some());
            assert_eq!(ty.descriptor(&table), desc);
        }
    }

    #[test]
    fn test_int_matrix() {
        let table = registry();
        let ty = parse_type(&table, "[[I").unwrap();
        assert_eq!(ty.dimensions(), 2);
        assert_eq!(ty.element_type().as_primitive(), Some(PrimitiveType::Int));
        assert_eq!(ty.descriptor(&table), "[[I");
    }

    #[test]
    fn test_class_descriptor() {
        let table = registry();
        let ty = parse_type(&table, "Lcom/example/Foo;").unwrap();
        assert_eq!(ty.dimensions(), 0);
        assert_eq!(ty.as_class().map(|c| c.name()), Some("com.example.Foo"));
        assert_eq!(ty.descriptor(&table), "Lcom/example/Foo;");

        let ty = parse_type(&table, "[Lcom/example/Foo;").unwrap();
        assert_eq!(ty.dimensions(), 1);
        assert_eq!(
            ty.element_type().as_class().map(|c| c.name()),
            Some("com.example.Foo")
        );
    }

    #[test]
    fn test_type_not_found() {
        let table = registry();
        assert_eq!(
            parse_type(&table, "Lcom/example/Missing;"),
            Err(ReflectError::TypeNotFound("com.example.Missing".to_string()))
        );
        assert_eq!(
            parse_type(&table, "[[Lcom/example/Missing;"),
            Err(ReflectError::TypeNotFound("com.example.Missing".to_string()))
        );
    }

    #[test]
    fn test_malformed() {
        let table = registry();
        assert_eq!(
            parse_type(&table, "Q"),
            Err(ReflectError::MalformedDescriptor("Q".to_string()))
        );
    }

    #[test]
    fn test_type_list() {
        let table = registry();
        let types = parse_type_list(&table, "ILjava/lang/String;[J").unwrap();
        assert_eq!(types.len(), 3);
        assert_eq!(types[0], JavaType::Primitive(PrimitiveType::Int));
        assert_eq!(
            types[1].as_class().map(|c| c.name()),
            Some("java.lang.String")
        );
        assert_eq!(types[2].dimensions(), 1);

        // recomputed on every call
        assert_eq!(parse_type_list(&table, "ILjava/lang/String;[J").unwrap(), types);
        assert!(parse_type_list(&table, "").unwrap().is_empty());
        assert!(parse_type_list(&table, "ILcom/example/Missing;").is_err());
    }

    #[test]
    fn test_class_for_descriptor() {
        let table = registry();
        assert_eq!(class_for_descriptor(&table, "I").unwrap().name(), "int");
        assert_eq!(class_for_descriptor(&table, "[I").unwrap().name(), "[I");
        assert_eq!(
            class_for_descriptor(&table, "Lcom/example/Foo;").unwrap().name(),
            "com.example.Foo"
        );
        assert_eq!(
            class_for_descriptor(&table, "[Lcom/example/Foo;"),
            Err(ReflectError::TypeNotFound("[Lcom.example.Foo;".to_string()))
        );
    }

    #[test]
    fn test_class_list() {
        let table = registry();
        let classes = parse_class_list(&table, "Lcom/example/Foo;Ljava/lang/String;").unwrap();
        let names: Vec<_> = classes.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["com.example.Foo", "java.lang.String"]);
    }
}
