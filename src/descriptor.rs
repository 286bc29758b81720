use std::fmt::{Display, Formatter, Write};

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, one_of},
    combinator::{all_consuming, map, map_opt},
    multi::many0,
    sequence::{delimited, preceded},
};

use crate::error::{ReflectError, ReflectResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
    Void,
}

impl PrimitiveType {
    pub fn from_descriptor(ch: char) -> Option<PrimitiveType> {
        Some(match ch {
            'Z' => PrimitiveType::Boolean,
            'B' => PrimitiveType::Byte,
            'C' => PrimitiveType::Char,
            'S' => PrimitiveType::Short,
            'I' => PrimitiveType::Int,
            'J' => PrimitiveType::Long,
            'F' => PrimitiveType::Float,
            'D' => PrimitiveType::Double,
            'V' => PrimitiveType::Void,
            _ => return None,
        })
    }

    pub fn descriptor(self) -> char {
        match self {
            PrimitiveType::Boolean => 'Z',
            PrimitiveType::Byte => 'B',
            PrimitiveType::Char => 'C',
            PrimitiveType::Short => 'S',
            PrimitiveType::Int => 'I',
            PrimitiveType::Long => 'J',
            PrimitiveType::Float => 'F',
            PrimitiveType::Double => 'D',
            PrimitiveType::Void => 'V',
        }
    }

    /// Source-language keyword, also the binary name of the primitive's class.
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Byte => "byte",
            PrimitiveType::Char => "char",
            PrimitiveType::Short => "short",
            PrimitiveType::Int => "int",
            PrimitiveType::Long => "long",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Void => "void",
        }
    }
}

impl Display for PrimitiveType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed, not yet resolved, type descriptor borrowing from its source string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor<'a> {
    Primitive(PrimitiveType),
    /// internal name, e.g. `com/example/Foo`
    Object(&'a str),
    Array(Box<TypeDescriptor<'a>>),
}

impl TypeDescriptor<'_> {
    pub fn dimensions(&self) -> usize {
        match self {
            TypeDescriptor::Array(component) => 1 + component.dimensions(),
            _ => 0,
        }
    }

    pub fn element(&self) -> &Self {
        match self {
            TypeDescriptor::Array(component) => component.element(),
            _ => self,
        }
    }
}

impl Display for TypeDescriptor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeDescriptor::Primitive(primitive) => f.write_char(primitive.descriptor()),
            TypeDescriptor::Object(name) => write!(f, "L{name};"),
            TypeDescriptor::Array(component) => {
                f.write_char('[')?;
                component.fmt(f)
            }
        }
    }
}

/// Parses exactly one descriptor; trailing input is an error.
pub fn parse_type_descriptor(input: &str) -> ReflectResult<TypeDescriptor<'_>> {
    all_consuming(parse_type)
        .parse(input)
        .map(|(_, ty)| ty)
        .map_err(|_| ReflectError::MalformedDescriptor(input.to_string()))
}

/// Splits a concatenated run of descriptors, e.g. `ILjava/lang/String;[J`.
pub fn split_descriptor_list(input: &str) -> ReflectResult<Vec<TypeDescriptor<'_>>> {
    all_consuming(many0(parse_type))
        .parse(input)
        .map(|(_, list)| list)
        .map_err(|_| ReflectError::MalformedDescriptor(input.to_string()))
}

fn parse_type(input: &str) -> IResult<&str, TypeDescriptor<'_>> {
    alt((
        map(parse_void_type, TypeDescriptor::Primitive),
        parse_field_type,
    ))
    .parse(input)
}

fn parse_field_type(input: &str) -> IResult<&str, TypeDescriptor<'_>> {
    alt((
        map(parse_base_type, TypeDescriptor::Primitive),
        map(parse_object_type, TypeDescriptor::Object),
        map(parse_array_type, |component| {
            TypeDescriptor::Array(Box::new(component))
        }),
    ))
    .parse(input)
}

fn parse_base_type(input: &str) -> IResult<&str, PrimitiveType> {
    map_opt(one_of("ZBCSIJFD"), PrimitiveType::from_descriptor).parse(input)
}

fn parse_void_type(input: &str) -> IResult<&str, PrimitiveType> {
    map(char('V'), |_| PrimitiveType::Void).parse(input)
}

fn parse_object_type(input: &str) -> IResult<&str, &str> {
    delimited(char('L'), take_till1(|c| c == ';'), char(';')).parse(input)
}

// void is not a valid component
fn parse_array_type(input: &str) -> IResult<&str, TypeDescriptor<'_>> {
    preceded(char('['), parse_field_type).parse(input)
}
