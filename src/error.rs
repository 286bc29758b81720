use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// Producer and consumer disagree on the record layout.
    #[error("metadata of {type_name} has version {found}, expected {expected}")]
    VersionMismatch {
        type_name: &'static str,
        expected: u32,
        found: u32,
    },
    #[error("malformed type descriptor \"{0}\"")]
    MalformedDescriptor(String),
    #[error("type not found: {0}")]
    TypeNotFound(String),
}

pub type ReflectResult<T> = ::std::result::Result<T, ReflectError>;
