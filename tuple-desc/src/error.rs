use thiserror::Error;

/// The result type for tuple descriptor operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Tuple descriptor error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The descriptor could not be built from the provided fields.
    #[error("Construction error: {0}")]
    Construction(#[from] ConstructionError),
    /// Tried to access a field position outside of the descriptor.
    #[error("Field index {index} out of range (descriptor has {len} fields)")]
    IndexOutOfRange { index: usize, len: usize },
    /// No field matches the requested name; `None` if no name was provided at all.
    #[error("Field not found: {}", .0.as_deref().unwrap_or("<no name provided>"))]
    FieldNotFound(Option<String>),
    /// The given type name doesn't map to any [`crate::FieldType`].
    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),
    /// The requested operation is not supported by tuple descriptors.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// An enum representing the reasons a tuple descriptor can't be constructed.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionError {
    /// A descriptor must contain at least one field.
    #[error("At least one field is required")]
    Empty,
    /// Types and names were provided with different lengths.
    #[error("The number of types ({types}) and the number of names ({names}) are not equal")]
    LengthMismatch { types: usize, names: usize },
}
