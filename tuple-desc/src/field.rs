use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::FieldType;

/// Describes a single field (column) of a [`crate::TupleDesc`].
///
/// The name is optional (anonymous fields) and is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDesc {
    field_type: FieldType,
    name: Option<String>,
}

impl FieldDesc {
    /// Creates a new [`FieldDesc`] with the given type and optional name.
    pub fn new(field_type: FieldType, name: Option<String>) -> Self {
        Self { field_type, name }
    }

    /// Creates a new anonymous [`FieldDesc`].
    pub fn anonymous(field_type: FieldType) -> Self {
        Self::new(field_type, None)
    }

    /// Returns the type of the field.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Returns the name of the field, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns whether `other` has the same type as this field.
    ///
    /// Names are ignored: this is the comparison used by [`crate::TupleDesc`] equality.
    pub fn same_type(&self, other: &FieldDesc) -> bool {
        self.field_type == other.field_type
    }
}

impl fmt::Display for FieldDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.field_type,
            self.name.as_deref().unwrap_or("null")
        )
    }
}
