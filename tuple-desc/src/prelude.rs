//! Prelude exposes all the types for `tuple-desc` crate.

pub use crate::desc::{Iter, TupleDesc};
pub use crate::error::{ConstructionError, SchemaError, SchemaResult};
pub use crate::field::FieldDesc;
pub use crate::schema::{SchemaField, TupleSchema};
pub use crate::types::{FieldType, STRING_LEN};
pub use tuple_desc_macros::TupleSchema;
