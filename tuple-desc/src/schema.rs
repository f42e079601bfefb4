use crate::desc::TupleDesc;
use crate::error::SchemaResult;
use crate::types::FieldType;

/// A Rust type which can be stored as a single tuple field.
pub trait SchemaField {
    /// The [`FieldType`] values of this type are stored as.
    const FIELD_TYPE: FieldType;
}

impl SchemaField for i32 {
    const FIELD_TYPE: FieldType = FieldType::Int;
}

impl SchemaField for String {
    const FIELD_TYPE: FieldType = FieldType::String;
}

/// A type whose layout can be described by a [`TupleDesc`].
///
/// Usually implemented with `#[derive(TupleSchema)]`:
///
/// ```rust
/// use tuple_desc::prelude::*;
///
/// #[derive(TupleSchema)]
/// struct Account {
///     id: i32,
///     owner: String,
/// }
///
/// let desc = Account::tuple_desc().unwrap();
/// assert_eq!(desc.to_string(), "INT_TYPE(id), STRING_TYPE(owner), 2 Fields in all");
/// ```
///
/// The derive only accepts structs with at least one field, whose types implement [`SchemaField`].
///
/// ```rust,compile_fail
/// use tuple_desc::prelude::*;
///
/// #[derive(TupleSchema)]
/// enum Kind {
///     A,
/// }
/// ```
///
/// ```rust,compile_fail
/// use tuple_desc::prelude::*;
///
/// #[derive(TupleSchema)]
/// struct Unit;
/// ```
///
/// ```rust,compile_fail
/// use tuple_desc::prelude::*;
///
/// #[derive(TupleSchema)]
/// struct Empty {}
/// ```
///
/// ```rust,compile_fail
/// use tuple_desc::prelude::*;
///
/// #[derive(TupleSchema)]
/// struct Measure {
///     value: f64,
/// }
///
/// let _ = Measure::tuple_desc();
/// ```
pub trait TupleSchema {
    /// Returns the [`TupleDesc`] describing this type.
    fn tuple_desc() -> SchemaResult<TupleDesc>;
}
