#![crate_name = "tuple_desc_macros"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Macros and derive for tuple-desc
//!
//! This crate provides procedural macros to automatically implement traits
//! exposed by `tuple-desc`.
//!
//! ## Provided Derive Macros
//!
//! - `TupleSchema`: Automatically implements the `TupleSchema` trait for structs.
//!

#![doc(html_playground_url = "https://play.rust-lang.org")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod tuple_schema;

/// Automatically implements the `TupleSchema` trait for a struct.
///
/// The generated `tuple_desc()` builds a `TupleDesc` with one field per struct field, in
/// declaration order. The type of each field is taken from its `SchemaField::FIELD_TYPE`.
///
/// - Structs with named fields produce named tuple fields, using the field identifiers.
/// - Tuple structs produce anonymous tuple fields.
///
/// # What the macro generates
///
/// Given a struct like:
///
/// ```rust,ignore
/// #[derive(TupleSchema)]
/// struct User {
///     id: i32,
///     name: String,
/// }
/// ```
///
/// The macro expands into:
///
/// ```rust,ignore
/// impl TupleSchema for User {
///     fn tuple_desc() -> SchemaResult<TupleDesc> {
///         TupleDesc::from_fields(vec![
///             FieldDesc::new(<i32 as SchemaField>::FIELD_TYPE, Some(String::from("id"))),
///             FieldDesc::new(<String as SchemaField>::FIELD_TYPE, Some(String::from("name"))),
///         ])
///     }
/// }
/// ```
///
/// # Errors
///
/// The macro will fail to expand if:
///
/// - The item is not a struct
/// - The struct has no fields
/// - A field type does not implement `SchemaField`
#[proc_macro_derive(TupleSchema)]
pub fn derive_tuple_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    self::tuple_schema::tuple_schema(input)
}
