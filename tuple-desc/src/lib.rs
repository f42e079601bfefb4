#![crate_name = "tuple_desc"]
#![crate_type = "lib"]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Tuple Desc
//!
//! This crate exposes [`TupleDesc`], the immutable schema descriptor of a relation in a
//! tuple-oriented database engine.
//!
//! A [`TupleDesc`] is an ordered, non-empty list of [`FieldDesc`]s, each one carrying a
//! [`FieldType`] and an optional name. Tuple storage uses it to lay out fixed-size records,
//! the catalog keeps one per table and query operators compose them with [`TupleDesc::merge`].
//!
//! ```rust
//! use tuple_desc::prelude::*;
//!
//! let users = TupleDesc::new(
//!     vec![FieldType::Int, FieldType::String],
//!     vec![Some("id".to_string()), Some("name".to_string())],
//! )
//! .unwrap();
//! assert_eq!(users.size(), 136);
//! assert_eq!(users.field_name_to_index("name").unwrap(), 1);
//! assert_eq!(users.to_string(), "INT_TYPE(id), STRING_TYPE(name), 2 Fields in all");
//! ```

#![doc(html_playground_url = "https://play.rust-lang.org")]

// makes the crate accessible as `tuple_desc` in macros
extern crate self as tuple_desc;

mod desc;
mod error;
mod field;
pub mod prelude;
mod schema;
#[cfg(test)]
mod tests;
mod types;

pub use tuple_desc_macros::TupleSchema;

pub use self::desc::{Iter, TupleDesc};
pub use self::error::{ConstructionError, SchemaError, SchemaResult};
pub use self::field::FieldDesc;
pub use self::schema::{SchemaField, TupleSchema};
pub use self::types::{FieldType, STRING_LEN};
