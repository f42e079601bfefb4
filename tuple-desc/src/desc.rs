//! This module exposes [`TupleDesc`], the schema of a relation.

mod iter;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::iter::Iter;
use crate::error::{ConstructionError, SchemaError, SchemaResult};
use crate::field::FieldDesc;
use crate::types::FieldType;

/// Describes the schema of a tuple: an ordered, non-empty list of typed and optionally named fields.
///
/// A [`TupleDesc`] is immutable once built; [`TupleDesc::merge`] produces a new descriptor
/// instead of extending an existing one.
///
/// Two descriptors are equal when they have the same number of fields and the same type at
/// every position. Field names are not considered.
///
/// ```rust
/// use tuple_desc::prelude::*;
///
/// let desc = TupleDesc::anonymous(vec![FieldType::Int]).unwrap();
/// let renamed = TupleDesc::new(vec![FieldType::Int], vec![Some("id".to_string())]).unwrap();
/// assert!(desc == renamed);
/// ```
///
/// A descriptor can only be compared with another descriptor:
///
/// ```rust,compile_fail
/// use tuple_desc::prelude::*;
///
/// let desc = TupleDesc::anonymous(vec![FieldType::Int]).unwrap();
/// let _ = desc == 1i32;
/// ```
///
/// [`TupleDesc`] doesn't implement [`std::hash::Hash`], so it can't be used as a key of hashed
/// collections; see [`TupleDesc::hash_code`].
///
/// ```rust,compile_fail
/// use std::collections::HashSet;
///
/// use tuple_desc::prelude::*;
///
/// let desc = TupleDesc::anonymous(vec![FieldType::Int]).unwrap();
/// HashSet::<TupleDesc>::new().insert(desc);
/// ```
///
/// With serde, a descriptor is stored as the list of its fields; an empty list is rejected
/// when deserializing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldDesc>", into = "Vec<FieldDesc>")]
pub struct TupleDesc {
    fields: Box<[FieldDesc]>,
}

impl TupleDesc {
    /// Creates a new [`TupleDesc`] pairing each type with the name at the same position.
    ///
    /// Names may be `None`. Fails if `types` is empty or if `types` and `names` have different lengths.
    pub fn new(types: Vec<FieldType>, names: Vec<Option<String>>) -> SchemaResult<Self> {
        if types.is_empty() {
            log::debug!("rejecting tuple descriptor with no fields");
            return Err(ConstructionError::Empty.into());
        }
        if types.len() != names.len() {
            log::debug!(
                "rejecting tuple descriptor with {} types and {} names",
                types.len(),
                names.len()
            );
            return Err(ConstructionError::LengthMismatch {
                types: types.len(),
                names: names.len(),
            }
            .into());
        }

        let fields = types
            .into_iter()
            .zip(names)
            .map(|(field_type, name)| FieldDesc::new(field_type, name))
            .collect::<Vec<_>>();

        Self::from_fields(fields)
    }

    /// Creates a new [`TupleDesc`] made of anonymous (unnamed) fields of the given types.
    pub fn anonymous(types: Vec<FieldType>) -> SchemaResult<Self> {
        let names = vec![None; types.len()];
        Self::new(types, names)
    }

    /// Creates a new [`TupleDesc`] from already assembled fields.
    pub fn from_fields(fields: Vec<FieldDesc>) -> SchemaResult<Self> {
        if fields.is_empty() {
            log::debug!("rejecting tuple descriptor with no fields");
            return Err(ConstructionError::Empty.into());
        }

        log::debug!("created tuple descriptor with {} fields", fields.len());
        Ok(Self {
            fields: fields.into_boxed_slice(),
        })
    }

    /// Merges two descriptors into a new one, with the fields of `first` followed by the fields of `second`.
    ///
    /// Names are kept as they are, duplicates included.
    pub fn merge(first: &TupleDesc, second: &TupleDesc) -> TupleDesc {
        let fields = first
            .fields
            .iter()
            .chain(second.fields.iter())
            .cloned()
            .collect::<Box<[FieldDesc]>>();
        log::debug!(
            "merged tuple descriptors with {} and {} fields",
            first.num_fields(),
            second.num_fields()
        );

        TupleDesc { fields }
    }

    /// Returns the number of fields in this descriptor.
    pub fn num_fields(&self) -> usize {
        self.fields.len()
    }

    /// Returns the fields of this descriptor.
    pub fn fields(&self) -> &[FieldDesc] {
        &self.fields
    }

    /// Returns the field at position `index`.
    pub fn field(&self, index: usize) -> SchemaResult<&FieldDesc> {
        self.fields
            .get(index)
            .ok_or(SchemaError::IndexOutOfRange {
                index,
                len: self.fields.len(),
            })
    }

    /// Returns the (possibly absent) name of the field at position `index`.
    pub fn field_name(&self, index: usize) -> SchemaResult<Option<&str>> {
        self.field(index).map(FieldDesc::name)
    }

    /// Returns the type of the field at position `index`.
    pub fn field_type(&self, index: usize) -> SchemaResult<FieldType> {
        self.field(index).map(FieldDesc::field_type)
    }

    /// Returns the index of the first field named `name`.
    ///
    /// Anonymous fields never match. Fails with [`SchemaError::FieldNotFound`] if `name` is `None`
    /// or if no field has that name.
    pub fn field_name_to_index<'a>(&self, name: impl Into<Option<&'a str>>) -> SchemaResult<usize> {
        let Some(name) = name.into() else {
            return Err(SchemaError::FieldNotFound(None));
        };

        let index = self
            .fields
            .iter()
            .position(|field| field.name() == Some(name));
        log::trace!("field {name} resolved to index {index:?}");

        index.ok_or_else(|| SchemaError::FieldNotFound(Some(name.to_string())))
    }

    /// Returns the size in bytes of tuples described by this descriptor.
    ///
    /// Tuples of a given descriptor always have the same size.
    pub fn size(&self) -> usize {
        self.fields
            .iter()
            .map(|field| field.field_type().size())
            .sum()
    }

    /// Returns an iterator over the fields of this descriptor.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.fields)
    }

    /// Hashing tuple descriptors is not supported; this always returns [`SchemaError::UnsupportedOperation`].
    pub fn hash_code(&self) -> SchemaResult<u64> {
        Err(SchemaError::UnsupportedOperation("hash_code"))
    }
}

impl PartialEq for TupleDesc {
    fn eq(&self, other: &Self) -> bool {
        self.num_fields() == other.num_fields()
            && self
                .fields
                .iter()
                .zip(other.fields.iter())
                .all(|(a, b)| a.same_type(b))
    }
}

impl Eq for TupleDesc {}

impl TryFrom<Vec<FieldDesc>> for TupleDesc {
    type Error = SchemaError;

    fn try_from(fields: Vec<FieldDesc>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<TupleDesc> for Vec<FieldDesc> {
    fn from(desc: TupleDesc) -> Self {
        desc.fields.into_vec()
    }
}

impl<'a> IntoIterator for &'a TupleDesc {
    type Item = &'a FieldDesc;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for TupleDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in self.iter() {
            write!(f, "{field}, ")?;
        }
        write!(f, "{} Fields in all", self.num_fields())
    }
}
