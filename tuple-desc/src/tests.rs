use crate::prelude::*;

/// A simple user table for testing purposes.
#[derive(Debug, Clone, PartialEq, Eq, TupleSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
}

/// A post table referencing [`User`] by id.
#[derive(Debug, Clone, PartialEq, Eq, TupleSchema)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub r#type: i32,
    pub user_id: i32,
}

/// A row of anonymous fields, like the output of an aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TupleSchema)]
pub struct Count(pub i32, pub i32);

#[test]
fn test_should_derive_named_tuple_desc() {
    let desc = User::tuple_desc().expect("failed to derive tuple desc");

    assert_eq!(desc.num_fields(), 2);
    assert_eq!(desc.field_type(0).unwrap(), FieldType::Int);
    assert_eq!(desc.field_type(1).unwrap(), FieldType::String);
    assert_eq!(desc.field_name_to_index("name").unwrap(), 1);
    assert_eq!(desc.size(), 136);
    assert_eq!(
        desc.to_string(),
        "INT_TYPE(id), STRING_TYPE(name), 2 Fields in all"
    );
}

#[test]
fn test_should_derive_raw_identifier_names() {
    let desc = Post::tuple_desc().expect("failed to derive tuple desc");
    assert_eq!(desc.field_name(2).unwrap(), Some("type"));
    assert_eq!(desc.field_name_to_index("user_id").unwrap(), 3);
}

#[test]
fn test_should_derive_anonymous_tuple_desc() {
    let desc = Count::tuple_desc().expect("failed to derive tuple desc");
    assert_eq!(desc, TupleDesc::anonymous(vec![FieldType::Int; 2]).unwrap());
    assert!(desc.iter().all(|field| field.name().is_none()));
    assert_eq!(
        desc.field_name_to_index("0").unwrap_err(),
        SchemaError::FieldNotFound(Some("0".to_string()))
    );
}

#[test]
fn test_should_merge_for_join() {
    let users = User::tuple_desc().unwrap();
    let posts = Post::tuple_desc().unwrap();

    let joined = TupleDesc::merge(&posts, &users);
    assert_eq!(joined.num_fields(), posts.num_fields() + users.num_fields());
    assert_eq!(joined.size(), posts.size() + users.size());
    // both sides have an `id`; the left one wins the lookup
    assert_eq!(joined.field_name_to_index("id").unwrap(), 0);
    assert_eq!(joined.field_name(4).unwrap(), Some("id"));
    assert_eq!(joined.field_type(5).unwrap(), FieldType::String);
}

#[test]
fn test_should_treat_renamed_schemas_as_compatible() {
    let users = User::tuple_desc().unwrap();
    let renamed = TupleDesc::new(
        vec![FieldType::Int, FieldType::String],
        vec![Some("user_id".to_string()), Some("user_name".to_string())],
    )
    .unwrap();

    assert_eq!(users, renamed);
    assert_ne!(users, Post::tuple_desc().unwrap());
    assert!(renamed.field_name_to_index("id").is_err());
}
