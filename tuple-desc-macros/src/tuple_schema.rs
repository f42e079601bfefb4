use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use syn::ext::IdentExt as _;
use syn::{DeriveInput, Field, Fields};

/// Generate implementation of `TupleSchema` trait.
pub fn tuple_schema(
    DeriveInput {
        ident,
        data,
        generics,
        ..
    }: DeriveInput,
) -> TokenStream {
    let syn::Data::Struct(struct_data) = data else {
        panic!("Cannot derive TupleSchema for {ident}; it can only be derived for structs");
    };
    if struct_data.fields.is_empty() {
        panic!("Cannot derive TupleSchema for {ident}; a tuple needs at least one field");
    }

    let fields = match &struct_data.fields {
        Fields::Named(named) => named.named.iter().map(impl_named_field).collect::<Vec<_>>(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .map(impl_anonymous_field)
            .collect::<Vec<_>>(),
        Fields::Unit => unreachable!("unit structs have no fields"),
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote::quote! {
        impl #impl_generics ::tuple_desc::TupleSchema for #ident #ty_generics #where_clause {
            fn tuple_desc() -> ::tuple_desc::SchemaResult<::tuple_desc::TupleDesc> {
                ::tuple_desc::TupleDesc::from_fields(::std::vec![
                    #(#fields),*
                ])
            }
        }
    }
    .into()
}

/// Generate a named `FieldDesc` for a struct field.
fn impl_named_field(field: &Field) -> TokenStream2 {
    let field_ty = &field.ty;
    // `r#type` is stored as `type`
    let name = field
        .ident
        .as_ref()
        .map(|ident| ident.unraw().to_string())
        .expect("named fields have an identifier");

    quote::quote! {
        ::tuple_desc::FieldDesc::new(
            <#field_ty as ::tuple_desc::SchemaField>::FIELD_TYPE,
            ::std::option::Option::Some(::std::string::String::from(#name)),
        )
    }
}

/// Generate an anonymous `FieldDesc` for a tuple struct field.
fn impl_anonymous_field(field: &Field) -> TokenStream2 {
    let field_ty = &field.ty;

    quote::quote! {
        ::tuple_desc::FieldDesc::anonymous(<#field_ty as ::tuple_desc::SchemaField>::FIELD_TYPE)
    }
}
