use std::collections::HashSet;

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use proc_macro_error::abort;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{parse_macro_input, DeriveInput, LitStr, Type};

#[derive(FromDeriveInput)]
#[darling(attributes(insert), supports(struct_named))]
struct RecordInput {
    ident: Ident,
    generics: syn::Generics,
    data: ast::Data<(), RecordField>,
}

#[derive(FromField)]
#[darling(attributes(insert))]
struct RecordField {
    ident: Option<Ident>,
    ty: Type,
    #[darling(default = "editable_by_default")]
    editable: bool,
    #[darling(default)]
    rename: Option<String>,
    #[darling(default)]
    display: bool,
}

fn editable_by_default() -> bool {
    true
}

impl RecordField {
    fn ident(&self) -> &Ident {
        match &self.ident {
            Some(ident) => ident,
            None => abort!(self.ty.span(), "Record fields must be named"),
        }
    }

    fn column(&self) -> String {
        match &self.rename {
            Some(column) => column.clone(),
            None => self.ident().unraw().to_string(),
        }
    }
}

pub fn derive_record_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let input = match RecordInput::from_derive_input(&input) {
        Ok(input) => input,
        Err(e) => return e.write_errors().into(),
    };

    record_impl(&input).into()
}

fn record_impl(input: &RecordInput) -> TokenStream2 {
    if !input.generics.params.is_empty() {
        abort!(input.generics.span(), "Record cannot be derived for generic types");
    }

    let fields = match &input.data {
        ast::Data::Struct(fields) => &fields.fields,
        ast::Data::Enum(_) => abort!(input.ident.span(), "Record can only be derived for structs"),
    };

    let mut seen = HashSet::new();
    for field in fields {
        let column = field.column();
        if !seen.insert(column.clone()) {
            abort!(field.ident().span(), "duplicate column `{}`", column);
        }
    }

    let ident = &input.ident;
    let record_name = LitStr::new(&ident.unraw().to_string(), Span::call_site());

    let descriptors = fields.iter()
        .map(field_descriptor)
        .collect::<Vec<_>>();

    // non-editable fields never reach a statement, so their types are
    // never asked for a value
    let value_arms = fields.iter()
        .filter(|field| field.editable)
        .map(field_value_arm)
        .collect::<TokenStream2>();

    quote! {
        impl ::sqlbulk::Record for #ident {
            fn descriptor() -> &'static ::sqlbulk::RecordDescriptor {
                const FIELDS: &[::sqlbulk::FieldDescriptor] = &[ #(#descriptors),* ];
                static DESCRIPTOR: ::sqlbulk::RecordDescriptor =
                    ::sqlbulk::RecordDescriptor::new(#record_name, FIELDS);
                &DESCRIPTOR
            }

            fn field_value(&self, column: &str) -> ::core::option::Option<::sqlbulk::SqlValue<'_>> {
                match column {
                    #value_arms
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}

fn field_descriptor(field: &RecordField) -> TokenStream2 {
    let column = LitStr::new(&field.column(), field.ident().span());
    let ty = &field.ty;
    let editable = field.editable;

    let (semantic_type, nullable) = if !field.editable {
        (quote! { ::sqlbulk::SemanticType::Other }, quote! { false })
    } else if field.display {
        let nullable = is_option(ty);
        (quote! { ::sqlbulk::SemanticType::Other }, quote! { #nullable })
    } else {
        (
            quote! { <#ty as ::sqlbulk::ToSqlValue>::SEMANTIC_TYPE },
            quote! { <#ty as ::sqlbulk::ToSqlValue>::NULLABLE },
        )
    };

    quote! {
        ::sqlbulk::FieldDescriptor::new(#column, #semantic_type, #nullable, #editable)
    }
}

fn field_value_arm(field: &RecordField) -> TokenStream2 {
    let column = LitStr::new(&field.column(), field.ident().span());
    let ident = field.ident();

    let value = match (field.display, is_option(&field.ty)) {
        (false, _) => quote! {
            ::sqlbulk::ToSqlValue::to_sql_value(&self.#ident)
        },
        (true, false) => quote! {
            ::sqlbulk::SqlValue::other(::std::string::ToString::to_string(&self.#ident))
        },
        (true, true) => quote! {
            match &self.#ident {
                ::core::option::Option::Some(inner) => {
                    ::sqlbulk::SqlValue::other(::std::string::ToString::to_string(inner))
                }
                ::core::option::Option::None => ::sqlbulk::SqlValue::Null,
            }
        },
    };

    quote! {
        #column => ::core::option::Option::Some(#value),
    }
}

fn is_option(ty: &Type) -> bool {
    match ty {
        Type::Path(path) if path.qself.is_none() => path.path.segments
            .last()
            .map(|segment| segment.ident == "Option")
            .unwrap_or(false),
        Type::Group(group) => is_option(&group.elem),
        _ => false,
    }
}
