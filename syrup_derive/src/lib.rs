//! Derive macros for the `syrup` crate.
//!
//! `#[derive(Ser)]` writes a host type through the composing writer:
//! named-field structs become dictionaries keyed by field-name symbols,
//! tuple structs and enum variants become records, unit structs and unit
//! variants become symbols. `#[syrup(label = "...")]` on the type
//! overrides the record label, which defaults to the type name.
//!
//! `#[derive(Decode)]` builds the resumable struct plan for a named-field
//! struct: a `{Start, Key, Value, End}` machine with per-field presence
//! tracking.

#![recursion_limit = "128"]

extern crate proc_macro;

mod de;
mod ser;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

/// The record label from `#[syrup(label = "...")]`, if the type carries one.
fn label_override(ast: &DeriveInput) -> Option<String> {
    let mut label = None;
    for attr in &ast.attrs {
        if attr.path().is_ident("syrup") {
            let _ = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("label") {
                    let lit: syn::LitStr = meta.value()?.parse()?;
                    label = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("unsupported syrup attribute"))
                }
            });
        }
    }
    label
}

#[proc_macro_derive(Ser, attributes(syrup))]
pub fn ser_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let label = label_override(&ast).unwrap_or_else(|| ast.ident.to_string());
    let name = ast.ident;

    match ast.data {
        Data::Struct(sd) => ser::struct_impl::ser(name, label, sd),
        Data::Enum(ed) => ser::enum_impl::ser(name, ed),
        Data::Union(_) => {
            quote! { compile_error!("`Ser` cannot be derived for unions"); }.into()
        }
    }
}

#[proc_macro_derive(Decode, attributes(syrup))]
pub fn decode_derive(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    let name = ast.ident;
    let vis = ast.vis;

    match ast.data {
        Data::Struct(sd) => {
            match sd.fields {
                Fields::Named(_) => de::struct_impl::decode(name, vis, sd),
                _ => {
                    quote! {
                        compile_error!(
                            "`Decode` can only be derived for structs with named fields"
                        );
                    }
                    .into()
                }
            }
        }
        _ => {
            quote! {
                compile_error!("`Decode` can only be derived for structs with named fields");
            }
            .into()
        }
    }
}
