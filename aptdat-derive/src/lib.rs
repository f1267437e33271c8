// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for apt.dat record types.
//!
//! This crate allows to `derive` a `Record` implementation and implements
//! `TryFrom` on the record too. Fields are read from the whitespace separated
//! tokens of a line, where token 0 is the row code.
//!
//! # Example
//!
//! Deriving an implementation on an airport header:
//!
//! ```ignore
//! #[derive(Record)]
//! pub struct Airport<'a> {
//!     pub kind: RecordKind,
//!     pub elevation: Numeric<'a>,
//!     #[apt(field = 4)]  // Jump to token 4
//!     pub ident: Text<'a>,
//!     #[apt(rest)]  // All remaining tokens
//!     pub name: Rest<'a>,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Expr, ExprLit, Fields, Lit, Meta};

enum FieldAttribute {
    Position(usize),
    Rest,
}

fn parse_field_attributes(field: &syn::Field) -> Option<FieldAttribute> {
    for attr in &field.attrs {
        if !attr.path().is_ident("apt") {
            continue;
        }

        if let Ok(meta) = attr.parse_args::<Meta>() {
            match meta {
                // Handle #[apt(field = n)]
                Meta::NameValue(nv) if nv.path.is_ident("field") => {
                    if let Expr::Lit(ExprLit {
                        lit: Lit::Int(int_lit),
                        ..
                    }) = nv.value
                    {
                        if let Ok(n) = int_lit.base10_parse::<usize>() {
                            return Some(FieldAttribute::Position(n));
                        }
                    }
                }
                // Handle #[apt(rest)]
                Meta::Path(path) if path.is_ident("rest") => {
                    return Some(FieldAttribute::Rest);
                }
                _ => {}
            }
        }
    }
    None
}

/// Derive macro for implementing the `Record` trait.
///
/// Generates both the `Record` trait implementation and `TryFrom<&Line>` implementation.
#[proc_macro_derive(Record, attributes(apt))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Extract lifetime parameter (should be 'a)
    let lifetime = generics
        .lifetimes()
        .next()
        .expect("Record types must have a lifetime parameter (e.g., 'a)");

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("Record derive only supports structs with named fields"),
        },
        _ => panic!("Record derive only supports structs"),
    };

    let mut field_parsers = Vec::new();

    for field in fields {
        let field_name = field.ident.as_ref().unwrap();

        let parse_expr = match parse_field_attributes(field) {
            Some(FieldAttribute::Position(pos)) => {
                quote! {
                    #field_name: fields.get(#pos)?
                }
            }
            Some(FieldAttribute::Rest) => {
                quote! {
                    #field_name: fields.rest()
                }
            }
            None => {
                quote! {
                    #field_name: fields.next()?
                }
            }
        };

        field_parsers.push(parse_expr);
    }

    let expanded = quote! {
        impl #impl_generics crate::record::Record<#lifetime> for #name #ty_generics #where_clause {
            fn parse(mut fields: crate::record::Fields<#lifetime>) -> Result<Self, crate::Error> {
                Ok(Self {
                    #(#field_parsers),*
                })
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&#lifetime crate::Line<#lifetime>> for #name #ty_generics #where_clause {
            type Error = crate::Error;

            fn try_from(line: &#lifetime crate::Line<#lifetime>) -> Result<Self, crate::Error> {
                <Self as crate::record::Record>::from_line(line)
            }
        }
    };

    TokenStream::from(expanded)
}
