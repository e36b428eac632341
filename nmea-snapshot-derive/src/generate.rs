use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident, LitInt, Result, Type, parse2};

use crate::meta::{self, MetaAttributeType};

/// How one struct field obtains its value.
enum FieldSource {
    /// Not read from the sentence.
    Ignored,
    /// `FromField` with a fallback value.
    Field {
        index: usize,
        default: Option<TokenStream>,
    },
    /// A user-provided `fn(&Fields, usize) -> T`.
    Parser { index: usize, parser: TokenStream },
}

struct FieldPlan {
    ident: Ident,
    ty: Type,
    source: FieldSource,
}

fn plan_fields(fields: &Fields) -> Result<Vec<FieldPlan>> {
    let Fields::Named(named) = fields else {
        return Err(Error::new(
            Span::call_site(),
            "nmea-snapshot-derive: Only structs with named fields are supported",
        ));
    };

    // Position 0 holds the sentence type code.
    let mut position = 1usize;
    let mut plans = Vec::with_capacity(named.named.len());

    for field in &named.named {
        let ident = field.ident.clone().ok_or_else(|| {
            Error::new(Span::call_site(), "nmea-snapshot-derive: Unnamed field")
        })?;
        let attributes = meta::parse_field_attributes(&field.attrs)?;

        let mut ignore = false;
        let mut default = None;
        let mut parser = None;

        for attribute in &attributes {
            match attribute.r#type {
                MetaAttributeType::Ignore => ignore = true,
                MetaAttributeType::Default => default = attribute.arg().cloned(),
                MetaAttributeType::Parser => parser = attribute.arg().cloned(),
                MetaAttributeType::Index => {
                    let arg = attribute.arg().cloned().unwrap_or_default();
                    position = parse2::<LitInt>(arg)
                        .and_then(|lit| lit.base10_parse::<usize>())
                        .map_err(|err| {
                            Error::new(
                                attribute.span(),
                                format!("nmea-snapshot-derive: Invalid `index`: {err}"),
                            )
                        })?;
                }
            }
        }

        let source = if ignore {
            FieldSource::Ignored
        } else {
            let index = position;
            position += 1;
            match parser {
                Some(parser) => FieldSource::Parser { index, parser },
                None => FieldSource::Field { index, default },
            }
        };

        plans.push(FieldPlan {
            ident,
            ty: field.ty.clone(),
            source,
        });
    }

    Ok(plans)
}

fn generate_binding(plan: &FieldPlan, fields_name: &Ident) -> TokenStream {
    let FieldPlan { ident, ty, source } = plan;

    let value = match source {
        FieldSource::Ignored => quote! { <#ty as ::core::default::Default>::default() },
        FieldSource::Field { index, default } => {
            let name = ident.to_string();
            let default = default
                .clone()
                .unwrap_or_else(|| quote! { <#ty as ::core::default::Default>::default() });
            quote! { #fields_name.parse_or::<#ty>(#index, #default, #name) }
        }
        FieldSource::Parser { index, parser } => quote! { (#parser)(#fields_name, #index) },
    };

    quote! { let #ident: #ty = #value; }
}

pub fn generate_from_fields_impl(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(datastruct) = &input.data else {
        return Err(Error::new(
            input.ident.span(),
            "nmea-snapshot-derive: FromFields can only be derived for structs",
        ));
    };

    let plans = plan_fields(&datastruct.fields)?;
    let fields_name = Ident::new("nmea_fields", Span::call_site());

    let bindings = plans
        .iter()
        .map(|plan| generate_binding(plan, &fields_name));
    let idents = plans.iter().map(|plan| &plan.ident);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics nmea_snapshot::FromFields for #name #ty_generics #where_clause {
            fn from_fields(#fields_name: &nmea_snapshot::Fields<'_>) -> Self {
                #(#bindings)*
                Self { #(#idents),* }
            }
        }
    })
}
