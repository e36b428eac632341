use std::fmt::Display;

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{
    Attribute, Error, Expr, Ident, Lit, Result, Token, parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token::Paren,
};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetaAttributeType {
    Default,
    Ignore,
    Index,
    Parser,
}

impl MetaAttributeType {
    pub fn from_ident(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "default" => Some(Self::Default),
            "ignore" => Some(Self::Ignore),
            "index" => Some(Self::Index),
            "parser" => Some(Self::Parser),
            _ => None,
        }
    }

    fn takes_argument(&self) -> bool {
        !matches!(self, Self::Ignore)
    }
}

impl Display for MetaAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Default => "default",
            Self::Ignore => "ignore",
            Self::Index => "index",
            Self::Parser => "parser",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug)]
pub struct MetaAttribute {
    pub r#type: MetaAttributeType,
    arg: Option<TokenStream>,
    span: Span,
}

impl MetaAttribute {
    pub fn arg(&self) -> Option<&TokenStream> {
        self.arg.as_ref()
    }

    pub fn span(&self) -> Span {
        self.span
    }
}

impl Parse for MetaAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: Ident = input.parse()?;
        let r#type = MetaAttributeType::from_ident(&ident).ok_or_else(|| {
            Error::new(ident.span(), "nmea-snapshot-derive: Unknown nmea attribute")
        })?;

        let arg = if r#type.takes_argument() {
            Some(parse_argument(input)?)
        } else {
            None
        };

        Ok(Self {
            r#type,
            arg,
            span: ident.span(),
        })
    }
}

struct List(Vec<MetaAttribute>);

impl Parse for List {
    fn parse(input: ParseStream) -> Result<Self> {
        Ok(List(
            Punctuated::<MetaAttribute, Token![,]>::parse_terminated(input)?
                .into_iter()
                .collect(),
        ))
    }
}

// Accepts `= literal`, `= "expression"` or `(expression)`.
fn parse_argument(input: ParseStream) -> Result<TokenStream> {
    if input.peek(Token![=]) {
        let _: Token![=] = input.parse()?;
        match Lit::parse(input)? {
            Lit::Str(string) => {
                let parsed: Expr = string.parse()?;
                Ok(quote! { #parsed })
            }
            lit => Ok(quote! { #lit }),
        }
    } else if input.peek(Paren) {
        let content;
        parenthesized!(content in input);
        let parsed: Expr = content.parse()?;
        Ok(quote! { #parsed })
    } else {
        Err(Error::new(
            input.span(),
            "nmea-snapshot-derive: Expected '= <value>' or '(<value>)' for nmea attribute",
        ))
    }
}

pub fn parse_field_attributes(attrs: &[Attribute]) -> Result<Vec<MetaAttribute>> {
    let mut seen = std::collections::HashSet::new();

    let attributes = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("nmea"))
        .map(|attr| attr.parse_args::<List>())
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flat_map(|list| list.0.into_iter())
        .map(|meta_attr| {
            if !seen.insert(meta_attr.r#type) {
                return Err(Error::new(
                    meta_attr.span(),
                    format!(
                        "nmea-snapshot-derive: Duplicate nmea attribute `{}`",
                        meta_attr.r#type
                    ),
                ));
            }
            Ok(meta_attr)
        })
        .collect::<Result<Vec<_>>>()?;

    if seen.contains(&MetaAttributeType::Ignore) && seen.len() > 1 {
        return Err(Error::new(
            attributes[0].span(),
            "nmea-snapshot-derive: Attribute `ignore` cannot be combined with other attributes.",
        ));
    }

    if seen.contains(&MetaAttributeType::Parser) && seen.contains(&MetaAttributeType::Default) {
        return Err(Error::new(
            attributes[0].span(),
            "nmea-snapshot-derive: Attribute `default` cannot be used with `parser` attribute.",
        ));
    }

    Ok(attributes)
}
