//! Struct parsing logic.
//!
//! This module lowers struct definitions into [`RecordIR`]. It supports
//! named structs, tuple structs and unit structs.

use darling::{FromDeriveInput, FromField};
use proc_macro2::TokenStream;
use syn::{Data, DeriveInput, Ident, Member};

use crate::error::ParseError;
use crate::ir::{FieldIR, RecordIR};
use crate::parser::attributes::{ContainerAttrs, FieldAttrs};
use crate::parser::type_name;

/// Error type for struct parsing failures.
#[derive(Debug, thiserror::Error)]
pub enum StructParseError {
    /// Malformed `#[lorem(...)]` syntax.
    #[error(transparent)]
    Attributes(#[from] darling::Error),

    /// Well-formed attributes describing an impossible field.
    #[error(transparent)]
    Invalid(#[from] ParseError),
}

impl StructParseError {
    /// Render the error as `compile_error!` invocations.
    pub fn into_compile_error(self) -> TokenStream {
        match self {
            Self::Attributes(err) => err.write_errors(),
            Self::Invalid(err) => err.into_syn_error().into_compile_error(),
        }
    }
}

/// Parses Rust struct definitions into RecordIR.
pub struct StructParser;

impl StructParser {
    /// Parse a DeriveInput into a RecordIR.
    ///
    /// This is the main entry point for struct parsing.
    pub fn parse(input: &DeriveInput) -> Result<RecordIR, StructParseError> {
        let data_struct = match &input.data {
            Data::Struct(s) => s,
            Data::Enum(_) | Data::Union(_) => {
                return Err(ParseError::new(
                    input.ident.span(),
                    "Loremize can only be derived for structs",
                )
                .into())
            }
        };

        let container_attrs = ContainerAttrs::from_derive_input(input)?;

        let type_params: Vec<Ident> = container_attrs
            .generics
            .type_params()
            .map(|param| param.ident.clone())
            .collect();

        let mut fields = Vec::with_capacity(data_struct.fields.len());
        for (index, field) in data_struct.fields.iter().enumerate() {
            let field_attrs = FieldAttrs::from_field(field)?;
            fields.push(Self::parse_field(index, field_attrs, &type_params)?);
        }

        Ok(RecordIR {
            krate: container_attrs.crate_path(),
            ident: container_attrs.ident,
            generics: container_attrs.generics,
            fields,
        })
    }

    fn parse_field(
        index: usize,
        field_attrs: FieldAttrs,
        type_params: &[Ident],
    ) -> Result<FieldIR, StructParseError> {
        let mode = field_attrs.mode()?;
        let tag = field_attrs.effective_tag();
        let member = match field_attrs.ident {
            Some(ident) => Member::Named(ident),
            None => Member::Unnamed(index.into()),
        };

        Ok(FieldIR {
            member,
            type_name: type_name::render(&field_attrs.ty),
            generic: type_name::mentions_any(&field_attrs.ty, type_params),
            ty: field_attrs.ty,
            tag,
            mode,
        })
    }
}
