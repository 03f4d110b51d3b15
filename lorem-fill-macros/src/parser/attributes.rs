//! Attribute parsing using darling for ergonomic derive macro attributes.
//!
//! This module defines the attribute structures for `#[lorem(...)]`
//! attributes on structs and their fields.

use darling::{FromDeriveInput, FromField};
use syn::spanned::Spanned;
use syn::{Generics, Ident, Path, Type};

use crate::error::ParseError;
use crate::ir::FieldMode;

/// The annotation that leaves a field untouched.
const SKIP_TAG: &str = "-";

/// Container-level attributes parsed from `#[lorem(...)]` on the struct.
#[derive(Debug, Clone, FromDeriveInput)]
#[darling(attributes(lorem), supports(struct_any))]
pub struct ContainerAttrs {
    /// The identifier of the type
    pub ident: Ident,

    /// Generic parameters of the type
    pub generics: Generics,

    /// Path to the runtime crate (from `#[lorem(crate = "...")]`)
    #[darling(default, rename = "crate")]
    pub krate: Option<Path>,
}

impl ContainerAttrs {
    /// The runtime crate path, `::lorem_fill` unless overridden.
    pub fn crate_path(&self) -> Path {
        self.krate
            .clone()
            .unwrap_or_else(|| syn::parse_quote!(::lorem_fill))
    }
}

/// Field-level attributes parsed from `#[lorem(...)]` on struct fields.
#[derive(Debug, Clone, FromField)]
#[darling(attributes(lorem))]
pub struct FieldAttrs {
    /// Field identifier (None for tuple struct fields)
    pub ident: Option<Ident>,

    /// Field type
    pub ty: Type,

    /// Raw annotation handed to the populator
    #[darling(default)]
    pub tag: Option<String>,

    /// Leave this field untouched
    #[darling(default)]
    pub skip: bool,

    /// Populate a nested record as part of this one
    #[darling(default)]
    pub flatten: bool,
}

impl FieldAttrs {
    /// Span used for errors about this field.
    pub fn span(&self) -> proc_macro2::Span {
        match &self.ident {
            Some(ident) => ident.span(),
            None => self.ty.span(),
        }
    }

    /// The annotation recorded in the field descriptor.
    pub fn effective_tag(&self) -> String {
        if self.skip {
            SKIP_TAG.to_string()
        } else {
            self.tag.clone().unwrap_or_default()
        }
    }

    /// Decide how the derived impl treats this field.
    pub fn mode(&self) -> Result<FieldMode, ParseError> {
        if self.flatten && self.skip {
            return Err(ParseError::new(
                self.span(),
                "`#[lorem(flatten)]` and `#[lorem(skip)]` cannot be combined",
            ));
        }
        if self.flatten && self.tag.is_some() {
            return Err(
                ParseError::new(self.span(), "`#[lorem(flatten)]` fields cannot have a tag")
                    .with_help("annotate the fields of the flattened record instead"),
            );
        }
        if self.skip && self.tag.is_some() {
            return Err(ParseError::new(
                self.span(),
                "`#[lorem(skip)]` fields cannot have a tag",
            ));
        }

        Ok(if self.flatten {
            FieldMode::Flatten
        } else if self.effective_tag() == SKIP_TAG {
            FieldMode::Skip
        } else {
            FieldMode::Populate
        })
    }
}
