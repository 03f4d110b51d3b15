//! # lorem-fill-macros
//!
//! Procedural macros for populating Rust structs with placeholder data.
//!
//! This crate provides the `#[derive(Loremize)]` macro used by the
//! `lorem-fill` crate. Depend on `lorem-fill` rather than on this crate
//! directly; it re-exports the derive.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lorem_fill::Loremize;
//!
//! #[derive(Default, Loremize)]
//! struct User {
//!     #[lorem(tag = "word,3,5")]
//!     name: String,
//!
//!     #[lorem(tag = "email")]
//!     email: Option<String>,
//!
//!     #[lorem(skip)]
//!     id: u64,
//! }
//! ```
//!
//! ## Attributes
//!
//! ### Container Attributes (on the struct)
//!
//! - `#[lorem(crate = "path")]` - Path to the runtime crate (default `::lorem_fill`)
//!
//! ### Field Attributes
//!
//! - `#[lorem(tag = "...")]` - Annotation passed to the populator
//! - `#[lorem(skip)]` - Leave this field untouched (same as `tag = "-"`)
//! - `#[lorem(flatten)]` - Populate a nested record as part of this one

use proc_macro::TokenStream;
use syn::DeriveInput;

mod codegen;
mod error;
mod ir;
mod parser;

use codegen::ImplBlockGenerator;
use parser::struct_parser::{StructParseError, StructParser};

/// Derive macro implementing `lorem_fill::Loremize` for a struct.
///
/// # Example
///
/// ```rust,ignore
/// use lorem_fill::Loremize;
///
/// #[derive(Default, Loremize)]
/// struct Point(f64, f64);
/// ```
#[proc_macro_derive(Loremize, attributes(lorem))]
pub fn derive_loremize(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_loremize_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Internal implementation of the derive macro.
fn derive_loremize_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream, StructParseError> {
    let record = StructParser::parse(input)?;
    Ok(ImplBlockGenerator::new().generate(&record))
}
