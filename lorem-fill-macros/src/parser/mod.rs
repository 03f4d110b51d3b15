//! Parser module for lowering the derive input into IR.
//!
//! This module contains parsers for:
//! - Struct definitions
//! - Attributes
//! - Field types (display names and generic usage)

pub mod attributes;
pub mod struct_parser;
pub mod type_name;
