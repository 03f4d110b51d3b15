//! Rust code generation module.
//!
//! This module handles generating Rust impl blocks for the Loremize trait.

pub mod impl_block;

pub use impl_block::ImplBlockGenerator;
