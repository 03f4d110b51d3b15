//! Intermediate Representation (IR) module.
//!
//! The parser lowers a `DeriveInput` into a [`RecordIR`]; the code generator
//! consumes it to emit the `Loremize` impl.

pub mod record;

pub use record::{FieldIR, FieldMode, RecordIR};
