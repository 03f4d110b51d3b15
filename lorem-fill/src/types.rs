//! Type-level descriptions of populatable values.

/// The structural category of a [`Loremize`](crate::Loremize) type.
///
/// Only [`Shape::Record`] values are accepted at the top level of a
/// [`fill`](crate::fill) call and as `#[lorem(flatten)]` members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A struct with fields, usually from `#[derive(Loremize)]`.
    Record,
    /// A homogeneous sequence (`Vec<T>`, `[T; N]`).
    List,
    /// A value that may be absent (`Option<T>`).
    Optional,
    /// A leaf value (strings, numbers, booleans).
    Scalar,
    /// A hand-written impl that owns its own population logic.
    Custom,
}

/// Compile-time description of one record field.
///
/// Generated by `#[derive(Loremize)]` in declaration order and exposed
/// through [`Loremize::fields`](crate::Loremize::fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    /// Field name (`"0"`, `"1"`, ... for tuple structs).
    pub name: &'static str,
    /// Declared type, as written in source.
    pub type_name: &'static str,
    /// Raw annotation from `#[lorem(tag = "...")]`, empty if absent.
    pub tag: &'static str,
    /// Set by `#[lorem(flatten)]`.
    pub embedded: bool,
}

impl FieldDescriptor {
    /// Describe a regular field.
    pub const fn new(name: &'static str, type_name: &'static str, tag: &'static str) -> Self {
        Self {
            name,
            type_name,
            tag,
            embedded: false,
        }
    }

    /// Describe an embedded (`#[lorem(flatten)]`) field.
    pub const fn embedded(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            tag: "",
            embedded: true,
        }
    }

    /// Whether the annotation opts this field out of population.
    pub fn is_skipped(&self) -> bool {
        crate::annotation::is_skip(self.tag)
    }
}
