//! Record and field IR.

use syn::ext::IdentExt;
use syn::{Generics, Ident, Member, Path, Type};

/// How the derived impl handles one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Populated through `Filler::field` with the field's annotation.
    Populate,
    /// Populated through `Filler::embedded`.
    Flatten,
    /// Left untouched; still described in `fields()`.
    Skip,
}

/// One struct field.
#[derive(Debug, Clone)]
pub struct FieldIR {
    /// Accessor (`self.name` or `self.0`).
    pub member: Member,
    /// Declared type.
    pub ty: Type,
    /// Declared type rendered for error messages.
    pub type_name: String,
    /// Raw annotation, `"-"` for skipped fields.
    pub tag: String,
    pub mode: FieldMode,
    /// The type mentions one of the record's type parameters.
    pub generic: bool,
}

impl FieldIR {
    /// Field name as reported at runtime: the unraw identifier, or the
    /// position for tuple fields.
    pub fn name(&self) -> String {
        match &self.member {
            Member::Named(ident) => ident.unraw().to_string(),
            Member::Unnamed(index) => index.index.to_string(),
        }
    }

    /// Whether the derived impl needs `Self::ty: Loremize`.
    pub fn needs_bound(&self) -> bool {
        self.generic && self.mode != FieldMode::Skip
    }
}

/// A struct deriving `Loremize`.
#[derive(Debug, Clone)]
pub struct RecordIR {
    pub ident: Ident,
    pub generics: Generics,
    /// Path to the runtime crate.
    pub krate: Path,
    /// Fields in declaration order.
    pub fields: Vec<FieldIR>,
}

impl RecordIR {
    /// Fields the derived impl actually populates.
    pub fn populated_fields(&self) -> impl Iterator<Item = (usize, &FieldIR)> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.mode != FieldMode::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn field(member: Member, mode: FieldMode, generic: bool) -> FieldIR {
        FieldIR {
            member,
            ty: parse_quote!(String),
            type_name: "String".into(),
            tag: String::new(),
            mode,
            generic,
        }
    }

    #[test]
    fn test_field_names() {
        let named = field(Member::Named(parse_quote!(r#type)), FieldMode::Populate, false);
        assert_eq!(named.name(), "type");

        let unnamed = field(Member::Unnamed(1.into()), FieldMode::Populate, false);
        assert_eq!(unnamed.name(), "1");
    }

    #[test]
    fn test_skipped_generic_field_needs_no_bound() {
        let member: Member = Member::Named(parse_quote!(value));
        assert!(field(member.clone(), FieldMode::Populate, true).needs_bound());
        assert!(field(member.clone(), FieldMode::Flatten, true).needs_bound());
        assert!(!field(member.clone(), FieldMode::Skip, true).needs_bound());
        assert!(!field(member, FieldMode::Populate, false).needs_bound());
    }

    #[test]
    fn test_populated_fields_keep_indices() {
        let record = RecordIR {
            ident: parse_quote!(User),
            generics: Generics::default(),
            krate: parse_quote!(::lorem_fill),
            fields: vec![
                field(Member::Named(parse_quote!(id)), FieldMode::Skip, false),
                field(Member::Named(parse_quote!(name)), FieldMode::Populate, false),
            ],
        };
        let indices: Vec<usize> = record.populated_fields().map(|(i, _)| i).collect();
        assert_eq!(indices, [1]);
    }
}
