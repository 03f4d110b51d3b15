//! The annotation (tag) grammar.
//!
//! An annotation is the string given in `#[lorem(tag = "...")]`:
//!
//! | Annotation | Directive |
//! |------------|-----------|
//! | `""` | [`Directive::DefaultForType`] |
//! | `"-"` | [`Directive::Skip`] |
//! | `",value"` | [`Directive::Literal`] |
//! | `"sentence"` | [`Directive::Generate`] with default bounds (2, 10) |
//! | `"sentence,3,8"` | [`Directive::Generate`] with bounds (3, 8) |
//! | `"unknown"` | [`Directive::Unrecognized`] |
//!
//! Tokens are split on `,` and compared case-sensitively; whitespace is
//! significant.

use std::fmt;

use crate::config::Bounds;
use crate::error::FillError;

/// The skip sentinel.
pub const SKIP: &str = "-";

/// Whether `tag` is the skip sentinel.
pub fn is_skip(tag: &str) -> bool {
    tag == SKIP
}

/// Text generator selected by an annotation's first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// `word`
    Word,
    /// `sentence`
    Sentence,
    /// `paragraph`
    Paragraph,
    /// `url`
    Url,
    /// `readable-path`
    ReadablePath,
    /// `host`
    Host,
    /// `email`
    Email,
}

impl GeneratorKind {
    /// Every recognized kind.
    pub const ALL: [GeneratorKind; 7] = [
        GeneratorKind::Word,
        GeneratorKind::Sentence,
        GeneratorKind::Paragraph,
        GeneratorKind::Url,
        GeneratorKind::ReadablePath,
        GeneratorKind::Host,
        GeneratorKind::Email,
    ];

    /// Look up a kind by its annotation token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == token)
    }

    /// The annotation token for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
            Self::Url => "url",
            Self::ReadablePath => "readable-path",
            Self::Host => "host",
            Self::Email => "email",
        }
    }

    /// Whether the generator takes unit bounds at all.
    pub fn uses_bounds(&self) -> bool {
        !matches!(self, Self::Url | Self::Host | Self::Email)
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Leave the field untouched.
    Skip,
    /// No annotation; the field's type decides.
    DefaultForType,
    /// Set the field to this exact string.
    Literal(&'a str),
    /// Call a text generator.
    Generate {
        /// Which generator.
        kind: GeneratorKind,
        /// Unit bounds passed to it.
        bounds: Bounds,
    },
    /// A kind token nobody recognizes; the field is left untouched.
    Unrecognized(&'a str),
}

impl<'a> Directive<'a> {
    /// Parse an annotation.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::MalformedAnnotation`] for a leading comma with
    /// nothing after it, or for `min`/`max` tokens that are not base-10
    /// integers in the 32-bit signed range.
    pub fn parse(tag: &'a str) -> Result<Self, FillError> {
        if tag.is_empty() {
            return Ok(Self::DefaultForType);
        }
        if is_skip(tag) {
            return Ok(Self::Skip);
        }

        let args: Vec<&'a str> = tag.split(',').collect();
        let kind = args[0];

        if kind.is_empty() {
            return match args.get(1) {
                Some(&literal) => Ok(Self::Literal(literal)),
                None => Err(FillError::malformed(tag, "must have another thing after comma")),
            };
        }

        let bounds = match args.as_slice() {
            [_, min, max] => Bounds::new(parse_units(tag, min)?, parse_units(tag, max)?),
            _ => Bounds::DEFAULT_UNITS,
        };

        Ok(match GeneratorKind::from_token(kind) {
            Some(kind) => Self::Generate { kind, bounds },
            None => Self::Unrecognized(kind),
        })
    }
}

/// Bounds are 32-bit signed integers; negative values clamp to zero.
fn parse_units(tag: &str, token: &str) -> Result<u32, FillError> {
    let units = token
        .parse::<i32>()
        .map_err(|err| FillError::malformed(tag, err.to_string()))?;
    Ok(units.max(0).unsigned_abs())
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_kind() -> impl Strategy<Value = GeneratorKind> {
        prop::sample::select(GeneratorKind::ALL.to_vec())
    }

    proptest! {
        /// Any pair of 32-bit bounds parses, clamped at zero and ordered.
        #[test]
        fn prop_bounds_parse_and_order(kind in arb_kind(), a in any::<i32>(), b in any::<i32>()) {
            let tag = format!("{kind},{a},{b}");
            let directive = Directive::parse(&tag).unwrap();
            let (a, b) = (a.max(0) as u32, b.max(0) as u32);
            prop_assert_eq!(
                directive,
                Directive::Generate { kind, bounds: Bounds::new(a.min(b), a.max(b)) }
            );
        }

        /// A leading comma always yields the second token as a literal.
        #[test]
        fn prop_literal_is_second_token(literal in "[^,]*", rest in "(,[^,]*){0,2}") {
            let tag = format!(",{literal}{rest}");
            prop_assert_eq!(Directive::parse(&tag).unwrap(), Directive::Literal(&literal));
        }

        /// Lowercase words outside the kind list are permissive no-ops.
        #[test]
        fn prop_unknown_kinds_are_unrecognized(kind in "[a-z]{1,12}") {
            prop_assume!(GeneratorKind::from_token(&kind).is_none());
            prop_assert_eq!(Directive::parse(&kind).unwrap(), Directive::Unrecognized(&kind));
        }
    }
}
