//! Error types for population.
//!
//! Every failure below the top-level call is reported as a [`FillError`].
//! Once a failure has been attributed to a field it is wrapped exactly once
//! in a [`FieldError`] and then travels up the call stack untouched, so the
//! caller always sees the innermost field that failed.

use thiserror::Error;

use crate::types::FieldDescriptor;

/// Boxed error returned by text generators and custom populators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned by [`fill`](crate::fill) and the [`Filler`](crate::Filler) engine.
#[derive(Debug, Error)]
pub enum FillError {
    /// The top-level target (or a flattened member) is not a record.
    #[error("must provide a record, got `{type_name}`")]
    InvalidArgument {
        /// Name of the offending type.
        type_name: &'static str,
    },

    /// The annotation string violates the tag grammar.
    #[error("malformed annotation {tag:?}: {reason}")]
    MalformedAnnotation {
        /// The raw annotation.
        tag: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A text generator or custom populator failed.
    #[error(transparent)]
    Generation(BoxError),

    /// Nesting went deeper than [`FillConfig::max_depth`](crate::FillConfig::max_depth).
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// A failure attributed to a specific field.
    #[error(transparent)]
    Field(Box<FieldError>),
}

impl FillError {
    /// Build a [`FillError::Generation`] from any error.
    ///
    /// Intended for hand-written [`Loremize`](crate::Loremize) impls.
    pub fn generation(err: impl Into<BoxError>) -> Self {
        Self::Generation(err.into())
    }

    pub(crate) fn malformed(tag: &str, reason: impl Into<String>) -> Self {
        Self::MalformedAnnotation {
            tag: tag.to_string(),
            reason: reason.into(),
        }
    }

    /// Attribute this error to `field`, unless it already names a field.
    pub fn in_field(self, field: &FieldDescriptor) -> Self {
        match self {
            Self::Field(_) => self,
            source => Self::Field(Box::new(FieldError {
                field_name: field.name.to_string(),
                type_name: field.type_name.to_string(),
                tag: field.tag.to_string(),
                source,
            })),
        }
    }

    /// The field-scoped wrapper, if this error has been attributed to a field.
    pub fn field(&self) -> Option<&FieldError> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }

    /// The underlying cause, looking through a field wrapper.
    pub fn root(&self) -> &FillError {
        match self {
            Self::Field(field) => &field.source,
            other => other,
        }
    }
}

impl From<crate::text::TextError> for FillError {
    fn from(err: crate::text::TextError) -> Self {
        Self::Generation(Box::new(err))
    }
}

/// A population failure scoped to one field.
#[derive(Debug, Error)]
#[error("error {source} for field `{field_name}`: has type `{type_name}` and tag {tag:?}")]
pub struct FieldError {
    /// Name of the failing field (`"0"`, `"1"`, ... for tuple structs).
    pub field_name: String,
    /// Declared type of the field, as written in source.
    pub type_name: String,
    /// The field's raw annotation.
    pub tag: String,
    /// The underlying failure.
    pub source: FillError,
}

impl FieldError {
    /// The underlying failure message.
    pub fn message(&self) -> String {
        self.source.to_string()
    }
}
