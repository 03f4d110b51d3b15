//! The population engine.
//!
//! [`Filler`] carries everything a [`Loremize`] impl needs while walking a
//! record: the random source, the text generator, the configuration and the
//! current nesting depth. Derived impls call [`Filler::field`] and
//! [`Filler::embedded`] once per field inside [`Filler::record`], which
//! owns depth accounting. The field methods own skipping and error
//! attribution.

use std::any::type_name;
use std::fmt;

use rand::RngCore;

use crate::annotation::{Directive, GeneratorKind};
use crate::config::FillConfig;
use crate::error::FillError;
use crate::text::{LoremIpsum, TextGenerator};
use crate::traits::Loremize;
use crate::types::{FieldDescriptor, Shape};

/// Populate `record` using the thread-local random source.
///
/// # Errors
///
/// Returns [`FillError::InvalidArgument`] if `T` is not a record, or the
/// first field-scoped failure otherwise. Fields populated before the failure
/// keep their new values.
///
/// # Example
/// ```rust
/// use lorem_fill::Loremize;
///
/// #[derive(Default, Loremize)]
/// struct Post {
///     #[lorem(tag = "sentence,3,6")]
///     title: String,
///     #[lorem(tag = "-")]
///     id: u64,
/// }
///
/// let mut post = Post { id: 7, ..Default::default() };
/// lorem_fill::fill(&mut post).unwrap();
/// assert_eq!(post.id, 7);
/// assert!(post.title.ends_with('.'));
/// ```
pub fn fill<T: Loremize>(record: &mut T) -> Result<(), FillError> {
    fill_with(record, &mut rand::thread_rng())
}

/// Populate `record` from an explicit random source.
///
/// A seeded rng makes the output reproducible.
pub fn fill_with<T: Loremize, R: RngCore>(record: &mut T, rng: &mut R) -> Result<(), FillError> {
    Filler::new(rng).fill(record)
}

/// Population context handed to every [`Loremize`] impl.
pub struct Filler<'a> {
    rng: &'a mut dyn RngCore,
    text: &'a dyn TextGenerator,
    config: FillConfig,
    depth: usize,
}

impl<'a> Filler<'a> {
    /// Create an engine with the default configuration and [`LoremIpsum`] text.
    pub fn new(rng: &'a mut dyn RngCore) -> Self {
        Self {
            rng,
            text: &LoremIpsum,
            config: FillConfig::default(),
            depth: 0,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: FillConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the text generator.
    pub fn with_text_generator(mut self, text: &'a dyn TextGenerator) -> Self {
        self.text = text;
        self
    }

    /// The random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// The text generator.
    pub fn text(&self) -> &'a dyn TextGenerator {
        self.text
    }

    /// The active configuration.
    pub fn config(&self) -> &FillConfig {
        &self.config
    }

    /// Number of records currently being populated above the caller.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Draw a list length from [`FillConfig::list_len`].
    pub fn list_len(&mut self) -> usize {
        self.config.list_len.sample(&mut *self.rng) as usize
    }

    /// Populate a top-level record.
    ///
    /// # Errors
    ///
    /// See [`fill`].
    pub fn fill<T: Loremize>(&mut self, record: &mut T) -> Result<(), FillError> {
        let record_type = type_name::<T>();
        if T::shape() != Shape::Record {
            return Err(FillError::InvalidArgument {
                type_name: record_type,
            });
        }

        tracing::debug!(record = record_type, "populating record");
        match record.loremize(self, "") {
            Ok(()) => {
                tracing::debug!(record = record_type, "record populated");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(record = record_type, error = %err, "population failed");
                Err(err)
            }
        }
    }

    /// Populate one field of a record with the field's own annotation.
    ///
    /// Skipped fields are left untouched. Any failure is attributed to
    /// `field` unless a deeper field already claimed it.
    pub fn field<T: Loremize>(
        &mut self,
        value: &mut T,
        field: &FieldDescriptor,
    ) -> Result<(), FillError> {
        if field.is_skipped() {
            tracing::trace!(field = field.name, "skipping field");
            return Ok(());
        }
        self.descend(field, |filler| value.loremize(filler, field.tag))
    }

    /// Populate a `#[lorem(flatten)]` member, whose fields are treated as
    /// if they belonged to the enclosing record.
    pub fn embedded<T: Loremize>(
        &mut self,
        value: &mut T,
        field: &FieldDescriptor,
    ) -> Result<(), FillError> {
        if field.is_skipped() {
            return Ok(());
        }
        if T::shape() != Shape::Record {
            return Err(FillError::InvalidArgument {
                type_name: type_name::<T>(),
            }
            .in_field(field));
        }
        self.descend(field, |filler| value.loremize(filler, ""))
    }

    /// Walk the fields of a record one nesting level deeper.
    ///
    /// Derived impls wrap their whole body in this call. Entering a record
    /// past [`FillConfig::max_depth`] fails with [`FillError::DepthExceeded`],
    /// which the enclosing field then claims.
    pub fn record(
        &mut self,
        populate: impl FnOnce(&mut Self) -> Result<(), FillError>,
    ) -> Result<(), FillError> {
        if self.depth >= self.config.max_depth {
            return Err(FillError::DepthExceeded {
                limit: self.config.max_depth,
            });
        }

        self.depth += 1;
        let result = populate(self);
        self.depth -= 1;
        result
    }

    fn descend(
        &mut self,
        field: &FieldDescriptor,
        populate: impl FnOnce(&mut Self) -> Result<(), FillError>,
    ) -> Result<(), FillError> {
        tracing::trace!(
            field = field.name,
            ty = field.type_name,
            tag = field.tag,
            depth = self.depth,
            "populating field"
        );
        populate(self).map_err(|err| err.in_field(field))
    }

    /// Produce the string an annotation asks for.
    ///
    /// `Ok(None)` means the value must be left as it is (skip sentinel or an
    /// unrecognized kind).
    ///
    /// # Errors
    ///
    /// Returns [`FillError::MalformedAnnotation`] for a bad annotation and
    /// [`FillError::Generation`] if the text generator fails.
    pub fn generate_text(&mut self, tag: &str) -> Result<Option<String>, FillError> {
        let text = self.text;
        let rng = &mut *self.rng;

        let generated = match Directive::parse(tag)? {
            Directive::Skip => return Ok(None),
            Directive::Literal(literal) => return Ok(Some(literal.to_string())),
            Directive::Unrecognized(kind) => {
                tracing::debug!(kind, tag, "unrecognized annotation kind, leaving value untouched");
                return Ok(None);
            }
            Directive::DefaultForType => {
                let bounds = self.config.word_bounds;
                text.word(rng, bounds.min, bounds.max)
            }
            Directive::Generate { kind, bounds } => match kind {
                GeneratorKind::Word => text.word(rng, bounds.min, bounds.max),
                GeneratorKind::Sentence => text.sentence(rng, bounds.min, bounds.max),
                GeneratorKind::Paragraph => text.paragraph(rng, bounds.min, bounds.max),
                GeneratorKind::Url => text.url(rng),
                GeneratorKind::ReadablePath => {
                    let seed = text
                        .sentence(rng, bounds.min, bounds.max)
                        .map_err(FillError::Generation)?;
                    text.readable_path(rng, &seed)
                }
                GeneratorKind::Host => text.host(rng),
                GeneratorKind::Email => text.email(rng),
            },
        };

        generated.map(Some).map_err(FillError::Generation)
    }
}

impl fmt::Debug for Filler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filler")
            .field("config", &self.config)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
