//! Text generation.
//!
//! The populator asks a [`TextGenerator`] for every generated string. The
//! default, [`LoremIpsum`], draws from a latin-looking word corpus; callers
//! can substitute their own through
//! [`Filler::with_text_generator`](crate::Filler::with_text_generator).
//!
//! Every method receives the random source explicitly, so output is
//! reproducible for a seeded rng.

mod lorem;
mod words;

use rand::RngCore;
use thiserror::Error;

use crate::error::BoxError;

pub use lorem::LoremIpsum;

/// Largest unit count a single [`LoremIpsum`] call will produce.
pub const MAX_UNITS: u32 = 10_000;

/// Errors raised by [`LoremIpsum`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The requested bounds exceed [`MAX_UNITS`].
    #[error("cannot generate {requested} units, the limit is {limit}")]
    TooManyUnits {
        /// Upper bound that was asked for.
        requested: u32,
        /// The configured limit.
        limit: u32,
    },
}

/// Source of human-readable pseudo text.
///
/// `min`/`max` are inclusive unit counts: letters for [`word`], words for
/// [`sentence`], sentences for [`paragraph`]. Implementations own the exact
/// boundary behavior.
///
/// [`word`]: TextGenerator::word
/// [`sentence`]: TextGenerator::sentence
/// [`paragraph`]: TextGenerator::paragraph
pub trait TextGenerator {
    /// A single word of `min..=max` letters.
    fn word(&self, rng: &mut dyn RngCore, min: u32, max: u32) -> Result<String, BoxError>;

    /// A capitalized sentence of `min..=max` words ending in a period.
    fn sentence(&self, rng: &mut dyn RngCore, min: u32, max: u32) -> Result<String, BoxError>;

    /// A paragraph of `min..=max` sentences.
    fn paragraph(&self, rng: &mut dyn RngCore, min: u32, max: u32) -> Result<String, BoxError>;

    /// An absolute `http` URL.
    fn url(&self, rng: &mut dyn RngCore) -> Result<String, BoxError>;

    /// A filesystem- and URL-safe slug derived from `seed`.
    fn readable_path(&self, rng: &mut dyn RngCore, seed: &str) -> Result<String, BoxError>;

    /// A hostname such as `dolor.com`.
    fn host(&self, rng: &mut dyn RngCore) -> Result<String, BoxError>;

    /// An email address.
    fn email(&self, rng: &mut dyn RngCore) -> Result<String, BoxError>;
}
