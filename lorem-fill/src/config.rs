//! Configuration for the [`Filler`](crate::Filler) engine.
//!
//! # Example
//! ```rust
//! use lorem_fill::{Bounds, FillConfig};
//!
//! let config = FillConfig::new()
//!     .with_list_len(Bounds::new(1, 3))
//!     .with_max_depth(8);
//! assert_eq!(config.list_len, Bounds::new(1, 3));
//! ```

use rand::{Rng, RngCore};

/// An inclusive `min..=max` range of units.
///
/// The ends are ordered on construction, so `Bounds::new(10, 2)` is the
/// same range as `Bounds::new(2, 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    /// Smallest value, inclusive.
    pub min: u32,
    /// Largest value, inclusive.
    pub max: u32,
}

impl Bounds {
    /// Word-count bounds used when an annotation omits them.
    pub const DEFAULT_UNITS: Bounds = Bounds { min: 2, max: 10 };

    /// List lengths used when none are configured.
    pub const DEFAULT_LIST_LEN: Bounds = Bounds { min: 0, max: 10 };

    /// Create bounds, swapping the ends if they are reversed.
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Draw a value uniformly from `min..=max`.
    pub fn sample(&self, rng: &mut dyn RngCore) -> u32 {
        let Bounds { min, max } = Bounds::new(self.min, self.max);
        rng.gen_range(min..=max)
    }

    /// Whether `value` lies inside the range.
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::DEFAULT_UNITS
    }
}

/// Engine configuration.
///
/// All fields have defaults matching the annotation grammar: untagged
/// strings are words of 2-10 letters and lists hold 0-10 elements.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FillConfig {
    /// Length range for generated lists (default: 0..=10)
    pub list_len: Bounds,
    /// Word length range for untagged strings (default: 2..=10)
    pub word_bounds: Bounds,
    /// Deepest record nesting allowed before failing (default: 32)
    pub max_depth: usize,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            list_len: Bounds::DEFAULT_LIST_LEN,
            word_bounds: Bounds::DEFAULT_UNITS,
            max_depth: 32,
        }
    }
}

impl FillConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length range for generated lists.
    pub fn with_list_len(mut self, list_len: Bounds) -> Self {
        self.list_len = list_len;
        self
    }

    /// Set the word length range for untagged strings.
    pub fn with_word_bounds(mut self, word_bounds: Bounds) -> Self {
        self.word_bounds = word_bounds;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
