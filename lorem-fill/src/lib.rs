//! # lorem-fill
//!
//! Populate Rust structs with random numbers, booleans and lorem ipsum text,
//! driven by per-field annotations.
//!
//! ## Overview
//!
//! `lorem-fill` is meant for test fixtures and demo data. Derive
//! [`Loremize`] on a struct, annotate the fields whose content matters, and
//! call [`fill`]. Every field of a supported type receives a fresh value;
//! nested records, lists and optional values are walked recursively.
//!
//! ## Quick Start
//!
//! ```rust
//! use lorem_fill::Loremize;
//!
//! #[derive(Debug, Default, Loremize)]
//! struct Article {
//!     #[lorem(tag = "sentence,4,8")]
//!     title: String,
//!     #[lorem(tag = "paragraph,1,3")]
//!     body: String,
//!     #[lorem(tag = "email")]
//!     author: String,
//!     #[lorem(tag = "word,3,6")]
//!     tags: Vec<String>,
//!     views: u32,
//!     #[lorem(tag = "-")]
//!     id: u64,
//! }
//!
//! let mut article = Article { id: 42, ..Default::default() };
//! lorem_fill::fill(&mut article)?;
//!
//! assert_eq!(article.id, 42);
//! assert!(article.author.contains('@'));
//! # Ok::<(), lorem_fill::FillError>(())
//! ```
//!
//! ## Annotations
//!
//! | Annotation | Effect on a `String` field |
//! |------------|----------------------------|
//! | *(none)* | A word of 2-10 letters |
//! | `"-"` | Field left untouched (any type) |
//! | `",text"` | Set to exactly `text` |
//! | `"word,min,max"` | A word of `min..=max` letters |
//! | `"sentence,min,max"` | A sentence of `min..=max` words |
//! | `"paragraph,min,max"` | A paragraph of `min..=max` sentences |
//! | `"readable-path,min,max"` | A slug built from a `min..=max` word sentence |
//! | `"url"`, `"host"`, `"email"` | A URL, hostname or email address |
//!
//! `min`/`max` default to 2 and 10 when omitted. Unknown kinds leave the
//! field untouched. Numeric and boolean fields ignore their annotation except
//! for `"-"`. Lists and optional values pass their annotation on to every
//! element.
//!
//! ## Field Attributes
//!
//! | Attribute | Description |
//! |-----------|-------------|
//! | `#[lorem(tag = "...")]` | The annotation for this field |
//! | `#[lorem(skip)]` | Same as `tag = "-"` |
//! | `#[lorem(flatten)]` | Populate a nested record as part of this one |
//!
//! ## Type Support
//!
//! | Rust Type | Generated value |
//! |-----------|-----------------|
//! | `String` | Per the annotation table above |
//! | `i8`-`i128`, `isize`, `u8`, `u16` | Uniform in `0..=MAX` |
//! | `u32`-`u128`, `usize` | Uniform over the full range |
//! | `bool` | Fair coin |
//! | `f32`, `f64` | Uniform in `[0, 1)` |
//! | `Option<T>` | `Some`, then `T` is populated |
//! | `Vec<T>` | 0-10 freshly populated elements |
//! | `[T; N]` | Every element populated in place |
//! | `Box<T>` | `T` |
//! | `char`, `()`, `PhantomData<T>`, maps, sets | Left untouched |
//! | `Uuid` (feature `uuid`) | Random v4 |
//! | `DateTime<Utc>`, `NaiveDate` (feature `chrono`) | Between 2000 and 2030 |
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `derive` | `#[derive(Loremize)]` | ✅ |
//! | `serde` | Serialize/deserialize [`FillConfig`] | ❌ |
//! | `chrono` | Support for `chrono` date types | ❌ |
//! | `uuid` | Support for `uuid::Uuid` | ❌ |
//!
//! ## Custom Population
//!
//! Implement [`Loremize`] by hand and the impl takes full ownership of the
//! value, receiving the raw annotation of the field it sits in. See the
//! [`traits`] module.
//!
//! ## Reproducible Output
//!
//! [`fill_with`] and [`Filler`] take any [`rand::RngCore`], so a seeded rng
//! produces the same fixtures on every run:
//!
//! ```rust
//! use lorem_fill::{Bounds, FillConfig, Filler, Loremize};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! #[derive(Default, Loremize)]
//! struct Team {
//!     #[lorem(tag = "word,4,8")]
//!     members: Vec<String>,
//! }
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut team = Team::default();
//! Filler::new(&mut rng)
//!     .with_config(FillConfig::new().with_list_len(Bounds::new(3, 3)))
//!     .fill(&mut team)?;
//! assert_eq!(team.members.len(), 3);
//! # Ok::<(), lorem_fill::FillError>(())
//! ```

pub mod annotation;
pub mod config;
pub mod error;
pub mod filler;
pub mod text;
pub mod traits;
pub mod types;

// Re-export main trait
pub use traits::Loremize;

pub use annotation::{Directive, GeneratorKind};
pub use config::{Bounds, FillConfig};
pub use error::{BoxError, FieldError, FillError};
pub use filler::{fill, fill_with, Filler};
pub use text::{LoremIpsum, TextGenerator};
pub use types::{FieldDescriptor, Shape};

// Re-export derive macro when available
#[cfg(feature = "derive")]
pub use lorem_fill_macros::Loremize;
