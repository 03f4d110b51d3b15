//! The [`Loremize`] trait and its implementations for std types.
//!
//! ## Deriving vs Manual Implementation
//!
//! Records derive the trait, which walks every field with its own
//! annotation:
//!
//! ```rust
//! use lorem_fill::Loremize;
//!
//! #[derive(Debug, Default, Loremize)]
//! struct User {
//!     #[lorem(tag = "word,3,5")]
//!     name: String,
//!     age: u8,
//! }
//!
//! let mut user = User::default();
//! lorem_fill::fill(&mut user).unwrap();
//! assert!((3..=5).contains(&user.name.len()));
//! ```
//!
//! Implementing the trait by hand is the custom-population hook: the impl
//! receives the field's raw annotation and owns the value completely.
//!
//! ```rust
//! use lorem_fill::{FillError, Filler, Loremize};
//! use rand::Rng;
//!
//! #[derive(Default)]
//! struct Cents(i64);
//!
//! impl Loremize for Cents {
//!     fn loremize(&mut self, filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
//!         self.0 = filler.rng().gen_range(100..100_000);
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Provided Implementations
//!
//! - **Strings**: `String`, driven by the annotation grammar
//! - **Integers**: `i8`-`i128`, `isize`, `u8`-`u128`, `usize`
//! - **Others**: `bool`, `f32`, `f64`
//! - **Containers**: `Option<T>`, `Box<T>`, `Vec<T>`, `[T; N]`
//! - **Left untouched**: `char`, `()`, `PhantomData<T>`, maps and sets
//! - **Feature-gated**: `Uuid` (uuid feature), `DateTime<Utc>` and `NaiveDate` (chrono feature)

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::marker::PhantomData;

use rand::Rng;

use crate::error::FillError;
use crate::filler::Filler;
use crate::types::{FieldDescriptor, Shape};

/// A value that can be populated with placeholder data.
///
/// # Required Methods
///
/// - [`loremize`](Loremize::loremize) - Populate `self` in place
///
/// # Provided Methods
///
/// - [`shape`](Loremize::shape) - Structural category, [`Shape::Custom`] unless overridden
/// - [`fields`](Loremize::fields) - Field descriptors, empty unless derived
pub trait Loremize {
    /// Populate `self` using the field's raw annotation `tag`.
    ///
    /// Derived impls ignore `tag` and use each field's own annotation. They
    /// walk their fields inside [`Filler::record`], so nesting counts
    /// against [`FillConfig::max_depth`](crate::FillConfig::max_depth).
    fn loremize(&mut self, filler: &mut Filler<'_>, tag: &str) -> Result<(), FillError>;

    /// The structural category of this type.
    fn shape() -> Shape
    where
        Self: Sized,
    {
        Shape::Custom
    }

    /// Descriptors of the fields a derived impl walks, in declaration order.
    fn fields() -> &'static [FieldDescriptor]
    where
        Self: Sized,
    {
        &[]
    }
}

// =============================================================================
// Strings
// =============================================================================

impl Loremize for String {
    fn loremize(&mut self, filler: &mut Filler<'_>, tag: &str) -> Result<(), FillError> {
        if let Some(text) = filler.generate_text(tag)? {
            *self = text;
        }
        Ok(())
    }

    fn shape() -> Shape {
        Shape::Scalar
    }
}

// =============================================================================
// Integers
// =============================================================================

// Drawn from `0..=MAX` so values never look like negative sentinels.
macro_rules! impl_loremize_for_nonnegative {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loremize for $ty {
                fn loremize(&mut self, filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
                    *self = filler.rng().gen_range(0..=<$ty>::MAX);
                    Ok(())
                }

                fn shape() -> Shape {
                    Shape::Scalar
                }
            }
        )*
    };
}

impl_loremize_for_nonnegative!(i8, i16, i32, i64, i128, isize, u8, u16);

macro_rules! impl_loremize_for_full_range {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loremize for $ty {
                fn loremize(&mut self, filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
                    *self = filler.rng().gen::<$ty>();
                    Ok(())
                }

                fn shape() -> Shape {
                    Shape::Scalar
                }
            }
        )*
    };
}

impl_loremize_for_full_range!(u32, u64, u128, usize, bool, f32, f64);

// =============================================================================
// Values left untouched
// =============================================================================

macro_rules! impl_loremize_noop {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loremize for $ty {
                fn loremize(&mut self, _filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
                    Ok(())
                }

                fn shape() -> Shape {
                    Shape::Scalar
                }
            }
        )*
    };
}

impl_loremize_noop!(char, ());

impl<T: ?Sized> Loremize for PhantomData<T> {
    fn loremize(&mut self, _filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        Ok(())
    }

    fn shape() -> Shape {
        Shape::Scalar
    }
}

impl<K, V, S> Loremize for HashMap<K, V, S> {
    fn loremize(&mut self, _filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        Ok(())
    }
}

impl<T, S> Loremize for HashSet<T, S> {
    fn loremize(&mut self, _filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        Ok(())
    }
}

impl<K, V> Loremize for BTreeMap<K, V> {
    fn loremize(&mut self, _filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        Ok(())
    }
}

impl<T> Loremize for BTreeSet<T> {
    fn loremize(&mut self, _filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        Ok(())
    }
}

// =============================================================================
// Containers
// =============================================================================

/// `None` is replaced by `Some(T::default())` before the inner value is
/// populated with the same annotation.
impl<T: Loremize + Default> Loremize for Option<T> {
    fn loremize(&mut self, filler: &mut Filler<'_>, tag: &str) -> Result<(), FillError> {
        self.get_or_insert_with(T::default).loremize(filler, tag)
    }

    fn shape() -> Shape {
        Shape::Optional
    }
}

impl<T: Loremize> Loremize for Box<T> {
    fn loremize(&mut self, filler: &mut Filler<'_>, tag: &str) -> Result<(), FillError> {
        (**self).loremize(filler, tag)
    }

    fn shape() -> Shape {
        T::shape()
    }

    fn fields() -> &'static [FieldDescriptor] {
        T::fields()
    }
}

/// Replaced by a list of [`FillConfig::list_len`](crate::FillConfig::list_len)
/// elements, each populated with the list field's annotation.
impl<T: Loremize + Default> Loremize for Vec<T> {
    fn loremize(&mut self, filler: &mut Filler<'_>, tag: &str) -> Result<(), FillError> {
        let len = filler.list_len();
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            let mut item = T::default();
            item.loremize(filler, tag)?;
            items.push(item);
        }
        *self = items;
        Ok(())
    }

    fn shape() -> Shape {
        Shape::List
    }
}

impl<T: Loremize, const N: usize> Loremize for [T; N] {
    fn loremize(&mut self, filler: &mut Filler<'_>, tag: &str) -> Result<(), FillError> {
        for item in self.iter_mut() {
            item.loremize(filler, tag)?;
        }
        Ok(())
    }

    fn shape() -> Shape {
        Shape::List
    }
}

// =============================================================================
// Feature-gated implementations
// =============================================================================

#[cfg(feature = "uuid")]
impl Loremize for uuid::Uuid {
    fn loremize(&mut self, filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        *self = uuid::Builder::from_random_bytes(filler.rng().gen()).into_uuid();
        Ok(())
    }

    fn shape() -> Shape {
        Shape::Scalar
    }
}

/// 2000-01-01T00:00:00Z up to (excluding) 2030-01-01T00:00:00Z.
#[cfg(feature = "chrono")]
const TIMESTAMP_RANGE: std::ops::Range<i64> = 946_684_800..1_893_456_000;

#[cfg(feature = "chrono")]
fn random_datetime(filler: &mut Filler<'_>) -> Result<chrono::DateTime<chrono::Utc>, FillError> {
    let secs = filler.rng().gen_range(TIMESTAMP_RANGE);
    chrono::DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| FillError::generation(format!("timestamp {secs} is out of range")))
}

#[cfg(feature = "chrono")]
impl Loremize for chrono::DateTime<chrono::Utc> {
    fn loremize(&mut self, filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        *self = random_datetime(filler)?;
        Ok(())
    }

    fn shape() -> Shape {
        Shape::Scalar
    }
}

#[cfg(feature = "chrono")]
impl Loremize for chrono::NaiveDate {
    fn loremize(&mut self, filler: &mut Filler<'_>, _tag: &str) -> Result<(), FillError> {
        *self = random_datetime(filler)?.date_naive();
        Ok(())
    }

    fn shape() -> Shape {
        Shape::Scalar
    }
}

// =============================================================================
// Tests
// =============================================================================
