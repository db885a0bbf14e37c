//! Short constructors standing in for unit-suffixed literals.
//!
//! Each accepts integer or fractional literals:
//!
//! ```
//! use length_units::literals::{cm, ft, inch, m, mm};
//!
//! assert_eq!(m(1), cm(100));
//! assert_eq!(inch(12), ft(1));
//! assert_eq!(cm(250), m(2.5));
//! assert_eq!(mm(5_000_000_000), m(5_000_000));
//! ```
//!
//! Integer magnitudes are `u64`, the only integer type accepted, so an
//! unsuffixed integer literal of any size infers to it. Negative lengths are
//! written as negations, `-ft(1)`, or as fractional literals.

use crate::{Centimetre, Foot, Inch, Length, Metre, Millimetre};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for f32 {}
    impl Sealed for u64 {}
}

/// A number usable as the magnitude of a literal constructor
pub trait IntoMagnitude: sealed::Sealed {
    fn into_magnitude(self) -> f64;
}

impl IntoMagnitude for f64 {
    fn into_magnitude(self) -> f64 {
        self
    }
}

impl IntoMagnitude for f32 {
    fn into_magnitude(self) -> f64 {
        f64::from(self)
    }
}

impl IntoMagnitude for u64 {
    /// Rounds to the nearest `f64` (ties to even) above 2^53
    fn into_magnitude(self) -> f64 {
        self as f64
    }
}

/// Metres
pub fn m(value: impl IntoMagnitude) -> Length<Metre> {
    Length::new(value.into_magnitude())
}

/// Centimetres
pub fn cm(value: impl IntoMagnitude) -> Length<Centimetre> {
    Length::new(value.into_magnitude())
}

/// Millimetres
pub fn mm(value: impl IntoMagnitude) -> Length<Millimetre> {
    Length::new(value.into_magnitude())
}

/// Inches
pub fn inch(value: impl IntoMagnitude) -> Length<Inch> {
    Length::new(value.into_magnitude())
}

/// Feet
pub fn ft(value: impl IntoMagnitude) -> Length<Foot> {
    Length::new(value.into_magnitude())
}
