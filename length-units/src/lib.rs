//! Length Units - compile-time tagged lengths
//!
//! A [`Length<U>`] is an `f64` whose unit `U` exists only in the type.
//! Mixing units is always explicit: operators convert the right-hand
//! operand into the left-hand unit through exact rational scale factors,
//! and a tag outside the registry does not compile.
//!
//! Units (scale in metres):
//! - [`Metre`] (1)
//! - [`Centimetre`] (1/100)
//! - [`Millimetre`] (1/1000)
//! - [`Inch`] (254/10000)
//! - [`Foot`] (12 in)
//!
//! ```
//! use length_units::prelude::*;
//!
//! let total = mm(200) + m(3) / 6.0;
//! assert_eq!(total, 2.0 * cm(10) + cm(50));
//! assert_eq!(mm(2) / cm(1), 0.2);
//! ```

mod unit;
mod length;
mod convert;
mod ops;
pub mod literals;

pub use unit::{LengthUnit, Conversion, Metre, Centimetre, Millimetre, Inch, Foot};
pub use length::Length;
pub use convert::convert;
pub use length_core::Ratio;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{convert, Length, LengthUnit};
    pub use crate::{Metre, Centimetre, Millimetre, Inch, Foot};
    pub use crate::literals::{m, cm, mm, inch, ft};
}
