//! Length units with exact scale factors
//!
//! The set of units is closed: [`LengthUnit`] is sealed, so a type outside
//! this module can never appear as the tag of a [`Length`](crate::Length).
//!
//! ```compile_fail
//! use length_units::Length;
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct Furlong;
//!
//! let _ = Length::<Furlong>::new(1.0);
//! ```
//!
//! Nor can the registry be extended from outside:
//!
//! ```compile_fail
//! use length_units::{LengthUnit, Ratio};
//!
//! #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
//! struct Furlong;
//!
//! impl LengthUnit for Furlong {
//!     const SCALE: Ratio = Ratio::new(201168, 1000);
//!     const SYMBOL: &'static str = "fur";
//!     const NAME: &'static str = "furlong";
//! }
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;
use length_core::Ratio;

mod sealed {
    pub trait Sealed {}
}

/// A unit of length, identified entirely at compile time
pub trait LengthUnit:
    sealed::Sealed + Debug + Clone + Copy + Default + Eq + Hash + Send + Sync + 'static
{
    /// Metres in one of this unit
    const SCALE: Ratio;
    /// The unit symbol (e.g., "m", "in")
    const SYMBOL: &'static str;
    /// The unit name (e.g., "metre", "inch")
    const NAME: &'static str;
}

/// Declare zero-sized unit tags. One line per unit: tag, symbol, name, scale.
macro_rules! length_units {
    ($($(#[$meta:meta])* $unit:ident => $symbol:literal, $name:literal, $scale:expr;)+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $unit;

            impl sealed::Sealed for $unit {}

            impl LengthUnit for $unit {
                const SCALE: Ratio = $scale;
                const SYMBOL: &'static str = $symbol;
                const NAME: &'static str = $name;
            }
        )+
    };
}

length_units! {
    /// The canonical unit, scale 1
    Metre => "m", "metre", Ratio::ONE;
    Centimetre => "cm", "centimetre", Ratio::new(1, 100);
    Millimetre => "mm", "millimetre", Ratio::new(1, 1000);
    /// International inch, exactly 2.54 cm
    Inch => "in", "inch", Ratio::new(254, 100).mul(Centimetre::SCALE);
    Foot => "ft", "foot", Ratio::integer(12).mul(Inch::SCALE);
}

/// Compile-time conversion factor between two units
pub struct Conversion<F, T>(PhantomData<(F, T)>);

impl<F: LengthUnit, T: LengthUnit> Conversion<F, T> {
    /// `F::SCALE / T::SCALE`: multiply a magnitude in `F` by this to get `T`
    pub const RATIO: Ratio = F::SCALE.div(T::SCALE);
}
