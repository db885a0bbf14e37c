//! Length type - a magnitude tagged with a unit at compile time

use std::fmt::{self, Write};
use std::marker::PhantomData;
use crate::convert::convert;
use crate::LengthUnit;

/// A length measured in unit `U`.
///
/// The unit lives only in the type; at runtime this is a bare `f64`.
/// Values are immutable: every operation returns a new `Length`.
#[repr(transparent)]
pub struct Length<U: LengthUnit> {
    value: f64,
    unit: PhantomData<U>,
}

impl<U: LengthUnit> Length<U> {
    /// Create a length of `value` units of `U`
    pub const fn new(value: f64) -> Self {
        const { assert!(U::SCALE.is_positive(), "length unit scale must be strictly positive") };
        Length { value, unit: PhantomData }
    }

    pub const fn zero() -> Self {
        Self::new(0.0)
    }

    /// Value of length measured in its own units
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Convert to unit `V`; method form of [`convert`]
    pub const fn to<V: LengthUnit>(self) -> Length<V> {
        convert::<U, V>(self)
    }

    /// Magnitude in the canonical unit (metres)
    pub const fn in_metres(&self) -> f64 {
        U::SCALE.apply(self.value)
    }

    pub const fn unit_symbol(&self) -> &'static str {
        U::SYMBOL
    }
}

impl<U: LengthUnit> Clone for Length<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: LengthUnit> Copy for Length<U> {}

impl<U: LengthUnit> Default for Length<U> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<U: LengthUnit> fmt::Debug for Length<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Length")
            .field("value", &self.value)
            .field("unit", &U::SYMBOL)
            .finish()
    }
}

impl<U: LengthUnit> fmt::Display for Length<U> {
    /// `"{value} {symbol}"`. Precision applies to the magnitude; width, fill
    /// and alignment apply to the whole text, left-aligned by default.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match f.precision() {
            Some(places) => format!("{:.*} {}", places, self.value, U::SYMBOL),
            None => format!("{} {}", self.value, U::SYMBOL),
        };

        let pad = f.width().unwrap_or(0).saturating_sub(text.chars().count());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (pad, 0),
            Some(fmt::Alignment::Center) => (pad / 2, pad - pad / 2),
            _ => (0, pad),
        };

        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}
