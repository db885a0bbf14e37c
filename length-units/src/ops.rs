//! Length algebra
//!
//! Cross-unit operands are brought into the left operand's unit through
//! [`convert`], so the result of `a + b`, `a - b`, `a == b` and `a / b` is
//! always expressed in the unit of `a`. When both tags are the same the
//! conversion is skipped; the identity ratio makes that path bit-identical
//! to the general one.

use std::any::TypeId;
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};
use crate::convert::convert;
use crate::{Length, LengthUnit};

fn same_unit<U: LengthUnit, V: LengthUnit>() -> bool {
    TypeId::of::<U>() == TypeId::of::<V>()
}

/// Magnitude of `rhs` expressed in unit `U`
#[inline]
fn in_unit_of<U: LengthUnit, V: LengthUnit>(rhs: Length<V>) -> f64 {
    if same_unit::<U, V>() {
        return rhs.value();
    }
    trace_conversion::<V, U>(rhs.value());
    convert::<V, U>(rhs).value()
}

#[cfg(feature = "tracing")]
fn trace_conversion<F: LengthUnit, T: LengthUnit>(value: f64) {
    let ratio = crate::Conversion::<F, T>::RATIO;
    tracing::trace!(
        from = F::SYMBOL,
        to = T::SYMBOL,
        %ratio,
        value,
        "converting operand"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn trace_conversion<F: LengthUnit, T: LengthUnit>(_value: f64) {}

// ============ comparison ============

impl<U: LengthUnit, V: LengthUnit> PartialEq<Length<V>> for Length<U> {
    /// Exact floating-point equality after converting `other` into `U`
    fn eq(&self, other: &Length<V>) -> bool {
        self.value() == in_unit_of::<U, V>(*other)
    }
}

impl<U: LengthUnit, V: LengthUnit> PartialOrd<Length<V>> for Length<U> {
    fn partial_cmp(&self, other: &Length<V>) -> Option<Ordering> {
        self.value().partial_cmp(&in_unit_of::<U, V>(*other))
    }
}

// ============ addition / subtraction ============

impl<U: LengthUnit, V: LengthUnit> Add<Length<V>> for Length<U> {
    type Output = Length<U>;

    fn add(self, rhs: Length<V>) -> Length<U> {
        Length::new(self.value() + in_unit_of::<U, V>(rhs))
    }
}

impl<U: LengthUnit, V: LengthUnit> Sub<Length<V>> for Length<U> {
    type Output = Length<U>;

    fn sub(self, rhs: Length<V>) -> Length<U> {
        Length::new(self.value() - in_unit_of::<U, V>(rhs))
    }
}

impl<U: LengthUnit> Neg for Length<U> {
    type Output = Length<U>;

    fn neg(self) -> Length<U> {
        Length::new(-self.value())
    }
}

impl<U: LengthUnit> Sum for Length<U> {
    fn sum<I: Iterator<Item = Length<U>>>(iter: I) -> Self {
        iter.fold(Length::zero(), |acc, x| acc + x)
    }
}

// ============ scaling ============

impl<U: LengthUnit> Mul<f64> for Length<U> {
    type Output = Length<U>;

    fn mul(self, k: f64) -> Length<U> {
        Length::new(k * self.value())
    }
}

impl<U: LengthUnit> Mul<Length<U>> for f64 {
    type Output = Length<U>;

    fn mul(self, length: Length<U>) -> Length<U> {
        Length::new(self * length.value())
    }
}

// ============ division ============

impl<U: LengthUnit> Div<f64> for Length<U> {
    type Output = Length<U>;

    /// IEEE division: dividing by zero yields an infinite or NaN length
    fn div(self, k: f64) -> Length<U> {
        Length::new(self.value() / k)
    }
}

impl<U: LengthUnit, V: LengthUnit> Div<Length<V>> for Length<U> {
    /// Lengths cancel, leaving a plain number
    type Output = f64;

    fn div(self, rhs: Length<V>) -> f64 {
        self.value() / in_unit_of::<U, V>(rhs)
    }
}
