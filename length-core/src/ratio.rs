//! Exact rationals for unit scale factors
//!
//! All arithmetic is `const fn` so that scale tables are evaluated by the
//! compiler. Intermediate products are widened to `u128` and reduced before
//! narrowing back, so a chain like `12 × 254/100 × 1/100` never loses
//! exactness. Floating point only enters through [`Ratio::apply`].

use std::fmt;
use dashu_int::{IBig, UBig};
use dashu_ratio::RBig;
use crate::RatioError;

/// A non-negative rational number in lowest terms.
///
/// Invariants: `den > 0` and `gcd(num, den) == 1` (zero is stored as `0/1`).
/// Because the representation is canonical, the derived `PartialEq` is
/// exact rational equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    num: u64,
    den: u64,
}

const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Reduce a wide fraction and narrow it to 64 bits.
const fn reduce(num: u128, den: u128) -> Result<Ratio, RatioError> {
    if den == 0 {
        return Err(RatioError::ZeroDenominator);
    }
    if num == 0 {
        return Ok(Ratio::ZERO);
    }
    let g = gcd(num, den);
    let (num, den) = (num / g, den / g);
    if num > u64::MAX as u128 || den > u64::MAX as u128 {
        return Err(RatioError::Overflow { num, den });
    }
    Ok(Ratio { num: num as u64, den: den as u64 })
}

impl Ratio {
    pub const ZERO: Ratio = Ratio { num: 0, den: 1 };
    pub const ONE: Ratio = Ratio { num: 1, den: 1 };

    // ========== Construction ==========

    /// Create a ratio, reducing it to lowest terms
    pub const fn try_new(num: u64, den: u64) -> Result<Self, RatioError> {
        reduce(num as u128, den as u128)
    }

    /// Create a ratio, panicking on a zero denominator.
    ///
    /// In a constant context the panic is a compile error:
    ///
    /// ```compile_fail
    /// use length_core::Ratio;
    /// const BROKEN: Ratio = Ratio::new(1, 0);
    /// assert_eq!(BROKEN.numer(), 1);
    /// ```
    pub const fn new(num: u64, den: u64) -> Self {
        match Self::try_new(num, den) {
            Ok(r) => r,
            Err(_) => panic!("ratio denominator must be non-zero"),
        }
    }

    /// Create a whole-number ratio `n/1`
    pub const fn integer(n: u64) -> Self {
        Ratio { num: n, den: 1 }
    }

    // ========== Accessors ==========

    pub const fn numer(&self) -> u64 {
        self.num
    }

    pub const fn denom(&self) -> u64 {
        self.den
    }

    pub const fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }

    pub const fn is_positive(&self) -> bool {
        self.num > 0
    }

    // ========== Arithmetic ==========

    /// Exact product, failing if the reduced result exceeds 64 bits
    pub const fn checked_mul(self, rhs: Ratio) -> Result<Self, RatioError> {
        reduce(
            self.num as u128 * rhs.num as u128,
            self.den as u128 * rhs.den as u128,
        )
    }

    /// Exact quotient
    pub const fn checked_div(self, rhs: Ratio) -> Result<Self, RatioError> {
        if rhs.num == 0 {
            return Err(RatioError::DivisionByZero);
        }
        reduce(
            self.num as u128 * rhs.den as u128,
            self.den as u128 * rhs.num as u128,
        )
    }

    /// Exact product for constant tables
    pub const fn mul(self, rhs: Ratio) -> Self {
        match self.checked_mul(rhs) {
            Ok(r) => r,
            Err(_) => panic!("ratio product overflows 64 bits"),
        }
    }

    /// Exact quotient for constant tables
    pub const fn div(self, rhs: Ratio) -> Self {
        match self.checked_div(rhs) {
            Ok(r) => r,
            Err(RatioError::DivisionByZero) => panic!("ratio division by zero"),
            Err(_) => panic!("ratio quotient overflows 64 bits"),
        }
    }

    pub const fn recip(self) -> Self {
        Ratio::ONE.div(self)
    }

    // ========== Floating point ==========

    /// Scale `value` by this ratio: `value * num / den`.
    ///
    /// Numerator first, then denominator, as one multiply and one divide.
    /// This is the only point where a conversion rounds.
    pub const fn apply(self, value: f64) -> f64 {
        value * self.num as f64 / self.den as f64
    }

    /// Nearest `f64` to this ratio
    pub const fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl TryFrom<(u64, u64)> for Ratio {
    type Error = RatioError;

    fn try_from((num, den): (u64, u64)) -> Result<Self, Self::Error> {
        Ratio::try_new(num, den)
    }
}

impl From<Ratio> for RBig {
    fn from(r: Ratio) -> Self {
        RBig::from_parts(IBig::from(r.num), UBig::from(r.den))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reduces() {
        let r = Ratio::new(254, 10000);
        assert_eq!(r.numer(), 127);
        assert_eq!(r.denom(), 5000);
    }

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(Ratio::new(0, 17), Ratio::ZERO);
        assert!(!Ratio::ZERO.is_positive());
    }

    #[test]
    fn test_try_new_zero_denominator() {
        assert_eq!(Ratio::try_new(3, 0), Err(RatioError::ZeroDenominator));
        assert_eq!(Ratio::try_from((3, 0)), Err(RatioError::ZeroDenominator));
    }

    #[test]
    fn test_mul_chain_stays_exact() {
        // foot = 12 * (254/100 * 1/100)
        let cm = Ratio::new(1, 100);
        let inch = Ratio::new(254, 100).mul(cm);
        let foot = Ratio::integer(12).mul(inch);
        assert_eq!(inch, Ratio::new(127, 5000));
        assert_eq!(foot, Ratio::new(381, 1250));
    }

    #[test]
    fn test_div() {
        let inch = Ratio::new(127, 5000);
        let foot = Ratio::new(381, 1250);
        assert_eq!(inch.div(foot), Ratio::new(1, 12));
        assert_eq!(foot.div(inch), Ratio::integer(12));
        assert!(foot.div(foot).is_one());
    }

    #[test]
    fn test_checked_div_by_zero() {
        assert_eq!(Ratio::ONE.checked_div(Ratio::ZERO), Err(RatioError::DivisionByZero));
    }

    #[test]
    fn test_checked_mul_overflow() {
        let big = Ratio::integer(u64::MAX);
        let err = big.checked_mul(Ratio::integer(2)).unwrap_err();
        assert!(matches!(err, RatioError::Overflow { .. }));
    }

    #[test]
    fn test_wide_intermediate_reduces_back() {
        // (2^63 / 3) * (3 / 2^62) = 2, though the raw product needs 128 bits
        let a = Ratio::new(1 << 63, 3);
        let b = Ratio::new(3, 1 << 62);
        assert_eq!(a.checked_mul(b), Ok(Ratio::integer(2)));
    }

    #[test]
    fn test_recip() {
        assert_eq!(Ratio::new(1, 1000).recip(), Ratio::integer(1000));
    }

    #[test]
    fn test_apply_multiplies_then_divides() {
        assert_eq!(Ratio::new(1, 100).apply(250.0), 2.5);
        assert_eq!(Ratio::integer(100).apply(2.5), 250.0);
        assert_eq!(Ratio::ONE.apply(0.1), 0.1);
        // 39.37007874015748 * 127 / 5000 rounds back to exactly 1.0
        assert_eq!(Ratio::new(127, 5000).apply(1.0 / 0.0254), 1.0);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Ratio::new(1, 4).to_f64(), 0.25);
        assert_eq!(Ratio::new(1, 100).to_f64(), 0.01);
    }

    #[test]
    fn test_const_evaluation() {
        const FOOT: Ratio = Ratio::integer(12).mul(Ratio::new(254, 10000));
        assert_eq!(FOOT.numer(), 381);
        assert_eq!(FOOT.denom(), 1250);
    }

    #[test]
    fn test_to_rbig_is_exact() {
        let inch: RBig = Ratio::new(254, 10000).into();
        let expected = RBig::from_parts(IBig::from(127u64), UBig::from(5000u64));
        assert_eq!(inch, expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Ratio::integer(12)), "12");
        assert_eq!(format!("{}", Ratio::new(2, 4)), "1/2");
    }
}
