//! Errors for exact ratio construction
//!
//! These only surface through the checked ratio API. The unit table is
//! built from the panicking `const fn` forms, where the same conditions
//! become compile errors instead.

use thiserror::Error;

/// Error type for ratio operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RatioError {
    #[error("Ratio denominator is zero")]
    ZeroDenominator,

    #[error("Division by a zero ratio")]
    DivisionByZero,

    #[error("Overflow: {num}/{den} does not fit in 64 bits")]
    Overflow { num: u128, den: u128 },
}
