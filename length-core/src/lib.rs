//! Length Core - Fundamental types
//!
//! This crate provides the core types used throughout length:
//! - `Ratio`: Exact, compile-time rational numbers for unit scale factors
//! - `RatioError`: Failures of the checked ratio API

mod ratio;
mod error;

pub use ratio::Ratio;
pub use error::RatioError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Ratio, RatioError};
}
