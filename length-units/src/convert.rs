//! Unit conversion

use crate::unit::Conversion;
use crate::{Length, LengthUnit};

/// Converts a `Length` in `F` to the same length in `T`.
///
/// The ratio `F::SCALE / T::SCALE` is computed exactly at compile time and
/// applied to the magnitude with a single multiply-divide.
///
/// ```
/// use length_units::{convert, Centimetre, Foot, Inch, Length, Metre};
///
/// let m: Length<Metre> = convert::<Centimetre, Metre>(Length::new(25.0));
/// assert_eq!(m.value(), 0.25);
///
/// let ft: Length<Foot> = convert::<Inch, Foot>(Length::new(24.0));
/// assert_eq!(ft.value(), 2.0);
/// ```
pub const fn convert<F: LengthUnit, T: LengthUnit>(from: Length<F>) -> Length<T> {
    Length::new(Conversion::<F, T>::RATIO.apply(from.value()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Centimetre, Foot, Inch, Metre, Millimetre};

    #[test]
    fn test_convert_cm_to_m() {
        let m = convert::<Centimetre, Metre>(Length::new(250.0));
        assert_eq!(m.value(), 2.5);
    }

    #[test]
    fn test_convert_cm_to_mm() {
        let mm = convert::<Centimetre, Millimetre>(Length::new(200.0));
        assert_eq!(mm.value(), 2000.0);
    }

    #[test]
    fn test_convert_ft_to_in() {
        let inches = convert::<Foot, Inch>(Length::new(3.0));
        assert_eq!(inches.value(), 36.0);
    }

    #[test]
    fn test_convert_in_to_m() {
        let m = convert::<Inch, Metre>(Length::new(1.0 / 0.0254));
        assert_eq!(m.value(), 1.0);
    }

    #[test]
    fn test_convert_identity() {
        for v in [0.0, 1.0, -2.5, 0.1, 1e300, f64::MIN_POSITIVE] {
            assert_eq!(convert::<Inch, Inch>(Length::new(v)).value(), v);
            assert_eq!(convert::<Metre, Metre>(Length::new(v)).value(), v);
        }
    }

    #[test]
    fn test_convert_preserves_metres() {
        let ft = Length::<Foot>::new(10.0);
        let mm = convert::<Foot, Millimetre>(ft);
        assert_eq!(mm.value(), 3048.0);
        assert_eq!(mm.in_metres(), ft.in_metres());
    }

    #[test]
    fn test_convert_propagates_non_finite() {
        let inf = convert::<Metre, Centimetre>(Length::new(f64::INFINITY));
        assert_eq!(inf.value(), f64::INFINITY);
        let nan = convert::<Foot, Inch>(Length::new(f64::NAN));
        assert!(nan.value().is_nan());
    }
}
