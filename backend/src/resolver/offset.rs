//! Conversion of caller offsets into checked integer offsets.
//!
//! Offsets arrive from many places: parser cursors (`usize`), editor
//! protocols (`u32`/`i64`) and scripting bridges (`f64`). Integers are
//! widened to `i128` so negative and oversized values survive long enough
//! for the range check to report them.

use std::fmt;

use crate::resolver::error::ResolveError;

/// 2^127, the first float magnitude `i128` cannot hold.
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// An integral offset that has not been range checked yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Offset {
    Int(i128),
    /// Integral float too large for `i128`. Never in range.
    Huge(f64),
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Offset::Int(n) => write!(f, "{n}"),
            Offset::Huge(x) => write!(f, "{x}"),
        }
    }
}

/// A value that can be used as an offset into a text.
pub trait IntoOffset {
    /// Fails with [`ResolveError::InvalidArgument`] if the value is not an
    /// integer. Range is not checked here.
    fn into_offset(self) -> Result<Offset, ResolveError>;
}

impl IntoOffset for Offset {
    fn into_offset(self) -> Result<Offset, ResolveError> {
        Ok(self)
    }
}

macro_rules! impl_into_offset_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoOffset for $t {
                fn into_offset(self) -> Result<Offset, ResolveError> {
                    Ok(Offset::Int(self as i128))
                }
            }
        )*
    };
}

macro_rules! impl_into_offset_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoOffset for $t {
                fn into_offset(self) -> Result<Offset, ResolveError> {
                    if !self.is_finite() || self.fract() != 0.0 {
                        return Err(ResolveError::invalid_argument(self));
                    }
                    let wide = self as f64;
                    if wide >= I128_LIMIT || wide < -I128_LIMIT {
                        Ok(Offset::Huge(wide))
                    } else {
                        Ok(Offset::Int(self as i128))
                    }
                }
            }
        )*
    };
}

impl_into_offset_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, i128);
impl_into_offset_float!(f32, f64);

impl<T: IntoOffset + Copy> IntoOffset for &T {
    fn into_offset(self) -> Result<Offset, ResolveError> {
        (*self).into_offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_pass_through() {
        assert_eq!(7usize.into_offset(), Ok(Offset::Int(7)));
        assert_eq!((-3i32).into_offset(), Ok(Offset::Int(-3)));
        assert_eq!(u64::MAX.into_offset(), Ok(Offset::Int(u64::MAX as i128)));
        assert_eq!((&12u32).into_offset(), Ok(Offset::Int(12)));
    }

    #[test]
    fn integral_floats_are_accepted() {
        assert_eq!(4.0f64.into_offset(), Ok(Offset::Int(4)));
        assert_eq!((-2.0f32).into_offset(), Ok(Offset::Int(-2)));
        assert_eq!((-0.0f64).into_offset(), Ok(Offset::Int(0)));
    }

    #[test]
    fn fractional_floats_are_rejected() {
        assert_eq!(
            1.5f64.into_offset(),
            Err(ResolveError::invalid_argument("1.5"))
        );
        assert_eq!(
            (-0.25f32).into_offset(),
            Err(ResolveError::invalid_argument("-0.25"))
        );
    }

    #[test]
    fn f32_is_reported_as_written() {
        assert_eq!(
            1.1f32.into_offset(),
            Err(ResolveError::invalid_argument("1.1"))
        );
    }

    #[test]
    fn non_finite_floats_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                value.into_offset(),
                Err(ResolveError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn floats_beyond_i128_are_kept_whole() {
        assert_eq!(1e300f64.into_offset(), Ok(Offset::Huge(1e300)));
        assert_eq!((-1e300f64).into_offset(), Ok(Offset::Huge(-1e300)));
        assert_eq!(f32::MAX.into_offset(), Ok(Offset::Huge(f32::MAX as f64)));
        assert_eq!(Offset::Huge(1e300).to_string(), 1e300f64.to_string());
    }
}
