use crate::CoreError;

/// Floating point type used throughout the system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Round to the nearest integer, halves toward positive infinity.
///
/// Unlike `f64::round`, ties go up: -2.5 becomes -2.
#[inline]
pub fn round_half_up(v: Real) -> Real {
    (v + 0.5).floor()
}

/// Round to two decimal places (half-up).
#[inline]
pub fn round2(v: Real) -> Real {
    let r = round_half_up(v * 100.0) / 100.0;
    // -0.0 compares equal to 0.0 but prints as "-0"
    if r == 0.0 { 0.0 } else { r }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round2_stays_within_half_a_cent(v in -1.0e6_f64..1.0e6) {
            let r = round2(v);
            prop_assert!((r - v).abs() <= 0.005 + 1e-9);
            let cents = r * 100.0;
            prop_assert!((cents - cents.round()).abs() < 1e-6);
        }
    }
}
