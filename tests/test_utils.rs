//! Shared helpers for the integration tests.
#![allow(dead_code)]

use lumen_math::{DefaultSimdDouble, DefaultSimdVector, SimdVector};

/// Run an f32 vector kernel on a single splatted value and return lane 0.
pub fn apply_f32(f: impl Fn(DefaultSimdVector) -> DefaultSimdVector, x: f32) -> f32 {
    let mut out = [0.0f32; DefaultSimdVector::LANES];
    f(DefaultSimdVector::splat(x)).to_slice(&mut out);
    out[0]
}

/// Run an f64 vector kernel on a single splatted value and return lane 0.
pub fn apply_f64(f: impl Fn(DefaultSimdDouble) -> DefaultSimdDouble, x: f64) -> f64 {
    let mut out = [0.0f64; DefaultSimdDouble::LANES];
    f(DefaultSimdDouble::splat(x)).to_slice(&mut out);
    out[0]
}

/// ULP distance of an f32 result from a double-precision reference.
///
/// The reference carries ~29 extra mantissa bits, so its own error is
/// negligible at the thresholds the tests assert.
pub fn ulp_diff_f32(got: f32, reference: f64) -> f64 {
    if got.is_nan() && reference.is_nan() {
        return 0.0;
    }
    let r = reference as f32;
    if got == r && got.is_infinite() {
        return 0.0;
    }
    let ulp = if r == 0.0 {
        f32::from_bits(1) as f64
    } else {
        (f32::from_bits(r.to_bits() ^ 1) as f64 - r as f64).abs()
    };
    (got as f64 - reference).abs() / ulp
}

/// Bit distance between two finite f64 values of the same sign.
///
/// Used against libm references, which are themselves sub-ULP accurate;
/// thresholds in the tests allow one extra ULP for the reference.
pub fn ulp_diff_f64(got: f64, reference: f64) -> u64 {
    if got.is_nan() && reference.is_nan() {
        return 0;
    }
    got.to_bits().abs_diff(reference.to_bits())
}
