//! Single-precision vector logarithms
//!
//! Unlike the double-precision kernels there is no lookup table: with only
//! 24 mantissa bits a single polynomial over [-1/3, 1/3] reaches the error
//! budget. The reduction subtracts the bit pattern of 2/3 so the mantissa
//! splits around 1.0, i.e. `x = 2^n * (1+r)` with `2/3 <= 1+r < 4/3`.

use crate::math::special::{log_special_lanes_f32, scalar_fallback_f32};
use crate::traits::{SimdInt, SimdMask, SimdVector};

const OFF: u32 = 0x3f2aaaab; // bits(2/3)
const MANTISSA_MASK: u32 = 0x007fffff;

const LN2: f32 = f32::from_bits(0x3f317218);
const INV_LN10: f32 = f32::from_bits(0x3ede5bd9);

/// log(1+r) ~ n*ln2 + r + r^2 * poly(r), degree 7 in r.
const POLY_LN: [f32; 7] = [
    f32::from_bits(0xbe1f39be),
    f32::from_bits(0x3e2d4d51),
    f32::from_bits(0xbe27cc9a),
    f32::from_bits(0x3e4b09a4),
    f32::from_bits(0xbe800c3e),
    f32::from_bits(0x3eaaaebe),
    f32::from_bits(0xbeffffe4),
];

/// log10(1+r) ~ (n*ln2 + r)/ln10 + poly(r), degree 8 in r for the
/// correction term (coefficients already carry the 1/ln10 factor).
const POLY_LOG10: [f32; 8] = [
    f32::from_bits(0xbe5e5bce),
    f32::from_bits(0x3e143ce4),
    f32::from_bits(0xbdde6a39),
    f32::from_bits(0x3db2047c),
    f32::from_bits(0xbd9237c0),
    f32::from_bits(0x3d78728a),
    f32::from_bits(0xbd87e496),
    f32::from_bits(0x3d7afbb5),
];

/// Split off the exponent and the centered mantissa: returns (n, r) with
/// x = 2^n * (1+r).
#[inline(always)]
fn reduce<V>(x: V) -> (V, V)
where
    V: SimdVector<Scalar = f32>,
    V::IntBits: SimdInt<Elem = u32>,
{
    let u = x.to_bits().sub(V::IntBits::splat(OFF));
    let n = u.asr(23).to_float_signed();
    let u = u.and(MANTISSA_MASK).add(V::IntBits::splat(OFF));
    let r = V::from_bits(u).sub(V::splat(1.0));
    (n, r)
}

/// Single-precision vector natural logarithm.
///
/// # Example
///
/// ```rust
/// use lumen_math::{math, DefaultSimdVector, SimdVector};
///
/// let y = math::logf(DefaultSimdVector::splat(1.0));
/// let mut out = [0.0; DefaultSimdVector::LANES];
/// y.to_slice(&mut out);
/// assert_eq!(out[0], 0.0);
/// ```
///
/// # Error Bounds
///
/// Maximum measured error is 3.34 ULP. logf(1.0) is exactly 0.0: the
/// reduction leaves n = 0 and r = 0, so every term vanishes.
///
/// # Special Cases
///
/// Lane-wise libm conventions: logf(0) = -inf, logf(x < 0) = NaN,
/// logf(inf) = inf, logf(NaN) = NaN; subnormals take the exact scalar path.
pub fn logf<V>(x: V) -> V
where
    V: SimdVector<Scalar = f32>,
    V::IntBits: SimdInt<Elem = u32>,
{
    let special = log_special_lanes_f32(x);
    let (n, r) = reduce(x);

    // n*ln2 + r + r2*(P6 + r*P5 + r2*(P4 + r*P3 + r2*(P2 + r*P1 + r2*P0)))
    let p = &POLY_LN;
    let r2 = r.mul(r);
    let q = r.fma(V::splat(p[1]), V::splat(p[2]));
    let q = r2.fma(V::splat(p[0]), q);
    let t = r.fma(V::splat(p[3]), V::splat(p[4]));
    let t = r2.fma(q, t);
    let y = r.fma(V::splat(p[5]), V::splat(p[6]));
    let y = r2.fma(t, y);
    let hi = n.fma(V::splat(LN2), r);
    let y = r2.fma(y, hi);

    if special.any() {
        return scalar_fallback_f32(x, y, special, libm::logf);
    }
    y
}

/// Single-precision vector base-10 logarithm.
///
/// # Example
///
/// ```rust
/// use lumen_math::{math, DefaultSimdVector, SimdVector};
///
/// let y = math::log10f(DefaultSimdVector::splat(1000.0));
/// let mut out = [0.0; DefaultSimdVector::LANES];
/// y.to_slice(&mut out);
/// assert!((out[0] - 3.0).abs() < 1e-5);
/// ```
///
/// # Error Bounds
///
/// Maximum measured error is 3.31 ULP.
///
/// # Special Cases
///
/// Same lane-wise conventions as [`logf`].
pub fn log10f<V>(x: V) -> V
where
    V: SimdVector<Scalar = f32>,
    V::IntBits: SimdInt<Elem = u32>,
{
    let special = log_special_lanes_f32(x);
    let (n, r) = reduce(x);

    // log10(1+r) = r/ln10 + r2*poly(r); add n*log10(2) as (n*ln2 + r)/ln10
    // so a single multiply by 1/ln10 covers both terms.
    let c = &POLY_LOG10;
    let r2 = r.mul(r);
    let r4 = r2.mul(r2);
    let q01 = r.fma(V::splat(c[1]), V::splat(c[0]));
    let q23 = r.fma(V::splat(c[3]), V::splat(c[2]));
    let q45 = r.fma(V::splat(c[5]), V::splat(c[4]));
    let q67 = r.fma(V::splat(c[7]), V::splat(c[6]));
    let q47 = r2.fma(q67, q45);
    let q03 = r2.fma(q23, q01);
    let y = r4.fma(q47, q03);

    let hi = n.fma(V::splat(LN2), r).mul(V::splat(INV_LN10));
    let y = r2.fma(y, hi);

    if special.any() {
        return scalar_fallback_f32(x, y, special, libm::log10f);
    }
    y
}
