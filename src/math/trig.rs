//! Single-precision vector sine and cosine
//!
//! Arguments are reduced modulo pi with the round-to-nearest shift trick:
//! adding 0x1.8p23 to `x/pi` forces the quotient into the integer lattice
//! of the f32 mantissa, so the quadrant parity is simply the lowest
//! mantissa bit of the shifted value. The reduced argument is recovered by
//! subtracting a three-part pi with FMAs, keeping the residual exact to
//! well below the polynomial's own error.
//!
//! The shift trick only rounds correctly while `|x|/pi` stays under the
//! mantissa lattice; lanes at or above 2^20 (and infinities) fall back to
//! the exact scalar kernels in [`crate::scalar`]. NaN lanes fail the
//! range compare and ride the fast path, where the arithmetic propagates
//! them unchanged.

use crate::math::special::scalar_fallback_f32;
use crate::traits::{SimdInt, SimdMask, SimdVector};

const PI_1: f32 = f32::from_bits(0x40490fdb);
const PI_2: f32 = f32::from_bits(0xb3bbbd2e);
const PI_3: f32 = f32::from_bits(0xa7772ced);
const INV_PI: f32 = f32::from_bits(0x3ea2f983);
const HALF_PI: f32 = f32::from_bits(0x3fc90fdb);
const SHIFT: f32 = f32::from_bits(0x4b400000); // 0x1.8p23
const RANGE_VAL: f32 = f32::from_bits(0x49800000); // 2^20

/// sin(r) ~ r + r^3 * poly(r^2) on [-pi/2, pi/2].
const POLY: [f32; 4] = [
    f32::from_bits(0xbe2aaaa4),
    f32::from_bits(0x3c0886fa),
    f32::from_bits(0xb94fa175),
    f32::from_bits(0x362d973b),
];

/// Subtract n*pi in three exact steps.
#[inline(always)]
fn reduce<V: SimdVector<Scalar = f32>>(x: V, n: V) -> V {
    let nn = n.neg();
    let r = nn.fma(V::splat(PI_1), x);
    let r = nn.fma(V::splat(PI_2), r);
    nn.fma(V::splat(PI_3), r)
}

/// Odd polynomial for sin on the reduced interval.
#[inline(always)]
fn sin_poly<V: SimdVector<Scalar = f32>>(r: V) -> V {
    let r2 = r.mul(r);
    let y = r2.fma(V::splat(POLY[3]), V::splat(POLY[2]));
    let y = r2.fma(y, V::splat(POLY[1]));
    let y = r2.fma(y, V::splat(POLY[0]));
    y.mul(r2).fma(r, r)
}

/// Single-precision vector sine.
///
/// # Example
///
/// ```rust
/// use lumen_math::{math, DefaultSimdVector, SimdVector};
///
/// let y = math::sinf(DefaultSimdVector::splat(core::f32::consts::FRAC_PI_6));
/// let mut out = [0.0; DefaultSimdVector::LANES];
/// y.to_slice(&mut out);
/// assert!((out[0] - 0.5).abs() < 1e-6);
/// ```
///
/// # Error Bounds
///
/// Maximum measured error is 1.9 ULP on the fast path (|x| < 2^20);
/// larger finite lanes use the exact scalar kernel (below 0.6 ULP).
///
/// # Special Cases
///
/// sinf(+-inf) = NaN with invalid raised on the fallback path;
/// sinf(NaN) = NaN.
pub fn sinf<V>(x: V) -> V
where
    V: SimdVector<Scalar = f32>,
    V::IntBits: SimdInt<Elem = u32>,
{
    let xa = x.abs();
    let special = xa.ge(V::splat(RANGE_VAL));

    // n = rint(|x|/pi); quadrant parity lands in mantissa bit 0 of the
    // shifted value, moved up to the sign position for the final flip.
    // Folding the argument's sign bit into the same flip makes
    // sin(-x) = -sin(x) exact, signed zero included.
    let shifted = xa.fma(V::splat(INV_PI), V::splat(SHIFT));
    let odd = shifted.to_bits().shl(31).xor(x.to_bits().and(0x8000_0000));
    let n = shifted.sub(V::splat(SHIFT));

    let r = reduce(xa, n);
    let y = sin_poly(r);
    let y = V::from_bits(y.to_bits().xor(odd));

    if special.any() {
        return scalar_fallback_f32(x, y, special, crate::scalar::sinf);
    }
    y
}

/// Single-precision vector cosine.
///
/// # Example
///
/// ```rust
/// use lumen_math::{math, DefaultSimdVector, SimdVector};
///
/// let y = math::cosf(DefaultSimdVector::splat(core::f32::consts::FRAC_PI_3));
/// let mut out = [0.0; DefaultSimdVector::LANES];
/// y.to_slice(&mut out);
/// assert!((out[0] - 0.5).abs() < 1e-6);
/// ```
///
/// # Error Bounds
///
/// Maximum measured error is 1.9 ULP on the fast path (|x| < 2^20);
/// larger finite lanes use the exact scalar kernel (below 0.6 ULP).
///
/// # Special Cases
///
/// cosf(+-inf) = NaN with invalid raised on the fallback path;
/// cosf(NaN) = NaN.
pub fn cosf<V>(x: V) -> V
where
    V: SimdVector<Scalar = f32>,
    V::IntBits: SimdInt<Elem = u32>,
{
    let xa = x.abs();
    let special = xa.ge(V::splat(RANGE_VAL));

    // cos(x) = sin(x + pi/2): shift the quadrant lattice by half before
    // rounding, then pull the half back out of n.
    let shifted = xa.add(V::splat(HALF_PI)).fma(V::splat(INV_PI), V::splat(SHIFT));
    let odd = shifted.to_bits().shl(31);
    let n = shifted.sub(V::splat(SHIFT)).sub(V::splat(0.5));

    let r = reduce(xa, n);
    let y = sin_poly(r);
    let y = V::from_bits(y.to_bits().xor(odd));

    if special.any() {
        return scalar_fallback_f32(x, y, special, crate::scalar::cosf);
    }
    y
}
