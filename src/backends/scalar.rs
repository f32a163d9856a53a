//! Scalar (1-lane) backend
//!
//! Wraps a single `f32`/`f64` value in the [`SimdVector`] interface. This is
//! the portable fallback when no SIMD feature is enabled, and the reference
//! the wide backends are checked against: a kernel must produce the same bit
//! pattern for a lane whether it ran 1-wide or 8-wide.
//!
//! FMA goes through `libm` so the contraction behaviour matches the hardware
//! backends instead of depending on how the compiler fuses `a * b + c`.

use crate::traits::{SimdInt, SimdMask, SimdVector};

/// Scalar "vector" holding one float lane
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScalarVector<T>(pub(crate) T);

/// Scalar 32-bit integer lane paired with `ScalarVector<f32>`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScalarInt(pub(crate) u32);

/// Scalar 64-bit integer lane paired with `ScalarVector<f64>`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScalarInt64(pub(crate) u64);

/// Scalar boolean mask
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScalarMask(pub(crate) bool);

impl SimdVector for ScalarVector<f32> {
    type Scalar = f32;
    type Mask = ScalarMask;
    type IntBits = ScalarInt;
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f32]) {
        slice[0] = self.0;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0 + rhs.0)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0 - rhs.0)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0 * rhs.0)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        ScalarVector(self.0 / rhs.0)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(-self.0)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        ScalarVector(libm::fabsf(self.0))
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        ScalarVector(libm::fmaf(self.0, b.0, c.0))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 > rhs.0)
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 >= rhs.0)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 == rhs.0)
    }

    #[inline(always)]
    fn select(mask: ScalarMask, true_val: Self, false_val: Self) -> Self {
        if mask.0 {
            true_val
        } else {
            false_val
        }
    }

    #[inline(always)]
    fn to_bits(self) -> ScalarInt {
        ScalarInt(self.0.to_bits())
    }

    #[inline(always)]
    fn from_bits(bits: ScalarInt) -> Self {
        ScalarVector(f32::from_bits(bits.0))
    }
}

impl SimdVector for ScalarVector<f64> {
    type Scalar = f64;
    type Mask = ScalarMask;
    type IntBits = ScalarInt64;
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f64]) {
        slice[0] = self.0;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0 + rhs.0)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0 - rhs.0)
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        ScalarVector(self.0 * rhs.0)
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        ScalarVector(self.0 / rhs.0)
    }

    #[inline(always)]
    fn neg(self) -> Self {
        ScalarVector(-self.0)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        ScalarVector(libm::fabs(self.0))
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        ScalarVector(libm::fma(self.0, b.0, c.0))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 > rhs.0)
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 >= rhs.0)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> ScalarMask {
        ScalarMask(self.0 == rhs.0)
    }

    #[inline(always)]
    fn select(mask: ScalarMask, true_val: Self, false_val: Self) -> Self {
        if mask.0 {
            true_val
        } else {
            false_val
        }
    }

    #[inline(always)]
    fn to_bits(self) -> ScalarInt64 {
        ScalarInt64(self.0.to_bits())
    }

    #[inline(always)]
    fn from_bits(bits: ScalarInt64) -> Self {
        ScalarVector(f64::from_bits(bits.0))
    }
}

impl SimdInt for ScalarInt {
    type Elem = u32;
    type FloatVec = ScalarVector<f32>;
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        ScalarInt(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[u32]) -> Self {
        ScalarInt(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [u32]) {
        slice[0] = self.0;
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        ScalarInt(self.0 << n)
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        ScalarInt(self.0 >> n)
    }

    #[inline(always)]
    fn asr(self, n: u32) -> Self {
        ScalarInt(((self.0 as i32) >> n) as u32)
    }

    #[inline(always)]
    fn and(self, rhs: u32) -> Self {
        ScalarInt(self.0 & rhs)
    }

    #[inline(always)]
    fn or(self, rhs: u32) -> Self {
        ScalarInt(self.0 | rhs)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        ScalarInt(self.0 ^ rhs.0)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarInt(self.0.wrapping_sub(rhs.0))
    }

    #[inline(always)]
    fn unsigned_ge(self, bound: u32) -> ScalarMask {
        ScalarMask(self.0 >= bound)
    }

    #[inline(always)]
    fn to_float_signed(self) -> ScalarVector<f32> {
        ScalarVector(self.0 as i32 as f32)
    }
}

impl SimdInt for ScalarInt64 {
    type Elem = u64;
    type FloatVec = ScalarVector<f64>;
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        ScalarInt64(value)
    }

    #[inline(always)]
    fn from_slice(slice: &[u64]) -> Self {
        ScalarInt64(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [u64]) {
        slice[0] = self.0;
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        ScalarInt64(self.0 << n)
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        ScalarInt64(self.0 >> n)
    }

    #[inline(always)]
    fn asr(self, n: u32) -> Self {
        ScalarInt64(((self.0 as i64) >> n) as u64)
    }

    #[inline(always)]
    fn and(self, rhs: u64) -> Self {
        ScalarInt64(self.0 & rhs)
    }

    #[inline(always)]
    fn or(self, rhs: u64) -> Self {
        ScalarInt64(self.0 | rhs)
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        ScalarInt64(self.0 ^ rhs.0)
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarInt64(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarInt64(self.0.wrapping_sub(rhs.0))
    }

    #[inline(always)]
    fn unsigned_ge(self, bound: u64) -> ScalarMask {
        ScalarMask(self.0 >= bound)
    }

    #[inline(always)]
    fn to_float_signed(self) -> ScalarVector<f64> {
        ScalarVector(self.0 as i64 as f64)
    }
}

impl SimdMask for ScalarMask {
    #[inline(always)]
    fn all(self) -> bool {
        self.0
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.0
    }

    #[inline(always)]
    fn none(self) -> bool {
        !self.0
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        ScalarMask(self.0 & rhs.0)
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        ScalarMask(self.0 | rhs.0)
    }

    #[inline(always)]
    fn not(self) -> Self {
        ScalarMask(!self.0)
    }

    #[inline(always)]
    fn to_bitmask(self) -> u64 {
        self.0 as u64
    }
}
