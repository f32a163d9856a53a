//! NEON backend (4×f32 / 2×f64) for aarch64
//!
//! Newtype wrappers over `float32x4_t`/`float64x2_t` and their unsigned
//! integer views. NEON comparisons already yield all-ones/all-zeros lanes
//! in `uint32x4_t`/`uint64x2_t`, so masks are integer vectors and blend
//! through `vbslq`.
//!
//! NEON shifts take a per-lane signed count; a negative count shifts right,
//! which is how `shr`/`asr` are expressed here.

use core::arch::aarch64::*;

use crate::traits::{SimdInt, SimdMask, SimdVector};

/// NEON vector of 4 single-precision lanes
#[derive(Copy, Clone, Debug)]
pub struct NeonVector(pub(crate) float32x4_t);

/// NEON vector of 2 double-precision lanes
#[derive(Copy, Clone, Debug)]
pub struct NeonDouble(pub(crate) float64x2_t);

/// NEON vector of 4 u32 lanes (bit view of [`NeonVector`])
#[derive(Copy, Clone, Debug)]
pub struct NeonInt(pub(crate) uint32x4_t);

/// NEON vector of 2 u64 lanes (bit view of [`NeonDouble`])
#[derive(Copy, Clone, Debug)]
pub struct NeonInt64(pub(crate) uint64x2_t);

/// Mask for 4 f32 lanes (all-ones or all-zeros per lane)
#[derive(Copy, Clone, Debug)]
pub struct NeonMask(pub(crate) uint32x4_t);

/// Mask for 2 f64 lanes (all-ones or all-zeros per lane)
#[derive(Copy, Clone, Debug)]
pub struct NeonDoubleMask(pub(crate) uint64x2_t);

impl SimdVector for NeonVector {
    type Scalar = f32;
    type Mask = NeonMask;
    type IntBits = NeonInt;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { NeonVector(vdupq_n_f32(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { NeonVector(vld1q_f32(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f32]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { vst1q_f32(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonVector(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonVector(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonVector(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { NeonVector(vdivq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { NeonVector(vnegq_f32(self.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { NeonVector(vabsq_f32(self.0)) }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        // vfmaq computes acc + a * b; the accumulator goes first.
        unsafe { NeonVector(vfmaq_f32(c.0, self.0, b.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vcltq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vcgtq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vcgeq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> NeonMask {
        unsafe { NeonMask(vceqq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: NeonMask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonVector(vbslq_f32(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn to_bits(self) -> NeonInt {
        unsafe { NeonInt(vreinterpretq_u32_f32(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: NeonInt) -> Self {
        unsafe { NeonVector(vreinterpretq_f32_u32(bits.0)) }
    }
}

impl SimdVector for NeonDouble {
    type Scalar = f64;
    type Mask = NeonDoubleMask;
    type IntBits = NeonInt64;
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        unsafe { NeonDouble(vdupq_n_f64(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { NeonDouble(vld1q_f64(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f64]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { vst1q_f64(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonDouble(vaddq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonDouble(vsubq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { NeonDouble(vmulq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { NeonDouble(vdivq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { NeonDouble(vnegq_f64(self.0)) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe { NeonDouble(vabsq_f64(self.0)) }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { NeonDouble(vfmaq_f64(c.0, self.0, b.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> NeonDoubleMask {
        unsafe { NeonDoubleMask(vcltq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> NeonDoubleMask {
        unsafe { NeonDoubleMask(vcgtq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> NeonDoubleMask {
        unsafe { NeonDoubleMask(vcgeq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> NeonDoubleMask {
        unsafe { NeonDoubleMask(vceqq_f64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: NeonDoubleMask, true_val: Self, false_val: Self) -> Self {
        unsafe { NeonDouble(vbslq_f64(mask.0, true_val.0, false_val.0)) }
    }

    #[inline(always)]
    fn to_bits(self) -> NeonInt64 {
        unsafe { NeonInt64(vreinterpretq_u64_f64(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: NeonInt64) -> Self {
        unsafe { NeonDouble(vreinterpretq_f64_u64(bits.0)) }
    }
}

impl SimdInt for NeonInt {
    type Elem = u32;
    type FloatVec = NeonVector;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        unsafe { NeonInt(vdupq_n_u32(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[u32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { NeonInt(vld1q_u32(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [u32]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { vst1q_u32(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        unsafe { NeonInt(vshlq_u32(self.0, vdupq_n_s32(n as i32))) }
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        unsafe { NeonInt(vshlq_u32(self.0, vdupq_n_s32(-(n as i32)))) }
    }

    #[inline(always)]
    fn asr(self, n: u32) -> Self {
        unsafe {
            let signed = vreinterpretq_s32_u32(self.0);
            NeonInt(vreinterpretq_u32_s32(vshlq_s32(signed, vdupq_n_s32(-(n as i32)))))
        }
    }

    #[inline(always)]
    fn and(self, rhs: u32) -> Self {
        unsafe { NeonInt(vandq_u32(self.0, vdupq_n_u32(rhs))) }
    }

    #[inline(always)]
    fn or(self, rhs: u32) -> Self {
        unsafe { NeonInt(vorrq_u32(self.0, vdupq_n_u32(rhs))) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonInt(veorq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonInt(vaddq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonInt(vsubq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn unsigned_ge(self, bound: u32) -> NeonMask {
        unsafe { NeonMask(vcgeq_u32(self.0, vdupq_n_u32(bound))) }
    }

    #[inline(always)]
    fn to_float_signed(self) -> NeonVector {
        unsafe { NeonVector(vcvtq_f32_s32(vreinterpretq_s32_u32(self.0))) }
    }
}

impl SimdInt for NeonInt64 {
    type Elem = u64;
    type FloatVec = NeonDouble;
    const LANES: usize = 2;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        unsafe { NeonInt64(vdupq_n_u64(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[u64]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { NeonInt64(vld1q_u64(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [u64]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { vst1q_u64(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        unsafe { NeonInt64(vshlq_u64(self.0, vdupq_n_s64(n as i64))) }
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        unsafe { NeonInt64(vshlq_u64(self.0, vdupq_n_s64(-(n as i64)))) }
    }

    #[inline(always)]
    fn asr(self, n: u32) -> Self {
        unsafe {
            let signed = vreinterpretq_s64_u64(self.0);
            NeonInt64(vreinterpretq_u64_s64(vshlq_s64(signed, vdupq_n_s64(-(n as i64)))))
        }
    }

    #[inline(always)]
    fn and(self, rhs: u64) -> Self {
        unsafe { NeonInt64(vandq_u64(self.0, vdupq_n_u64(rhs))) }
    }

    #[inline(always)]
    fn or(self, rhs: u64) -> Self {
        unsafe { NeonInt64(vorrq_u64(self.0, vdupq_n_u64(rhs))) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { NeonInt64(veorq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { NeonInt64(vaddq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { NeonInt64(vsubq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn unsigned_ge(self, bound: u64) -> NeonDoubleMask {
        unsafe { NeonDoubleMask(vcgeq_u64(self.0, vdupq_n_u64(bound))) }
    }

    #[inline(always)]
    fn to_float_signed(self) -> NeonDouble {
        unsafe { NeonDouble(vcvtq_f64_s64(vreinterpretq_s64_u64(self.0))) }
    }
}

impl SimdMask for NeonMask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { vminvq_u32(self.0) == u32::MAX }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { vmaxvq_u32(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonMask(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonMask(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe { NeonMask(vmvnq_u32(self.0)) }
    }

    #[inline(always)]
    fn to_bitmask(self) -> u64 {
        // Weight each all-ones lane by its bit position and sum across.
        unsafe {
            let weights = vld1q_u32([1u32, 2, 4, 8].as_ptr());
            vaddvq_u32(vandq_u32(self.0, weights)) as u64
        }
    }
}

impl SimdMask for NeonDoubleMask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { vgetq_lane_u64::<0>(self.0) & vgetq_lane_u64::<1>(self.0) == u64::MAX }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vgetq_lane_u64::<0>(self.0) | vgetq_lane_u64::<1>(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { vgetq_lane_u64::<0>(self.0) | vgetq_lane_u64::<1>(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { NeonDoubleMask(vandq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { NeonDoubleMask(vorrq_u64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let m = vreinterpretq_u64_u32(vmvnq_u32(vreinterpretq_u32_u64(self.0)));
            NeonDoubleMask(m)
        }
    }

    #[inline(always)]
    fn to_bitmask(self) -> u64 {
        unsafe { (vgetq_lane_u64::<0>(self.0) & 1) | (vgetq_lane_u64::<1>(self.0) & 2) }
    }
}
