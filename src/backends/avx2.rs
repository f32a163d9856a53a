//! AVX2 backend (8×f32 / 4×f64) for x86-64
//!
//! Newtype wrappers over `__m256`, `__m256d` and `__m256i`. Comparisons
//! produce all-ones/all-zeros lanes in a float register so masks blend
//! directly with `vblendvps`/`vblendvpd`.
//!
//! AVX2 has no unsigned compares and no 64-bit arithmetic shift, so three
//! identities fill the gaps:
//!
//! - u32 `a >= b` is `max_epu32(a, b) == a`
//! - u64 `a >= b` flips both sign bits and negates a signed `b > a`
//! - u64 arithmetic shift is a logical shift followed by sign extension
//!   via `(x ^ m) - m` with `m = 1 << (63 - n)`
//!
//! Requires compiling with `-C target-feature=+avx2,+fma` (see the crate
//! docs); the intrinsics here assume both features are available.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::traits::{SimdInt, SimdMask, SimdVector};

/// AVX2 vector of 8 single-precision lanes
#[derive(Copy, Clone, Debug)]
pub struct Avx2Vector(pub(crate) __m256);

/// AVX2 vector of 4 double-precision lanes
#[derive(Copy, Clone, Debug)]
pub struct Avx2Double(pub(crate) __m256d);

/// AVX2 vector of 8 u32 lanes (bit view of [`Avx2Vector`])
#[derive(Copy, Clone, Debug)]
pub struct Avx2Int(pub(crate) __m256i);

/// AVX2 vector of 4 u64 lanes (bit view of [`Avx2Double`])
#[derive(Copy, Clone, Debug)]
pub struct Avx2Int64(pub(crate) __m256i);

/// Mask for 8 f32 lanes (all-ones or all-zeros per lane)
#[derive(Copy, Clone, Debug)]
pub struct Avx2Mask(pub(crate) __m256);

/// Mask for 4 f64 lanes (all-ones or all-zeros per lane)
#[derive(Copy, Clone, Debug)]
pub struct Avx2DoubleMask(pub(crate) __m256d);

impl SimdVector for Avx2Vector {
    type Scalar = f32;
    type Mask = Avx2Mask;
    type IntBits = Avx2Int;
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: f32) -> Self {
        unsafe { Avx2Vector(_mm256_set1_ps(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Avx2Vector(_mm256_loadu_ps(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f32]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { _mm256_storeu_ps(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Avx2Vector(_mm256_div_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { Avx2Vector(_mm256_xor_ps(self.0, _mm256_set1_ps(-0.0))) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            let mask = _mm256_castsi256_ps(_mm256_set1_epi32(0x7fff_ffff));
            Avx2Vector(_mm256_and_ps(self.0, mask))
        }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { Avx2Vector(_mm256_fmadd_ps(self.0, b.0, c.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Avx2Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Avx2Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Avx2Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_GE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Avx2Mask {
        unsafe { Avx2Mask(_mm256_cmp_ps::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Avx2Mask, true_val: Self, false_val: Self) -> Self {
        unsafe { Avx2Vector(_mm256_blendv_ps(false_val.0, true_val.0, mask.0)) }
    }

    #[inline(always)]
    fn to_bits(self) -> Avx2Int {
        unsafe { Avx2Int(_mm256_castps_si256(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Avx2Int) -> Self {
        unsafe { Avx2Vector(_mm256_castsi256_ps(bits.0)) }
    }
}

impl SimdVector for Avx2Double {
    type Scalar = f64;
    type Mask = Avx2DoubleMask;
    type IntBits = Avx2Int64;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: f64) -> Self {
        unsafe { Avx2Double(_mm256_set1_pd(value)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[f64]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Avx2Double(_mm256_loadu_pd(slice.as_ptr())) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [f64]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { _mm256_storeu_pd(slice.as_mut_ptr(), self.0) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Double(_mm256_add_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Double(_mm256_sub_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        unsafe { Avx2Double(_mm256_mul_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        unsafe { Avx2Double(_mm256_div_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn neg(self) -> Self {
        unsafe { Avx2Double(_mm256_xor_pd(self.0, _mm256_set1_pd(-0.0))) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        unsafe {
            let mask = _mm256_castsi256_pd(_mm256_set1_epi64x(0x7fff_ffff_ffff_ffffu64 as i64));
            Avx2Double(_mm256_and_pd(self.0, mask))
        }
    }

    #[inline(always)]
    fn fma(self, b: Self, c: Self) -> Self {
        unsafe { Avx2Double(_mm256_fmadd_pd(self.0, b.0, c.0)) }
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Avx2DoubleMask {
        unsafe { Avx2DoubleMask(_mm256_cmp_pd::<_CMP_LT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn gt(self, rhs: Self) -> Avx2DoubleMask {
        unsafe { Avx2DoubleMask(_mm256_cmp_pd::<_CMP_GT_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn ge(self, rhs: Self) -> Avx2DoubleMask {
        unsafe { Avx2DoubleMask(_mm256_cmp_pd::<_CMP_GE_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Avx2DoubleMask {
        unsafe { Avx2DoubleMask(_mm256_cmp_pd::<_CMP_EQ_OQ>(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn select(mask: Avx2DoubleMask, true_val: Self, false_val: Self) -> Self {
        unsafe { Avx2Double(_mm256_blendv_pd(false_val.0, true_val.0, mask.0)) }
    }

    #[inline(always)]
    fn to_bits(self) -> Avx2Int64 {
        unsafe { Avx2Int64(_mm256_castpd_si256(self.0)) }
    }

    #[inline(always)]
    fn from_bits(bits: Avx2Int64) -> Self {
        unsafe { Avx2Double(_mm256_castsi256_pd(bits.0)) }
    }
}

impl SimdInt for Avx2Int {
    type Elem = u32;
    type FloatVec = Avx2Vector;
    const LANES: usize = 8;

    #[inline(always)]
    fn splat(value: u32) -> Self {
        unsafe { Avx2Int(_mm256_set1_epi32(value as i32)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[u32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Avx2Int(_mm256_loadu_si256(slice.as_ptr() as *const __m256i)) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [u32]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { _mm256_storeu_si256(slice.as_mut_ptr() as *mut __m256i, self.0) }
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        unsafe { Avx2Int(_mm256_sll_epi32(self.0, _mm_cvtsi32_si128(n as i32))) }
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        unsafe { Avx2Int(_mm256_srl_epi32(self.0, _mm_cvtsi32_si128(n as i32))) }
    }

    #[inline(always)]
    fn asr(self, n: u32) -> Self {
        unsafe { Avx2Int(_mm256_sra_epi32(self.0, _mm_cvtsi32_si128(n as i32))) }
    }

    #[inline(always)]
    fn and(self, rhs: u32) -> Self {
        unsafe { Avx2Int(_mm256_and_si256(self.0, _mm256_set1_epi32(rhs as i32))) }
    }

    #[inline(always)]
    fn or(self, rhs: u32) -> Self {
        unsafe { Avx2Int(_mm256_or_si256(self.0, _mm256_set1_epi32(rhs as i32))) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Avx2Int(_mm256_xor_si256(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Int(_mm256_add_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Int(_mm256_sub_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn unsigned_ge(self, bound: u32) -> Avx2Mask {
        // max_epu32(a, b) == a  <=>  a >= b (unsigned)
        unsafe {
            let b = _mm256_set1_epi32(bound as i32);
            let max = _mm256_max_epu32(self.0, b);
            Avx2Mask(_mm256_castsi256_ps(_mm256_cmpeq_epi32(max, self.0)))
        }
    }

    #[inline(always)]
    fn to_float_signed(self) -> Avx2Vector {
        unsafe { Avx2Vector(_mm256_cvtepi32_ps(self.0)) }
    }
}

impl SimdInt for Avx2Int64 {
    type Elem = u64;
    type FloatVec = Avx2Double;
    const LANES: usize = 4;

    #[inline(always)]
    fn splat(value: u64) -> Self {
        unsafe { Avx2Int64(_mm256_set1_epi64x(value as i64)) }
    }

    #[inline(always)]
    fn from_slice(slice: &[u64]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Avx2Int64(_mm256_loadu_si256(slice.as_ptr() as *const __m256i)) }
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [u64]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { _mm256_storeu_si256(slice.as_mut_ptr() as *mut __m256i, self.0) }
    }

    #[inline(always)]
    fn shl(self, n: u32) -> Self {
        unsafe { Avx2Int64(_mm256_sll_epi64(self.0, _mm_cvtsi32_si128(n as i32))) }
    }

    #[inline(always)]
    fn shr(self, n: u32) -> Self {
        unsafe { Avx2Int64(_mm256_srl_epi64(self.0, _mm_cvtsi32_si128(n as i32))) }
    }

    #[inline(always)]
    fn asr(self, n: u32) -> Self {
        // AVX2 has no vpsraq; logical shift then sign-extend with (x ^ m) - m.
        unsafe {
            let logical = _mm256_srl_epi64(self.0, _mm_cvtsi32_si128(n as i32));
            let m = _mm256_set1_epi64x((1u64 << (63 - n)) as i64);
            Avx2Int64(_mm256_sub_epi64(_mm256_xor_si256(logical, m), m))
        }
    }

    #[inline(always)]
    fn and(self, rhs: u64) -> Self {
        unsafe { Avx2Int64(_mm256_and_si256(self.0, _mm256_set1_epi64x(rhs as i64))) }
    }

    #[inline(always)]
    fn or(self, rhs: u64) -> Self {
        unsafe { Avx2Int64(_mm256_or_si256(self.0, _mm256_set1_epi64x(rhs as i64))) }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        unsafe { Avx2Int64(_mm256_xor_si256(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        unsafe { Avx2Int64(_mm256_add_epi64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        unsafe { Avx2Int64(_mm256_sub_epi64(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn unsigned_ge(self, bound: u64) -> Avx2DoubleMask {
        // Flip both sign bits so signed compare orders like unsigned, then
        // a >= b is the negation of b > a.
        unsafe {
            let flip = _mm256_set1_epi64x(0x8000_0000_0000_0000u64 as i64);
            let a = _mm256_xor_si256(self.0, flip);
            let b = _mm256_xor_si256(_mm256_set1_epi64x(bound as i64), flip);
            let lt = _mm256_cmpgt_epi64(b, a);
            let ones = _mm256_set1_epi64x(-1);
            Avx2DoubleMask(_mm256_castsi256_pd(_mm256_xor_si256(lt, ones)))
        }
    }

    #[inline(always)]
    fn to_float_signed(self) -> Avx2Double {
        // Exact for |v| < 2^51: pack v into the mantissa of 1.5 * 2^52 and
        // subtract the magic constant back out in float arithmetic.
        unsafe {
            let magic = _mm256_set1_epi64x(0x4338_0000_0000_0000u64 as i64);
            let shifted = _mm256_add_epi64(self.0, magic);
            let magic_f = _mm256_castsi256_pd(magic);
            Avx2Double(_mm256_sub_pd(_mm256_castsi256_pd(shifted), magic_f))
        }
    }
}

impl SimdMask for Avx2Mask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0xff }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm256_movemask_ps(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx2Mask(_mm256_and_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx2Mask(_mm256_or_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm256_castsi256_ps(_mm256_set1_epi32(-1));
            Avx2Mask(_mm256_xor_ps(self.0, ones))
        }
    }

    #[inline(always)]
    fn to_bitmask(self) -> u64 {
        unsafe { _mm256_movemask_ps(self.0) as u32 as u64 }
    }
}

impl SimdMask for Avx2DoubleMask {
    #[inline(always)]
    fn all(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) == 0xf }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) != 0 }
    }

    #[inline(always)]
    fn none(self) -> bool {
        unsafe { _mm256_movemask_pd(self.0) == 0 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        unsafe { Avx2DoubleMask(_mm256_and_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        unsafe { Avx2DoubleMask(_mm256_or_pd(self.0, rhs.0)) }
    }

    #[inline(always)]
    fn not(self) -> Self {
        unsafe {
            let ones = _mm256_castsi256_pd(_mm256_set1_epi64x(-1));
            Avx2DoubleMask(_mm256_xor_pd(self.0, ones))
        }
    }

    #[inline(always)]
    fn to_bitmask(self) -> u64 {
        unsafe { _mm256_movemask_pd(self.0) as u32 as u64 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lanes_roundtrip() {
        let data: [f32; 8] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let v = Avx2Vector::from_slice(&data);
        let mut out = [0.0f32; 8];
        v.to_slice(&mut out);
        assert_eq!(out, data);
    }

    #[test]
    fn test_unsigned_ge_u32() {
        let vals: [u32; 8] = [0, 1, 0x7f00_0000, 0x7eff_ffff, u32::MAX, 0x8000_0000, 42, 0x7f00_0001];
        let m = Avx2Int::from_slice(&vals).unsigned_ge(0x7f00_0000);
        assert_eq!(m.to_bitmask(), 0b1011_0100);
    }

    #[test]
    fn test_unsigned_ge_u64() {
        let vals: [u64; 4] = [0, 0x7fe0_0000_0000_0000, u64::MAX, 0x7fdf_ffff_ffff_ffff];
        let m = Avx2Int64::from_slice(&vals).unsigned_ge(0x7fe0_0000_0000_0000);
        assert_eq!(m.to_bitmask(), 0b0110);
    }

    #[test]
    fn test_asr_u64_sign_fill() {
        let vals: [u64; 4] = [
            0xff00_0000_0000_0000, // -16 after >> 52
            0x0030_0000_0000_0000, // 3
            0x8000_0000_0000_0000,
            0,
        ];
        let mut out = [0u64; 4];
        Avx2Int64::from_slice(&vals).asr(52).to_slice(&mut out);
        assert_eq!(out[0] as i64, -16);
        assert_eq!(out[1], 3);
        assert_eq!(out[2] as i64, -2048);
        assert_eq!(out[3], 0);
    }

    #[test]
    fn test_to_float_signed_u64() {
        let vals: [u64; 4] = [0, 1023, (-52i64) as u64, (-1i64) as u64];
        let mut out = [0.0f64; 4];
        Avx2Int64::from_slice(&vals).to_float_signed().to_slice(&mut out);
        assert_eq!(out, [0.0, 1023.0, -52.0, -1.0]);
    }

    #[test]
    fn test_select_blend() {
        let a = Avx2Vector::splat(1.0);
        let b = Avx2Vector::splat(2.0);
        let m = Avx2Vector::from_slice(&[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0])
            .gt(Avx2Vector::splat(0.5));
        let mut out = [0.0f32; 8];
        Avx2Vector::select(m, a, b).to_slice(&mut out);
        assert_eq!(out, [2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_fma_is_fused() {
        let a = Avx2Double::splat(1.0 + f64::from_bits(0x3cb0000000000000));
        let b = Avx2Double::splat(1.0 - f64::from_bits(0x3cb0000000000000));
        let c = Avx2Double::splat(-1.0);
        let mut out = [0.0f64; 4];
        a.fma(b, c).to_slice(&mut out);
        assert!(out[0] != 0.0);
    }

    #[test]
    fn test_ge_false_for_nan() {
        let nan = Avx2Vector::splat(f32::NAN);
        assert!(nan.ge(Avx2Vector::splat(0.0)).none());
    }
}
