//! Core SIMD abstraction traits
//!
//! This module defines the traits that all SIMD backends must implement.
//! Kernels are written once against these traits and compile to optimal
//! SIMD instructions for each target architecture.
//!
//! The float/integer pairing is the load-bearing part: every float vector
//! has an associated integer vector of the same lane count and width
//! (`IntBits`), and [`SimdVector::to_bits`] / [`SimdVector::from_bits`] are
//! the single audited seam for reinterpreting lanes between the two. All
//! exponent/mantissa surgery in the kernels goes through that seam.

/// Core SIMD float vector abstraction
///
/// Implemented for 1-lane scalar wrappers and for the AVX2/NEON register
/// types, in both f32 and f64 flavours.
///
/// # Example
///
/// ```rust
/// use lumen_math::{DefaultSimdVector, SimdVector};
///
/// let a = DefaultSimdVector::splat(2.0);
/// let b = DefaultSimdVector::splat(3.0);
/// let mut out = [0.0f32; DefaultSimdVector::LANES];
/// a.add(b).to_slice(&mut out);
/// assert_eq!(out[0], 5.0);
/// ```
pub trait SimdVector: Copy + Clone + Sized {
    /// The underlying scalar type (f32 or f64)
    type Scalar: Copy;

    /// Associated mask type for comparison operations
    type Mask: SimdMask;

    /// Associated integer vector of the same lane width, for bit manipulation
    type IntBits: SimdInt<FloatVec = Self>;

    /// Number of SIMD lanes (1 for scalar, 2/4 for NEON, 4/8 for AVX2)
    const LANES: usize;

    /// Broadcast a scalar value to all SIMD lanes
    fn splat(value: Self::Scalar) -> Self;

    /// Load from a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements
    fn from_slice(slice: &[Self::Scalar]) -> Self;

    /// Store to a slice (must have at least LANES elements)
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements
    fn to_slice(self, slice: &mut [Self::Scalar]);

    /// Element-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Element-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Element-wise multiplication
    fn mul(self, rhs: Self) -> Self;

    /// Element-wise division
    fn div(self, rhs: Self) -> Self;

    /// Element-wise negation
    fn neg(self) -> Self;

    /// Element-wise absolute value
    fn abs(self) -> Self;

    /// Fused multiply-add: `self * b + c` with a single rounding step
    ///
    /// All polynomial evaluation in the kernels relies on this being a true
    /// FMA; the scalar backend routes through `libm::fma(f)`.
    fn fma(self, b: Self, c: Self) -> Self;

    /// Element-wise less-than comparison
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Element-wise greater-than comparison
    fn gt(self, rhs: Self) -> Self::Mask;

    /// Element-wise greater-or-equal comparison
    ///
    /// Note: false for NaN lanes, like every ordered IEEE comparison. The
    /// trig kernels depend on this to let NaN inputs ride the fast path.
    fn ge(self, rhs: Self) -> Self::Mask;

    /// Element-wise equality comparison
    fn eq(self, rhs: Self) -> Self::Mask;

    /// Select values based on mask: per lane, `mask ? true_val : false_val`
    fn select(mask: Self::Mask, true_val: Self, false_val: Self) -> Self;

    /// Reinterpret float lanes as same-width unsigned integer lanes
    ///
    /// No numeric conversion takes place; this is the bit-pattern view used
    /// for exponent extraction and special-case classification.
    fn to_bits(self) -> Self::IntBits;

    /// Reinterpret integer lanes as float lanes (inverse of `to_bits`)
    fn from_bits(bits: Self::IntBits) -> Self;
}

/// Integer SIMD vector trait for bit manipulation
///
/// Lane element type (`Elem`) is u32 for f32-paired vectors and u64 for
/// f64-paired vectors. Arithmetic is wrapping: the special-case classifiers
/// rely on unsigned wraparound subtraction.
pub trait SimdInt: Copy + Clone + Sized {
    /// Lane element type (u32 or u64)
    type Elem: Copy;

    /// Associated float vector type
    type FloatVec: SimdVector<IntBits = Self>;

    /// Number of SIMD lanes (matches the associated float vector)
    const LANES: usize;

    /// Broadcast an element to all lanes
    fn splat(value: Self::Elem) -> Self;

    /// Load from a slice (must have at least LANES elements)
    fn from_slice(slice: &[Self::Elem]) -> Self;

    /// Store to a slice (must have at least LANES elements)
    fn to_slice(self, slice: &mut [Self::Elem]);

    /// Logical (zero-fill) left shift by a constant count
    fn shl(self, n: u32) -> Self;

    /// Logical (zero-fill) right shift by a constant count
    fn shr(self, n: u32) -> Self;

    /// Arithmetic (sign-fill) right shift by a constant count
    ///
    /// Treats lanes as signed; used to extract the debiased exponent `k`
    /// such that wraparound below the reduction offset yields negative `k`.
    fn asr(self, n: u32) -> Self;

    /// Bitwise AND with a broadcast constant
    fn and(self, rhs: Self::Elem) -> Self;

    /// Bitwise OR with a broadcast constant
    fn or(self, rhs: Self::Elem) -> Self;

    /// Bitwise XOR with another vector
    fn xor(self, rhs: Self) -> Self;

    /// Wrapping element-wise addition
    fn add(self, rhs: Self) -> Self;

    /// Wrapping element-wise subtraction
    fn sub(self, rhs: Self) -> Self;

    /// Unsigned per-lane `self >= bound` against a broadcast constant
    ///
    /// Returns the float-side mask type so the result feeds directly into
    /// `SimdVector::select` and the fallback dispatcher.
    fn unsigned_ge(self, bound: Self::Elem) -> <Self::FloatVec as SimdVector>::Mask;

    /// Numeric signed-integer to float conversion
    ///
    /// Lanes are interpreted as signed two's-complement values. For u64
    /// lanes the conversion is only required to be exact for |v| < 2^51
    /// (the exponent counts produced by range reduction are tiny).
    fn to_float_signed(self) -> Self::FloatVec;
}

/// Mask type for conditional SIMD operations
///
/// Masks represent per-lane boolean values, enabling branchless conditional
/// logic and the per-lane fallback dispatch.
pub trait SimdMask: Copy + Clone + Sized {
    /// Returns true if all lanes are set
    fn all(self) -> bool;

    /// Returns true if any lane is set
    ///
    /// This is the fallback dispatcher's gate; on the expected path (no
    /// special lanes) it is the only cost the special-case machinery adds.
    fn any(self) -> bool;

    /// Returns true if no lanes are set
    fn none(self) -> bool;

    /// Bitwise AND of two masks
    fn and(self, rhs: Self) -> Self;

    /// Bitwise OR of two masks
    fn or(self, rhs: Self) -> Self;

    /// Bitwise NOT of mask
    fn not(self) -> Self;

    /// Pack the mask into the low bits of a u64, lane 0 at bit 0
    ///
    /// Drives the explicit per-flagged-lane fallback loop.
    fn to_bitmask(self) -> u64;
}
