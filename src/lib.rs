#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(unexpected_cfgs)]

//! lumen-math: ULP-bounded SIMD kernels for log, log10, sin and cos
//!
//! Every kernel is a pure function over IEEE-754 values: table-driven range
//! reduction, minimax polynomial evaluation with fused multiply-adds, and a
//! lane-wise fallback to an exact scalar reference for special inputs.
//!
//! Kernels are generic over the [`SimdVector`] trait, so the same source
//! compiles to scalar, AVX2 or NEON code depending on the enabled backend
//! feature. Results are bit-deterministic per backend: the same input bit
//! pattern always produces the same output bit pattern.

// Reference scalar implementations (fallback targets) come from libm.
extern crate libm;

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Fast math kernels (vector log/log10/sin/cos)
pub mod math;

// Exact scalar sine/cosine kernels
pub mod scalar;

// Process-wide immutable constant tables
mod tables;

// Public re-exports for convenience
pub use traits::{SimdInt, SimdMask, SimdVector};

pub use backends::scalar::{ScalarInt, ScalarInt64, ScalarMask, ScalarVector};

// Only re-export AVX2 types when both feature is enabled AND we're targeting x86/x86_64
#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub use backends::avx2::{Avx2Double, Avx2DoubleMask, Avx2Int, Avx2Int64, Avx2Mask, Avx2Vector};

// Only re-export NEON types when both feature is enabled AND we're targeting aarch64
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub use backends::neon::{NeonDouble, NeonDoubleMask, NeonInt, NeonInt64, NeonMask, NeonVector};

/// Default single-precision SIMD vector type based on enabled feature
///
/// - no backend feature (default): `ScalarVector<f32>` (1 lane)
/// - `avx2` feature: `Avx2Vector` (8 lanes, x86-64)
/// - `neon` feature: `NeonVector` (4 lanes, ARM64)
#[cfg(all(not(feature = "avx2"), not(feature = "neon")))]
pub type DefaultSimdVector = ScalarVector<f32>;

/// Default double-precision SIMD vector type (scalar backend)
#[cfg(all(not(feature = "avx2"), not(feature = "neon")))]
pub type DefaultSimdDouble = ScalarVector<f64>;

/// Default single-precision SIMD vector type (AVX2 backend for x86-64)
#[cfg(all(feature = "avx2", target_arch = "x86_64"))]
pub type DefaultSimdVector = Avx2Vector;

/// Default double-precision SIMD vector type (AVX2 backend for x86-64)
#[cfg(all(feature = "avx2", target_arch = "x86_64"))]
pub type DefaultSimdDouble = Avx2Double;

/// Default single-precision SIMD vector type (NEON backend for ARM64)
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type DefaultSimdVector = NeonVector;

/// Default double-precision SIMD vector type (NEON backend for ARM64)
#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub type DefaultSimdDouble = NeonDouble;

// Prevent conflicting backends for the target architecture.
#[cfg(all(feature = "avx2", feature = "neon"))]
compile_error!("Cannot enable both avx2 and neon features simultaneously. Choose one backend.");
