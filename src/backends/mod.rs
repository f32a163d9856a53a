//! SIMD backend implementations
//!
//! Each backend implements the traits in [`crate::traits`] for one target:
//!
//! - `scalar`: 1-lane fallback, always available, reference for consistency tests
//! - `avx2`: 8×f32 / 4×f64 on x86-64 (requires avx2 + fma at compile time)
//! - `neon`: 4×f32 / 2×f64 on aarch64

pub mod scalar;

#[cfg(all(feature = "avx2", any(target_arch = "x86", target_arch = "x86_64")))]
pub mod avx2;

#[cfg(all(feature = "neon", target_arch = "aarch64"))]
pub mod neon;
