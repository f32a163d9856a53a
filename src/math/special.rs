//! Lane-wise scalar fallback for special-case inputs
//!
//! Kernels classify lanes up front with a single unsigned compare and run
//! the fast path unconditionally; only if any lane is flagged do they pay
//! for this dispatcher, which re-evaluates exactly the flagged lanes with
//! an exact scalar routine and merges the results back by mask.

use crate::traits::{SimdInt, SimdMask, SimdVector};

/// Upper bound on lane count across all backends, sizing the spill buffers.
pub(crate) const MAX_LANES: usize = 16;

/// Replace flagged f32 lanes of `fast` with `fallback(x[lane])`.
#[inline(never)]
pub(crate) fn scalar_fallback_f32<V>(x: V, fast: V, special: V::Mask, fallback: fn(f32) -> f32) -> V
where
    V: SimdVector<Scalar = f32>,
{
    let mut xs = [0.0f32; MAX_LANES];
    let mut ys = [0.0f32; MAX_LANES];
    x.to_slice(&mut xs[..V::LANES]);

    let mut bits = special.to_bitmask();
    while bits != 0 {
        let lane = bits.trailing_zeros() as usize;
        ys[lane] = fallback(xs[lane]);
        bits &= bits - 1;
    }

    V::select(special, V::from_slice(&ys[..V::LANES]), fast)
}

/// Replace flagged f64 lanes of `fast` with `fallback(x[lane])`.
#[inline(never)]
pub(crate) fn scalar_fallback_f64<V>(x: V, fast: V, special: V::Mask, fallback: fn(f64) -> f64) -> V
where
    V: SimdVector<Scalar = f64>,
{
    let mut xs = [0.0f64; MAX_LANES];
    let mut ys = [0.0f64; MAX_LANES];
    x.to_slice(&mut xs[..V::LANES]);

    let mut bits = special.to_bitmask();
    while bits != 0 {
        let lane = bits.trailing_zeros() as usize;
        ys[lane] = fallback(xs[lane]);
        bits &= bits - 1;
    }

    V::select(special, V::from_slice(&ys[..V::LANES]), fast)
}

/// Flag f32 lanes that are zero, negative, subnormal, infinite or NaN.
///
/// Subtracting the minimum normal bit pattern makes every such input wrap
/// past `inf - min_normal` in one unsigned compare.
#[inline(always)]
pub(crate) fn log_special_lanes_f32<V>(x: V) -> V::Mask
where
    V: SimdVector<Scalar = f32>,
    V::IntBits: SimdInt<Elem = u32>,
{
    const MIN_NORMAL: u32 = 0x0080_0000;
    const THRESH: u32 = 0x7f00_0000; // bits(inf) - MIN_NORMAL
    x.to_bits().sub(V::IntBits::splat(MIN_NORMAL)).unsigned_ge(THRESH)
}

/// Flag f64 lanes that are zero, negative, subnormal, infinite or NaN.
#[inline(always)]
pub(crate) fn log_special_lanes_f64<V>(x: V) -> V::Mask
where
    V: SimdVector<Scalar = f64>,
    V::IntBits: SimdInt<Elem = u64>,
{
    const MIN_NORMAL: u64 = 0x0010_0000_0000_0000;
    const THRESH: u64 = 0x7fe0_0000_0000_0000; // bits(inf) - MIN_NORMAL
    x.to_bits().sub(V::IntBits::splat(MIN_NORMAL)).unsigned_ge(THRESH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    #[test]
    fn test_fallback_replaces_only_flagged_lanes() {
        let x = ScalarVector::<f32>::splat(-1.0);
        let fast = ScalarVector::<f32>::splat(99.0);
        let special = log_special_lanes_f32(x);
        let merged = scalar_fallback_f32(x, fast, special, |v| v * 2.0);
        let mut out = [0.0f32; 1];
        merged.to_slice(&mut out);
        assert_eq!(out[0], -2.0);

        let ok = ScalarVector::<f32>::splat(3.0);
        let clean = scalar_fallback_f32(ok, fast, log_special_lanes_f32(ok), |v| v * 2.0);
        clean.to_slice(&mut out);
        assert_eq!(out[0], 99.0);
    }

    #[test]
    fn test_log_special_classifier_f64() {
        let flagged = |v: f64| log_special_lanes_f64(ScalarVector::<f64>::splat(v)).to_bitmask() == 1;
        assert!(flagged(0.0));
        assert!(flagged(-0.0));
        assert!(flagged(-5.0));
        assert!(flagged(f64::INFINITY));
        assert!(flagged(f64::NAN));
        assert!(flagged(1.0e-310));
        assert!(!flagged(1.0));
        assert!(!flagged(f64::MIN_POSITIVE));
        assert!(!flagged(f64::MAX));
    }
}
