//! Property-based invariants: determinism, symmetry, lane independence
//! and agreement with double-precision references on random inputs.

mod test_utils;

use lumen_math::{math, scalar, DefaultSimdDouble, DefaultSimdVector, SimdVector};
use proptest::prelude::*;
use test_utils::{apply_f32, apply_f64, ulp_diff_f32, ulp_diff_f64};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    #[test]
    fn logf_deterministic(x in any::<f32>()) {
        let a = apply_f32(math::logf::<DefaultSimdVector>, x);
        let b = apply_f32(math::logf::<DefaultSimdVector>, x);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn log_deterministic(x in any::<f64>()) {
        let a = apply_f64(math::log::<DefaultSimdDouble>, x);
        let b = apply_f64(math::log::<DefaultSimdDouble>, x);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn sinf_deterministic(x in any::<f32>()) {
        let a = apply_f32(math::sinf::<DefaultSimdVector>, x);
        let b = apply_f32(math::sinf::<DefaultSimdVector>, x);
        prop_assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn logf_tracks_reference(x in 1.0e-37f32..3.4e38) {
        let got = apply_f32(math::logf::<DefaultSimdVector>, x);
        prop_assert!(ulp_diff_f32(got, libm::log(x as f64)) < 3.5);
    }

    #[test]
    fn log10_tracks_reference(x in 1.0e-300f64..1.0e300) {
        let got = apply_f64(math::log10::<DefaultSimdDouble>, x);
        prop_assert!(ulp_diff_f64(got, libm::log10(x)) <= 3);
    }

    #[test]
    fn vector_sinf_tracks_reference(x in -1.0e6f32..1.0e6) {
        let got = apply_f32(math::sinf::<DefaultSimdVector>, x);
        prop_assert!(ulp_diff_f32(got, libm::sin(x as f64)) < 2.0);
    }

    #[test]
    fn scalar_cosf_tracks_reference(x in -3.4e38f32..3.4e38) {
        prop_assert!(ulp_diff_f32(scalar::cosf(x), libm::cos(x as f64)) < 1.5);
    }

    #[test]
    fn sinf_is_odd(x in -1.0e6f32..1.0e6) {
        let pos = apply_f32(math::sinf::<DefaultSimdVector>, x);
        let neg = apply_f32(math::sinf::<DefaultSimdVector>, -x);
        prop_assert_eq!(neg.to_bits(), (-pos).to_bits());
    }

    #[test]
    fn cosf_is_even(x in -3.4e38f32..3.4e38) {
        let pos = apply_f32(math::cosf::<DefaultSimdVector>, x);
        let neg = apply_f32(math::cosf::<DefaultSimdVector>, -x);
        prop_assert_eq!(neg.to_bits(), pos.to_bits());
    }

    #[test]
    fn log_negative_is_nan(x in -1.0e300f64..-1.0e-300) {
        prop_assert!(apply_f64(math::log::<DefaultSimdDouble>, x).is_nan());
        prop_assert!(apply_f64(math::log10::<DefaultSimdDouble>, x).is_nan());
    }

    #[test]
    fn lanes_are_independent(good in 0.1f32..100.0, bad in prop_oneof![
        Just(f32::NAN), Just(f32::INFINITY), Just(-1.0e30f32)
    ]) {
        const L: usize = DefaultSimdVector::LANES;
        let reference = apply_f32(math::logf::<DefaultSimdVector>, good);

        // A special value in one lane must not change any other lane.
        for slot in 0..L {
            let mut input = [good; 16];
            input[slot] = bad;
            let mut out = [0.0f32; 16];
            math::logf(DefaultSimdVector::from_slice(&input[..L])).to_slice(&mut out[..L]);
            for (lane, &y) in out.iter().take(L).enumerate() {
                if lane == slot {
                    prop_assert_eq!(y.to_bits(), libm::logf(bad).to_bits());
                } else {
                    prop_assert_eq!(y.to_bits(), reference.to_bits());
                }
            }
        }
    }
}
