//! Special-value and boundary behavior for every kernel.

mod test_utils;

use lumen_math::{math, scalar, DefaultSimdDouble, DefaultSimdVector, SimdVector};
use test_utils::{apply_f32, apply_f64};

#[test]
fn log_of_one_is_exactly_zero() {
    assert_eq!(apply_f64(math::log::<DefaultSimdDouble>, 1.0).to_bits(), 0u64);
    assert_eq!(apply_f64(math::log10::<DefaultSimdDouble>, 1.0).to_bits(), 0u64);
    assert_eq!(apply_f32(math::logf::<DefaultSimdVector>, 1.0).to_bits(), 0u32);
    assert_eq!(apply_f32(math::log10f::<DefaultSimdVector>, 1.0).to_bits(), 0u32);
}

#[test]
fn log_special_values_f64() {
    let kernels: [fn(DefaultSimdDouble) -> DefaultSimdDouble; 2] =
        [math::log::<DefaultSimdDouble>, math::log10::<DefaultSimdDouble>];
    for f in kernels {
        assert_eq!(apply_f64(f, 0.0), f64::NEG_INFINITY);
        assert_eq!(apply_f64(f, -0.0), f64::NEG_INFINITY);
        assert!(apply_f64(f, -1.0).is_nan());
        assert!(apply_f64(f, f64::NEG_INFINITY).is_nan());
        assert_eq!(apply_f64(f, f64::INFINITY), f64::INFINITY);
        assert!(apply_f64(f, f64::NAN).is_nan());
    }
}

#[test]
fn log_special_values_f32() {
    let kernels: [fn(DefaultSimdVector) -> DefaultSimdVector; 2] =
        [math::logf::<DefaultSimdVector>, math::log10f::<DefaultSimdVector>];
    for f in kernels {
        assert_eq!(apply_f32(f, 0.0), f32::NEG_INFINITY);
        assert_eq!(apply_f32(f, -0.0), f32::NEG_INFINITY);
        assert!(apply_f32(f, -1.0).is_nan());
        assert!(apply_f32(f, f32::NEG_INFINITY).is_nan());
        assert_eq!(apply_f32(f, f32::INFINITY), f32::INFINITY);
        assert!(apply_f32(f, f32::NAN).is_nan());
    }
}

#[test]
fn log_subnormals_match_libm_exactly() {
    // Subnormal lanes take the scalar fallback, so the result is libm's.
    for &x in &[1.0e-310f64, 5.0e-324, 1.0e-320] {
        assert_eq!(apply_f64(math::log::<DefaultSimdDouble>, x).to_bits(), libm::log(x).to_bits());
        assert_eq!(
            apply_f64(math::log10::<DefaultSimdDouble>, x).to_bits(),
            libm::log10(x).to_bits()
        );
    }
    for &x in &[1.0e-40f32, 1.0e-45] {
        assert_eq!(apply_f32(math::logf::<DefaultSimdVector>, x).to_bits(), libm::logf(x).to_bits());
        assert_eq!(
            apply_f32(math::log10f::<DefaultSimdVector>, x).to_bits(),
            libm::log10f(x).to_bits()
        );
    }
}

#[test]
fn log_boundary_bit_patterns() {
    // First normal is fast-path, last subnormal is fallback; both finite.
    let lo = f64::MIN_POSITIVE;
    let below = f64::from_bits(lo.to_bits() - 1);
    assert!(apply_f64(math::log::<DefaultSimdDouble>, lo).is_finite());
    assert!(apply_f64(math::log::<DefaultSimdDouble>, below).is_finite());
    assert!(apply_f64(math::log::<DefaultSimdDouble>, f64::MAX).is_finite());
}

#[test]
fn log10_round_values() {
    // 10^±k inputs are exact; results must sit within the declared bound
    // of the integer answer.
    let got = apply_f64(math::log10::<DefaultSimdDouble>, 10.0);
    assert!(got.to_bits().abs_diff(1.0f64.to_bits()) <= 3);
    let got = apply_f64(math::log10::<DefaultSimdDouble>, 0.01);
    assert!(got.to_bits().abs_diff((-2.0f64).to_bits()) <= 3);
    let got = apply_f32(math::log10f::<DefaultSimdVector>, 100.0);
    assert!(got.to_bits().abs_diff(2.0f32.to_bits()) <= 4);
}

#[test]
fn cosf_small_angles_are_exactly_one() {
    assert_eq!(scalar::cosf(0.0), 1.0);
    assert_eq!(scalar::cosf(-0.0), 1.0);
    assert_eq!(scalar::cosf(1.0e-7), 1.0);
    assert_eq!(scalar::cosf(2.0e-4), 1.0);
}

#[test]
fn sinf_tiny_angles_return_argument() {
    for &x in &[1.0e-8f32, -1.0e-8, 1.0e-4, -1.0e-4, 1.0e-40] {
        assert_eq!(scalar::sinf(x).to_bits(), x.to_bits());
    }
    assert_eq!(scalar::sinf(-0.0).to_bits(), (-0.0f32).to_bits());
}

#[test]
fn trig_invalid_inputs_are_nan() {
    for &x in &[f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
        assert!(scalar::sinf(x).is_nan());
        assert!(scalar::cosf(x).is_nan());
        assert!(apply_f32(math::sinf::<DefaultSimdVector>, x).is_nan());
        assert!(apply_f32(math::cosf::<DefaultSimdVector>, x).is_nan());
    }
}

#[test]
fn trig_huge_arguments_stay_accurate() {
    // ~1e8 is far past the fast path; reduction must still hold.
    let x = 1.0e8f32;
    let want = libm::sin(x as f64) as f32;
    let got = apply_f32(math::sinf::<DefaultSimdVector>, x);
    assert!((got - want).abs() <= f32::EPSILON * want.abs().max(1.0));
    assert_eq!(got.to_bits(), scalar::sinf(x).to_bits());
}

#[test]
fn special_lane_does_not_disturb_neighbors() {
    const L: usize = DefaultSimdVector::LANES;
    let mut input = [2.5f32; 16];
    input[0] = f32::NAN;
    let x = DefaultSimdVector::from_slice(&input[..L]);
    let mut out = [0.0f32; 16];
    math::sinf(x).to_slice(&mut out[..L]);
    assert!(out[0].is_nan());
    for &lane in out.iter().take(L).skip(1) {
        assert_eq!(lane.to_bits(), apply_f32(math::sinf::<DefaultSimdVector>, 2.5).to_bits());
    }

    let mut input = [3.0f64; 16];
    input[0] = -1.0;
    let x = DefaultSimdDouble::from_slice(&input[..DefaultSimdDouble::LANES]);
    let mut out = [0.0f64; 16];
    math::log(x).to_slice(&mut out[..DefaultSimdDouble::LANES]);
    assert!(out[0].is_nan());
    for &lane in out.iter().take(DefaultSimdDouble::LANES).skip(1) {
        assert_eq!(lane.to_bits(), apply_f64(math::log::<DefaultSimdDouble>, 3.0).to_bits());
    }
}

#[test]
fn negative_zero_keeps_its_sign_through_sinf() {
    let got = apply_f32(math::sinf::<DefaultSimdVector>, -0.0);
    assert_eq!(got.to_bits(), (-0.0f32).to_bits());
}
