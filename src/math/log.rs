//! Double-precision vector logarithms
//!
//! Both bases share one range reduction: `x = 2^k * z` with z in
//! [0.70508, 1.41016), split into 128 subintervals by the top mantissa
//! bits. The table entry for z's subinterval gives `1/c` and `log(c)` (or
//! `log10(c)`), so only `log1p(z/c - 1)` with tiny residual remains for
//! the polynomial. The [`Base`] parameter selects the table column and
//! constants; everything else is identical.

use crate::math::special::{log_special_lanes_f64, scalar_fallback_f64, MAX_LANES};
use crate::tables::{LOG_TABLE, LOG_TABLE_BITS, LOG_TABLE_N};
use crate::traits::{SimdInt, SimdMask, SimdVector};

/// Logarithm base selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Base {
    /// Natural logarithm (base e).
    E,
    /// Common logarithm (base 10).
    Ten,
}

const OFF: u64 = 0x3fe6900900000000;
const SIGN_EXP_MASK: u64 = 0xfff0000000000000;

const LN2: f64 = f64::from_bits(0x3fe62e42fefa39ef);
const INV_LN10: f64 = f64::from_bits(0x3fdbcb7b1526e50e);
const LOG10_2: f64 = f64::from_bits(0x3fd34413509f79ff);

/// Minimax coefficients for log1p(r)/r - 1 on the reduced interval,
/// i.e. log1p(r) ~ r + r^2 * poly(r).
const POLY_LN: [f64; 5] = [
    f64::from_bits(0xbfdffffffffffff7),
    f64::from_bits(0x3fd55555555170d4),
    f64::from_bits(0xbfd0000000399c27),
    f64::from_bits(0x3fc999b2e90e94ca),
    f64::from_bits(0xbfc554e550bd501e),
];

/// The natural-log coefficients divided by ln(10), rounded to double.
const POLY_LOG10: [f64; 5] = [
    f64::from_bits(0xbfcbcb7b1526e506),
    f64::from_bits(0x3fc287a7636be1d1),
    f64::from_bits(0xbfbbcb7b158af938),
    f64::from_bits(0x3fb63c78734e6d07),
    f64::from_bits(0xbfb287461742fee4),
];

/// Gather `1/c` and the base-appropriate `log(c)` column per lane.
#[inline(always)]
fn lookup<V>(i: V::IntBits, base: Base) -> (V, V)
where
    V: SimdVector<Scalar = f64>,
    V::IntBits: SimdInt<Elem = u64>,
{
    let col = match base {
        Base::E => &LOG_TABLE.logc,
        Base::Ten => &LOG_TABLE.log10c,
    };

    let mut idx = [0u64; MAX_LANES];
    i.to_slice(&mut idx[..V::LANES]);

    let mut invc = [0.0f64; MAX_LANES];
    let mut logc = [0.0f64; MAX_LANES];
    for lane in 0..V::LANES {
        let j = idx[lane] as usize;
        invc[lane] = LOG_TABLE.invc[j];
        logc[lane] = col[j];
    }
    (
        V::from_slice(&invc[..V::LANES]),
        V::from_slice(&logc[..V::LANES]),
    )
}

/// y = r2*(A0 + r*A1 + r2*(A2 + r*A3 + r2*A4)) + hi, pairwise.
#[inline(always)]
fn log1p_poly<V: SimdVector<Scalar = f64>>(r: V, r2: V, hi: V, a: &[f64; 5]) -> V {
    let y = r.fma(V::splat(a[3]), V::splat(a[2]));
    let p = r.fma(V::splat(a[1]), V::splat(a[0]));
    let y = r2.fma(V::splat(a[4]), y);
    let y = r2.fma(y, p);
    r2.fma(y, hi)
}

#[inline(always)]
fn log_base<V>(x: V, base: Base) -> V
where
    V: SimdVector<Scalar = f64>,
    V::IntBits: SimdInt<Elem = u64>,
{
    let ix = x.to_bits();
    let special = log_special_lanes_f64(x);

    // x = 2^k * z with z in [OFF, 2*OFF) and exact; the subtraction of OFF
    // puts the subinterval index in the top mantissa bits and the exponent
    // offset k in the (signed) exponent field.
    let tmp = ix.sub(V::IntBits::splat(OFF));
    let i = tmp.shr(52 - LOG_TABLE_BITS).and(LOG_TABLE_N as u64 - 1);
    let k = tmp.asr(52);
    let iz = ix.sub(tmp.and(SIGN_EXP_MASK));
    let z = V::from_bits(iz);

    let (invc, logc) = lookup::<V>(i, base);

    // log(x) = log1p(z/c - 1) + log(c) + k*log(2), in the requested base.
    let r = z.fma(invc, V::splat(-1.0));
    let kd = k.to_float_signed();

    let (hi, poly) = match base {
        Base::E => (kd.fma(V::splat(LN2), logc.add(r)), &POLY_LN),
        Base::Ten => {
            let w = r.fma(V::splat(INV_LN10), logc);
            (kd.fma(V::splat(LOG10_2), w), &POLY_LOG10)
        }
    };

    let r2 = r.mul(r);
    let y = log1p_poly(r, r2, hi, poly);

    if special.any() {
        let exact: fn(f64) -> f64 = match base {
            Base::E => libm::log,
            Base::Ten => libm::log10,
        };
        return scalar_fallback_f64(x, y, special, exact);
    }
    y
}

/// Double-precision vector natural logarithm.
///
/// # Example
///
/// ```rust
/// use lumen_math::{math, DefaultSimdDouble, SimdVector};
///
/// let y = math::log(DefaultSimdDouble::splat(1.0));
/// let mut out = [0.0; DefaultSimdDouble::LANES];
/// y.to_slice(&mut out);
/// assert_eq!(out[0], 0.0);
/// ```
///
/// # Error Bounds
///
/// Maximum measured error is 2.17 ULP against an exact reference.
/// log(1.0) is exactly 0.0: the table pins the subinterval containing 1
/// to c = 1, so both the residual and the table term vanish.
///
/// # Special Cases
///
/// Matches the scalar libm conventions lane-wise: log(0) = -inf,
/// log(x < 0) = NaN, log(inf) = inf, log(NaN) = NaN, and subnormal
/// inputs take the exact scalar path.
#[inline(always)]
pub fn log<V>(x: V) -> V
where
    V: SimdVector<Scalar = f64>,
    V::IntBits: SimdInt<Elem = u64>,
{
    log_base(x, Base::E)
}

/// Double-precision vector base-10 logarithm.
///
/// # Example
///
/// ```rust
/// use lumen_math::{math, DefaultSimdDouble, SimdVector};
///
/// let y = math::log10(DefaultSimdDouble::splat(100.0));
/// let mut out = [0.0; DefaultSimdDouble::LANES];
/// y.to_slice(&mut out);
/// assert!((out[0] - 2.0).abs() < 1e-15);
/// ```
///
/// # Error Bounds
///
/// Maximum measured error is 2.46 ULP against an exact reference.
///
/// # Special Cases
///
/// Same lane-wise conventions as [`log`].
#[inline(always)]
pub fn log10<V>(x: V) -> V
where
    V: SimdVector<Scalar = f64>,
    V::IntBits: SimdInt<Elem = u64>,
{
    log_base(x, Base::Ten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::scalar::ScalarVector;

    fn log1(x: f64) -> f64 {
        let mut out = [0.0f64; 1];
        log(ScalarVector::<f64>::splat(x)).to_slice(&mut out);
        out[0]
    }

    fn log10_1(x: f64) -> f64 {
        let mut out = [0.0f64; 1];
        log10(ScalarVector::<f64>::splat(x)).to_slice(&mut out);
        out[0]
    }

    fn ulp_diff(a: f64, b: f64) -> u64 {
        a.to_bits().abs_diff(b.to_bits())
    }

    #[test]
    fn test_log_one_exact() {
        assert_eq!(log1(1.0).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_log_matches_libm() {
        for &x in &[0.5, 0.99, 1.01, 2.0, core::f64::consts::E, 10.0, 1e10, 1e-10, 0.7, 1.4] {
            assert!(ulp_diff(log1(x), libm::log(x)) <= 3, "log({x})");
            assert!(ulp_diff(log10_1(x), libm::log10(x)) <= 3, "log10({x})");
        }
    }

    #[test]
    fn test_log_special_cases() {
        assert_eq!(log1(0.0), f64::NEG_INFINITY);
        assert_eq!(log1(-0.0), f64::NEG_INFINITY);
        assert!(log1(-1.0).is_nan());
        assert_eq!(log1(f64::INFINITY), f64::INFINITY);
        assert!(log1(f64::NAN).is_nan());
        assert!(log1(f64::NEG_INFINITY).is_nan());
    }

    #[test]
    fn test_log_subnormal_matches_libm() {
        for &x in &[1.0e-310, 5.0e-324, 2.2e-308] {
            assert!(ulp_diff(log1(x), libm::log(x)) <= 1, "log({x:e})");
            assert!(ulp_diff(log10_1(x), libm::log10(x)) <= 1, "log10({x:e})");
        }
    }

    #[test]
    fn test_log10_powers_of_ten() {
        for p in 1..=15 {
            let x = libm::pow(10.0, p as f64);
            assert!(ulp_diff(log10_1(x), p as f64) <= 3, "log10(1e{p})");
        }
    }
}
