//! Exact scalar single-precision sine and cosine
//!
//! These are the reference kernels the vector trig routines fall back to
//! for out-of-range lanes, and they are usable on their own. Accuracy is
//! well under 1 ULP across the full finite range: arguments are promoted
//! to f64, reduced modulo pi/2 (with a 192-bit fixed-point reduction for
//! huge inputs), and evaluated with a shared odd/even polynomial pair.

use crate::tables::{SinCos, INV_PIO4, PI63, SINCOS_TABLE};

/// Top 12 bits of the float, sign cleared. Compares on this value order
/// magnitudes cheaply: it is monotone in |x| for finite x.
#[inline(always)]
fn abstop12(x: f32) -> u32 {
    (x.to_bits() >> 20) & 0x7ff
}

/// Which range-reduction strategy an input magnitude calls for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReductionPath {
    /// |x| < pi/4: no reduction, evaluate the polynomial on x directly.
    Small,
    /// |x| < 120: single-step reduction with a double-precision pi/2.
    Fast,
    /// Finite |x| >= 120: fixed-point reduction against 4/pi bits.
    Large,
    /// Inf or NaN: no finite answer exists.
    Invalid,
}

/// Classify an input by the reduction path its magnitude requires.
#[inline(always)]
pub fn classify(x: f32) -> ReductionPath {
    let top = abstop12(x);
    if top < abstop12(core::f32::consts::FRAC_PI_4) {
        ReductionPath::Small
    } else if top < abstop12(120.0) {
        ReductionPath::Fast
    } else if top < abstop12(f32::INFINITY) {
        ReductionPath::Large
    } else {
        ReductionPath::Invalid
    }
}

/// Raise invalid and return NaN, matching the C99 error convention.
#[inline(always)]
fn invalidf(x: f32) -> f32 {
    (x - x) / (x - x)
}

/// Evaluate sin(x) if n is even, the cosine polynomial if n is odd.
///
/// `x2` is x squared; `p` selects plain or negated-cosine coefficients.
#[inline(always)]
fn sinf_poly(x: f64, x2: f64, p: &SinCos, n: i32) -> f32 {
    if n & 1 == 0 {
        let x3 = x * x2;
        let x5 = x3 * x2;
        let s1 = p.s2 + x2 * p.s3;
        let s = x + x3 * p.s1;
        (s + x5 * s1) as f32
    } else {
        let x4 = x2 * x2;
        let x6 = x4 * x2;
        let c2 = p.c3 + x2 * p.c4;
        let c1 = p.c0 + x2 * p.c1;
        let c = c1 + x4 * p.c2;
        (c + x6 * c2) as f32
    }
}

/// Reduce x modulo pi/2 for |x| < 120.
///
/// hpi_inv is prescaled by 2^24 so the quadrant sits in bits 24..31 of the
/// truncated product; the +0x800000 rounds to nearest without the usual
/// truncation bias for negative inputs.
#[inline(always)]
fn reduce_fast(x: f64, p: &SinCos, np: &mut i32) -> f64 {
    let r = x * p.hpi_inv;
    let n = ((r as i32).wrapping_add(0x800000)) >> 24;
    *np = n;
    x - f64::from(n) * p.hpi
}

/// Reduce huge finite arguments modulo pi/2.
///
/// Multiplies the 24-bit mantissa by a 96-bit window of 2/pi selected by
/// the exponent, giving the quadrant in the top bits and a 62-bit
/// fixed-point remainder scaled back to radians by `PI63`.
fn reduce_large(xi: u32, np: &mut i32) -> f64 {
    let arr = &INV_PIO4[((xi >> 26) & 15) as usize..];
    let shift = (xi >> 23) & 7;

    let xi = ((xi & 0xffffff) | 0x800000) << shift;

    let res0 = xi.wrapping_mul(arr[0]) as u64;
    let res1 = u64::from(xi) * u64::from(arr[4]);
    let res2 = u64::from(xi) * u64::from(arr[8]);
    let mut res0 = (res2 >> 32) | (res0 << 32);
    res0 = res0.wrapping_add(res1);

    let n = (res0.wrapping_add(1 << 61)) >> 62;
    res0 = res0.wrapping_sub(n << 62);
    *np = n as i32;
    (res0 as i64 as f64) * PI63
}

/// Single-precision sine, exact over the full finite range.
///
/// # Example
///
/// ```rust
/// let s = lumen_math::scalar::sinf(core::f32::consts::FRAC_PI_2);
/// assert_eq!(s, 1.0);
/// ```
///
/// # Error Bounds
///
/// Worst-case error is below 0.6 ULP for all finite inputs, including the
/// huge-argument range where naive reduction loses every significant bit.
pub fn sinf(y: f32) -> f32 {
    let x = f64::from(y);
    let mut n = 0i32;
    let mut p = &SINCOS_TABLE[0];

    match classify(y) {
        ReductionPath::Small => {
            if abstop12(y) < abstop12(f32::from_bits(0x39800000)) {
                // Below 2^-12 the cubic term is under half an ULP.
                return y;
            }
            sinf_poly(x, x * x, p, 0)
        }
        ReductionPath::Fast => {
            let x = reduce_fast(x, p, &mut n);
            let s = p.sign[(n & 3) as usize];
            if n & 2 != 0 {
                p = &SINCOS_TABLE[1];
            }
            sinf_poly(x * s, x * x, p, n)
        }
        ReductionPath::Large => {
            let xi = y.to_bits();
            let sign = (xi >> 31) as i32;
            let x = reduce_large(xi, &mut n);
            let s = p.sign[((n + sign) & 3) as usize];
            if (n + sign) & 2 != 0 {
                p = &SINCOS_TABLE[1];
            }
            sinf_poly(x * s, x * x, p, n)
        }
        ReductionPath::Invalid => invalidf(y),
    }
}

/// Single-precision cosine, exact over the full finite range.
///
/// # Example
///
/// ```rust
/// assert_eq!(lumen_math::scalar::cosf(0.0), 1.0);
/// ```
///
/// # Error Bounds
///
/// Worst-case error is below 0.6 ULP for all finite inputs.
pub fn cosf(y: f32) -> f32 {
    let x = f64::from(y);
    let mut n = 0i32;
    let mut p = &SINCOS_TABLE[0];

    match classify(y) {
        ReductionPath::Small => {
            if abstop12(y) < abstop12(f32::from_bits(0x39800000)) {
                // cos rounds to exactly 1.0 below 2^-12.
                return 1.0;
            }
            sinf_poly(x, x * x, p, 1)
        }
        ReductionPath::Fast => {
            let x = reduce_fast(x, p, &mut n);
            let s = p.sign[(n & 3) as usize];
            if n & 2 != 0 {
                p = &SINCOS_TABLE[1];
            }
            sinf_poly(x * s, x * x, p, n ^ 1)
        }
        ReductionPath::Large => {
            let xi = y.to_bits();
            let sign = (xi >> 31) as i32;
            let x = reduce_large(xi, &mut n);
            let s = p.sign[((n + sign) & 3) as usize];
            if (n + sign) & 2 != 0 {
                p = &SINCOS_TABLE[1];
            }
            sinf_poly(x * s, x * x, p, n ^ 1)
        }
        ReductionPath::Invalid => invalidf(y),
    }
}
