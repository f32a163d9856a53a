//! Constant lookup tables shared by the kernels
//!
//! The logarithm table is generated by `build.rs` (see that file for the
//! derivation); everything else is written out as bit patterns so the
//! values survive source formatting exactly.

/// Number of index bits for the log table.
pub(crate) const LOG_TABLE_BITS: u32 = 7;

/// Number of subintervals in the log table.
pub(crate) const LOG_TABLE_N: usize = 1 << LOG_TABLE_BITS;

/// Double-precision log range-reduction table.
///
/// Entry `i` covers `z` with `(bits(z) - OFF) >> (52 - LOG_TABLE_BITS) == i`
/// and satisfies `log(z) = log1p(z * invc[i] - 1) + logc[i]`.
pub(crate) struct LogTable {
    pub invc: [f64; LOG_TABLE_N],
    pub logc: [f64; LOG_TABLE_N],
    pub log10c: [f64; LOG_TABLE_N],
}

include!(concat!(env!("OUT_DIR"), "/log_table.rs"));

/// Polynomial and reduction constants for single-precision sine/cosine.
///
/// Two entries: `SINCOS_TABLE[0]` evaluates sin/cos directly, while
/// `SINCOS_TABLE[1]` carries negated cosine coefficients and so evaluates
/// -cos, used when quadrant bit 1 flips the sign. The sine branch handles
/// its sign by negating the reduced argument instead, so `s1..s3` (odd
/// polynomial) are shared.
pub(crate) struct SinCos {
    /// Quadrant sign pattern for the reduced argument.
    pub sign: [f64; 4],
    /// 4/pi prescaled by 2^24 so the quadrant lands in bits 24..31 of the
    /// truncated product.
    pub hpi_inv: f64,
    /// pi/2, single value (double precision is enough for |x| < 120).
    pub hpi: f64,
    /// Even (cosine) polynomial coefficients, c0 + c1 x^2 + .. + c4 x^8.
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    /// Odd (sine) polynomial coefficients, x + s1 x^3 + s2 x^5 + s3 x^7.
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

pub(crate) static SINCOS_TABLE: [SinCos; 2] = [
    SinCos {
        sign: [1.0, -1.0, -1.0, 1.0],
        hpi_inv: f64::from_bits(0x41645f306dc9c883),
        hpi: f64::from_bits(0x3ff921fb54442d18),
        c0: f64::from_bits(0x3ff0000000000000),
        c1: f64::from_bits(0xbfdffffffd0c621c),
        c2: f64::from_bits(0x3fa55553e1068f19),
        c3: f64::from_bits(0xbf56c087e89a359d),
        c4: f64::from_bits(0x3ef99343027bf8c3),
        s1: f64::from_bits(0xbfc555545995a603),
        s2: f64::from_bits(0x3f81107605230bc4),
        s3: f64::from_bits(0xbf2994eb3774cf24),
    },
    SinCos {
        sign: [1.0, -1.0, -1.0, 1.0],
        hpi_inv: f64::from_bits(0x41645f306dc9c883),
        hpi: f64::from_bits(0x3ff921fb54442d18),
        c0: f64::from_bits(0xbff0000000000000),
        c1: f64::from_bits(0x3fdffffffd0c621c),
        c2: f64::from_bits(0xbfa55553e1068f19),
        c3: f64::from_bits(0x3f56c087e89a359d),
        c4: f64::from_bits(0xbef99343027bf8c3),
        s1: f64::from_bits(0xbfc555545995a603),
        s2: f64::from_bits(0x3f81107605230bc4),
        s3: f64::from_bits(0xbf2994eb3774cf24),
    },
];

/// Staggered 2/pi bit table for huge-argument reduction.
///
/// Indexed by the input's exponent: `&INV_PIO4[(bits >> 26) & 15]` gives a
/// 96-bit window (entries 0, 4 and 8 of the slice) of the binary expansion
/// of 2/pi aligned so the product with the mantissa keeps the quadrant and
/// the fractional remainder.
pub(crate) static INV_PIO4: [u32; 24] = [
    0xa2, 0xa2f9, 0xa2f983, 0xa2f9836e,
    0xf9836e4e, 0x836e4e44, 0x6e4e4415, 0x4e441529,
    0x441529fc, 0x1529fc27, 0x29fc2757, 0xfc2757d1,
    0x2757d1f5, 0x57d1f534, 0xd1f534dd, 0xf534ddc0,
    0x34ddc0db, 0xddc0db62, 0xc0db6295, 0xdb629599,
    0x6295993c, 0x95993c43, 0x993c4390, 0x3c439041,
];

/// pi scaled by 2^-63, converting the 62-bit fixed-point remainder from
/// huge-argument reduction back to radians.
pub(crate) const PI63: f64 = f64::from_bits(0x3c1921fb54442d18);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_table_pins_one() {
        // The subinterval containing 1.0 must use c = 1 exactly so that
        // log(1.0) reduces to a zero residual.
        let one = 1.0f64.to_bits();
        let off = 0x3fe6900900000000u64;
        let i = ((one.wrapping_sub(off) >> (52 - LOG_TABLE_BITS)) & (LOG_TABLE_N as u64 - 1)) as usize;
        assert_eq!(LOG_TABLE.invc[i], 1.0);
        assert_eq!(LOG_TABLE.logc[i], 0.0);
        assert_eq!(LOG_TABLE.log10c[i], 0.0);
    }

    #[test]
    fn test_log_table_identity_holds() {
        // Spot-check log(c) == logc at each entry's representative point.
        for i in 0..LOG_TABLE_N {
            let c = 1.0 / LOG_TABLE.invc[i];
            assert!((libm::log(c) - LOG_TABLE.logc[i]).abs() < 1e-9);
            assert!((libm::log10(c) - LOG_TABLE.log10c[i]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sincos_second_entry_negates_cosine() {
        let a = &SINCOS_TABLE[0];
        let b = &SINCOS_TABLE[1];
        assert_eq!(a.c0, -b.c0);
        assert_eq!(a.c4, -b.c4);
        assert_eq!(a.s1, b.s1);
        assert_eq!(a.sign, b.sign);
    }

    #[test]
    fn test_hpi_inv_scaling() {
        // hpi_inv is (2/pi) * 2^24 to within rounding.
        let expected = 2.0 / core::f64::consts::PI * (1u64 << 24) as f64;
        assert!((SINCOS_TABLE[0].hpi_inv - expected).abs() < 1.0);
    }
}
