//! Build script for lumen-math
//!
//! Generates the double-precision logarithm lookup table into OUT_DIR.
//!
//! The table covers z in [OFF, 2*OFF) where OFF = 0x3fe6900900000000
//! (~0.70508), split into N = 128 subintervals selected by the top mantissa
//! bits of z - OFF. For each subinterval a representative point c near the
//! center is chosen and the entry stores:
//!
//!   invc   = 1/c rounded to double
//!   logc   = -ln(invc), so that log(z) = log1p(z*invc - 1) + logc holds
//!   log10c = -log10(invc)
//!
//! The subinterval containing 1.0 is pinned to c = 1 (invc = 1, logc = 0):
//! the reduced residual for x = 1.0 is then exactly zero and log(1.0)
//! evaluates to exactly 0.0.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const TABLE_BITS: u32 = 7;
const N: usize = 1 << TABLE_BITS;
const OFF: u64 = 0x3fe6900900000000;
const ONE: u64 = 0x3ff0000000000000;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut invc = [0f64; N];
    let mut logc = [0f64; N];
    let mut log10c = [0f64; N];

    for i in 0..N {
        // Bit-pattern range of z for this subinterval.
        let start = OFF + ((i as u64) << (52 - TABLE_BITS));
        let end = start + (1u64 << (52 - TABLE_BITS));

        if (start..end).contains(&ONE) {
            invc[i] = 1.0;
            logc[i] = 0.0;
            log10c[i] = 0.0;
        } else {
            let c = f64::from_bits(start + (1u64 << (52 - TABLE_BITS - 1)));
            let ic = 1.0 / c;
            invc[i] = ic;
            logc[i] = -ic.ln();
            log10c[i] = -ic.log10();
        }
    }

    let mut out = String::new();
    out.push_str("// Generated by build.rs - do not edit.\n");
    out.push_str("pub(crate) static LOG_TABLE: LogTable = LogTable {\n");
    for (name, vals) in [("invc", &invc), ("logc", &logc), ("log10c", &log10c)] {
        writeln!(out, "    {}: [", name).unwrap();
        for v in vals.iter() {
            writeln!(out, "        f64::from_bits(0x{:016x}),", v.to_bits()).unwrap();
        }
        out.push_str("    ],\n");
    }
    out.push_str("};\n");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    fs::write(Path::new(&out_dir).join("log_table.rs"), out).expect("failed to write log table");
}
