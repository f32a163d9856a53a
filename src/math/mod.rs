//! Vector math kernels
//!
//! Each kernel is generic over [`crate::traits::SimdVector`] and compiles
//! to straight-line SIMD code on the fast path. Special inputs (as defined
//! per kernel) are re-evaluated lane-wise by an exact scalar routine and
//! merged back by mask, so throughput is only paid for when a batch
//! actually contains one.

mod log;
mod logf;
mod special;
mod trig;

pub use log::{log, log10, Base};
pub use logf::{log10f, logf};
pub use trig::{cosf, sinf};
