//! Numeric kernel and call forwarding for the purespeed extension.
//!
//! This is the leaf crate with no internal dependencies. It holds the
//! fixed 400-point transform behind the `speedy` entry point and the
//! single-argument forwarding seam the Python adapters are built on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod forward;
mod kernel;

pub use forward::forward;
pub use kernel::{
    sample_grid, speedy, transform, transform_grid, COEFF_A, COEFF_B, COEFF_C, EXPONENT, N_POINTS,
    X_STEP,
};
