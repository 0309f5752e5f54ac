//! Python bindings for the purespeed extension.
//!
//! This crate provides PyO3 bindings over `purespeed-core`. The native
//! extension is named `_purespeed` and is imported by the host package;
//! it exposes the `speedy` timing stub and the two call-forwarding
//! adapters `pyspeedy` and `pyspeedy2`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use pyo3::prelude::*;

mod forward;
mod speed;

/// The native `_purespeed` extension module.
#[pymodule]
fn _purespeed(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(speed::speedy, m)?)?;
    m.add_function(wrap_pyfunction!(forward::pyspeedy, m)?)?;
    m.add_function(wrap_pyfunction!(forward::pyspeedy2, m)?)?;
    Ok(())
}
