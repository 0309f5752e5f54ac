//! The `speedy` timing stub.

use pyo3::prelude::*;

/// Run one pass of the fixed 400-point sweep and discard the result.
///
/// Exists to time the Python-to-native call path against doing the same
/// arithmetic in the interpreter. Returns `None`, cannot raise, and keeps
/// no state between calls. The GIL is released while the sweep runs.
#[pyfunction]
pub(crate) fn speedy(py: Python<'_>) {
    py.detach(purespeed_core::speedy);
}
