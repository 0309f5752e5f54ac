//! Single-argument call-forwarding adapters.
//!
//! Each adapter invokes a caller-supplied callable with exactly one
//! positional argument and returns the result verbatim. Any exception the
//! callable raises propagates to the Python caller unchanged; the adapters
//! never construct an error of their own.
//!
//! The two entry points differ only in the declared type of the second
//! parameter. The binding layer they were ported from dispatched both
//! under one name on that type; here they keep their distinct source-level
//! names, with `pyspeedy` retaining the stricter sequence requirement.

use pyo3::prelude::*;
use pyo3::types::PySequence;

/// Call `f(seq)` and return whatever `f` returns.
///
/// The second argument must satisfy the sequence protocol; passing
/// anything else raises `TypeError` before `f` is invoked.
#[pyfunction]
pub(crate) fn pyspeedy<'py>(
    f: &Bound<'py, PyAny>,
    seq: &Bound<'py, PySequence>,
) -> PyResult<Bound<'py, PyAny>> {
    f.call1((seq,))
}

/// Call `f(obj)` and return whatever `f` returns.
#[pyfunction]
pub(crate) fn pyspeedy2<'py>(
    f: &Bound<'py, PyAny>,
    obj: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyAny>> {
    f.call1((obj,))
}
