//! Single-argument call forwarding.
//!
//! The adapters exposed to Python are thin wrappers over this seam: invoke
//! a caller-supplied callable with exactly one argument and hand back the
//! result untouched.

/// Invoke `f` with `arg` and return its result verbatim.
///
/// The callable and its argument are consumed for one invocation; nothing
/// is copied, validated, or interpreted on either side of the call. A
/// panic inside `f` unwinds through unchanged, and a `Result`-returning
/// `f` hands its `Err` straight back to the caller.
pub fn forward<A, R, F>(f: F, arg: A) -> R
where
    F: FnOnce(A) -> R,
{
    f(arg)
}
