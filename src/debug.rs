//! Diagnostic sequence printing
//!
//! Renders an ordered sequence of values as one bracketed, comma-separated
//! line: `[1,2,3,]` plus a newline. The trailing comma after the final
//! element is part of the format that log-scraping tooling expects; do not
//! "fix" it. The empty sequence prints as `[]`.
//!
//! These routines are developer-facing diagnostics only. They carry no
//! performance contract and must never sit on a latency-sensitive path or
//! influence computed results.
//!
//! The strict entry points are restricted at compile time to primitive
//! integers via [`DecimalDisplay`]; non-integer types go through the
//! `*_with` variants, where the caller supplies the rendering explicitly
//! rather than inheriting an integer format that would misrepresent them.

use num_traits::PrimInt;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Types with a canonical decimal text representation.
///
/// Blanket-implemented for every primitive integer. Floats and other
/// numeric types are intentionally excluded: render them through
/// [`format_sequence_with`] or [`log_sequence_with`] instead.
pub trait DecimalDisplay {
    /// Append this value's decimal representation to `out`.
    fn write_decimal(&self, out: &mut String);
}

impl<T: PrimInt + fmt::Display> DecimalDisplay for T {
    fn write_decimal(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = write!(out, "{self}");
    }
}

/// Format a sequence as a bracketed, comma-separated string (no newline).
///
/// # Example
/// ```
/// use kernutil::debug::format_sequence;
/// assert_eq!(format_sequence(&[1, 2, 3]), "[1,2,3,]");
/// assert_eq!(format_sequence::<i32>(&[]), "[]");
/// ```
pub fn format_sequence<T: DecimalDisplay>(values: &[T]) -> String {
    format_sequence_with(values, T::write_decimal)
}

/// Format a sequence with a caller-supplied per-element rendering.
///
/// The bracket/comma layout is identical to [`format_sequence`]; only the
/// element text differs. This is the entry point for non-integer types.
pub fn format_sequence_with<T>(values: &[T], mut render: impl FnMut(&T, &mut String)) -> String {
    let mut line = String::with_capacity(2 + values.len() * 4);
    line.push('[');
    for value in values {
        render(value, &mut line);
        line.push(',');
    }
    line.push(']');
    line
}

/// Write a sequence as one line to the given writer.
///
/// The whole line, newline included, is emitted as a single `write_all`
/// call, so concurrent callers sharing a line-atomic writer never interleave
/// characters within a line.
pub fn write_sequence<W: Write, T: DecimalDisplay>(writer: &mut W, values: &[T]) -> io::Result<()> {
    let mut line = format_sequence(values);
    line.push('\n');
    writer.write_all(line.as_bytes())
}

/// Write a sequence as one line using a caller-supplied rendering.
pub fn write_sequence_with<W: Write, T>(
    writer: &mut W,
    values: &[T],
    render: impl FnMut(&T, &mut String),
) -> io::Result<()> {
    let mut line = format_sequence_with(values, render);
    line.push('\n');
    writer.write_all(line.as_bytes())
}

/// Log a sequence of integers to the diagnostic stream (stderr).
///
/// Takes the stderr lock for the duration of the write, so a line is never
/// interleaved with another thread's output. Write failures are swallowed;
/// diagnostics have no error conditions.
pub fn log_sequence<T: DecimalDisplay>(values: &[T]) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = write_sequence(&mut handle, values);
}

/// Log a sequence to stderr using a caller-supplied rendering.
pub fn log_sequence_with<T>(values: &[T], render: impl FnMut(&T, &mut String)) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let _ = write_sequence_with(&mut handle, values, render);
}
