//! The bounded term buffer and the scalar decoders applied to it.

use heapless::Vec;

use crate::fix::{Date, Time};

/// Data bytes a term can hold before truncation.
pub(crate) const TERM_CAPACITY: usize = 12;

/// One comma-delimited term, accumulated as raw text.
///
/// Bytes past the capacity are dropped rather than faulted on; the
/// surviving prefix still decodes, and the checksum is accumulated
/// upstream over the full wire text.
#[derive(Debug, Default)]
pub(crate) struct Term(Vec<u8, TERM_CAPACITY>);

impl Term {
    /// Append a byte, dropping it if the buffer is full.
    pub(crate) fn push(&mut self, b: u8) {
        let _ = self.0.push(b);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// The accumulated text, or an empty string if it is not UTF-8.
    pub(crate) fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).unwrap_or("")
    }
}

/// Decode a decimal term, optionally signed and fractional.
///
/// Elided and malformed terms decode to zero; the sentence grammar
/// permits empty optional fields.
pub(crate) fn number(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

/// Decode a small unsigned integer term, zero when elided.
pub(crate) fn integer(s: &str) -> u8 {
    s.parse().unwrap_or(0)
}

/// Decode a `ddmm.mmmm` coordinate term to decimal degrees.
pub(crate) fn coordinate(s: &str) -> f64 {
    let v = number(s);
    (v / 100.0).trunc() + (v % 100.0) / 60.0
}

/// The sign a hemisphere term applies to its coordinate.
pub(crate) fn sign(s: &str) -> f64 {
    match s {
        "S" | "s" | "W" | "w" => -1.0,
        _ => 1.0,
    }
}

/// Decode an `hhmmss[.sss]` term, discarding fractional seconds.
pub(crate) fn time(s: &str) -> Time {
    Time {
        hours: two_digits(s, 0),
        minutes: two_digits(s, 2),
        seconds: two_digits(s, 4),
    }
}

/// Decode a `ddmmyy` term.
pub(crate) fn date(s: &str) -> Date {
    Date {
        day: two_digits(s, 0),
        month: two_digits(s, 2),
        year: two_digits(s, 4),
    }
}

/// Decode a status letter, `A` reading as valid.
pub(crate) fn status(s: &str) -> bool {
    s == "A"
}

/// The two-digit group starting at `i`, zero when absent.
fn two_digits(s: &str, i: usize) -> u8 {
    s.get(i..i + 2).and_then(|d| d.parse().ok()).unwrap_or(0)
}
