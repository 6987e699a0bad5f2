//! IRI checks and escaping for serialized output.

use std::borrow::Cow;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// ASCII characters that may not appear inside an N-Triples/Turtle `<IRIREF>`.
/// Everything else, including `%` from already-encoded input and any
/// non-ASCII character, passes through.
const IRIREF_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Whether a reference value is treated as a graph node rather than text.
///
/// Leading and trailing whitespace is ignored.
pub fn is_absolute_reference(value: &str) -> bool {
    value.trim().starts_with("http")
}

/// Escape an IRI for use between angle brackets.
///
/// Only forbidden ASCII characters are percent-encoded, so `Réunion` stays
/// `Réunion` and names the same node in every output format.
pub fn escape_iri(iri: &str) -> Cow<'_, str> {
    let mut escaped = String::with_capacity(iri.len());
    let mut rest = iri;
    while !rest.is_empty() {
        let ascii_end = rest.find(|c: char| !c.is_ascii()).unwrap_or(rest.len());
        let (ascii, tail) = rest.split_at(ascii_end);
        escaped.extend(utf8_percent_encode(ascii, IRIREF_ENCODE_SET));
        let other_end = tail.find(|c: char| c.is_ascii()).unwrap_or(tail.len());
        let (other, tail) = tail.split_at(other_end);
        escaped.push_str(other);
        rest = tail;
    }
    if escaped == iri {
        Cow::Borrowed(iri)
    } else {
        Cow::Owned(escaped)
    }
}
