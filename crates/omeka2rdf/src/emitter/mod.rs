//! Streaming RDF serializers.

pub mod ntriples;
pub mod turtle;

use std::io;

/// Sink for RDF statements in one serialization format.
pub trait TriplesEmitter {
    /// Emit a triple with an IRI object.
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()>;
    /// Emit a triple with a plain string literal object.
    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()>;
    /// Register a namespace prefix. Must be called before the first triple.
    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()>;
    /// Terminate any open statement and flush buffered output.
    fn flush(&mut self) -> io::Result<()>;
    /// Return the number of triples emitted so far.
    fn triple_count(&self) -> u64;
}

/// Escape a string for a quoted literal (RDF 1.1 N-Triples `ECHAR`/`UCHAR`).
/// Turtle accepts the same escapes.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}
