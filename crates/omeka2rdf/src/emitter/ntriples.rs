use std::io::{self, Write};

use super::{escape_literal, TriplesEmitter};
use crate::model::iri::escape_iri;

/// N-Triples format emitter. Streams triples as `<s> <p> <o> .` lines.
pub struct NTriplesEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> NTriplesEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }
}

impl<W: Write> TriplesEmitter for NTriplesEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "<{}> <{}> <{}> .",
            escape_iri(subject),
            escape_iri(predicate),
            escape_iri(object)
        )?;
        self.count += 1;
        Ok(())
    }

    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "<{}> <{}> \"{}\" .",
            escape_iri(subject),
            escape_iri(predicate),
            escape_literal(value)
        )?;
        self.count += 1;
        Ok(())
    }

    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()> {
        // N-Triples has no prefixes; keep them as a comment for readers.
        writeln!(self.writer, "# @prefix {prefix}: <{iri}> .")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
