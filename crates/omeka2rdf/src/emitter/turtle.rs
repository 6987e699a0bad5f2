use std::collections::BTreeMap;
use std::io::{self, Write};

use super::{escape_literal, TriplesEmitter};
use crate::model::iri::escape_iri;

/// Turtle format emitter with prefix support.
///
/// Consecutive statements about the same subject share one subject block
/// (`s p1 o1 ;\n    p2 o2 .`).
pub struct TurtleEmitter<W: Write> {
    writer: W,
    count: u64,
    prefixes: BTreeMap<String, String>,
    prefix_written: bool,
    open_subject: Option<String>,
}

impl<W: Write> TurtleEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            count: 0,
            prefixes: BTreeMap::new(),
            prefix_written: false,
            open_subject: None,
        }
    }

    /// Write all registered prefixes (called before first triple).
    fn write_prefixes(&mut self) -> io::Result<()> {
        if self.prefix_written {
            return Ok(());
        }
        self.prefix_written = true;
        for (prefix, iri) in &self.prefixes {
            writeln!(self.writer, "@prefix {prefix}: <{}> .", escape_iri(iri))?;
        }
        if !self.prefixes.is_empty() {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    /// Try to compact an IRI using registered prefixes.
    fn compact_iri(&self, iri: &str) -> String {
        // Longest matching namespace wins.
        let best = self
            .prefixes
            .iter()
            .filter(|(_, ns)| !ns.is_empty() && iri.starts_with(ns.as_str()))
            .max_by_key(|(_, ns)| ns.len());
        if let Some((prefix, ns)) = best {
            let local = &iri[ns.len()..];
            if is_simple_local_name(local) {
                return format!("{prefix}:{local}");
            }
        }
        format!("<{}>", escape_iri(iri))
    }

    /// Open a statement for `subject`, continuing the current block if the
    /// subject is unchanged.
    fn start_statement(&mut self, subject: &str) -> io::Result<()> {
        self.write_prefixes()?;
        if self.open_subject.as_deref() == Some(subject) {
            write!(self.writer, " ;\n    ")?;
            return Ok(());
        }
        if self.open_subject.is_some() {
            writeln!(self.writer, " .")?;
        }
        self.write_subject(subject)
    }

    fn write_subject(&mut self, subject: &str) -> io::Result<()> {
        let s = self.compact_iri(subject);
        write!(self.writer, "{s} ")?;
        self.open_subject = Some(subject.to_string());
        Ok(())
    }

    fn close_statement(&mut self) -> io::Result<()> {
        if self.open_subject.take().is_some() {
            writeln!(self.writer, " .")?;
        }
        Ok(())
    }
}

/// Local names made of ASCII letters, digits, `_` and inner `-` are written
/// as prefixed names; anything else stays a full IRI.
fn is_simple_local_name(local: &str) -> bool {
    !local.is_empty()
        && !local.starts_with('-')
        && !local.ends_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl<W: Write> TriplesEmitter for TurtleEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        self.start_statement(subject)?;
        let p = self.compact_iri(predicate);
        let o = self.compact_iri(object);
        write!(self.writer, "{p} {o}")?;
        self.count += 1;
        Ok(())
    }

    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()> {
        self.start_statement(subject)?;
        let p = self.compact_iri(predicate);
        write!(self.writer, "{p} \"{}\"", escape_literal(value))?;
        self.count += 1;
        Ok(())
    }

    fn add_prefix(&mut self, prefix: &str, iri: &str) -> io::Result<()> {
        self.prefixes.insert(prefix.to_string(), iri.to_string());
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.write_prefixes()?;
        self.close_statement()?;
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
