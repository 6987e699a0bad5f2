//! In-memory statement accumulator shared by the transformers.

use indexmap::IndexSet;

use crate::emitter::TriplesEmitter;
use crate::model::{NamespaceTable, Term, Triple};

/// Append-only set of statements plus the prefixes to bind on output.
///
/// Insertion order is kept so serialized output follows record order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    namespaces: NamespaceTable,
    triples: IndexSet<Triple>,
}

impl Graph {
    /// Empty graph with `namespaces` registered for serialization.
    pub fn new(namespaces: &NamespaceTable) -> Self {
        Self {
            namespaces: namespaces.clone(),
            triples: IndexSet::new(),
        }
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// Add a statement. Returns `false` if it was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Add statements, returning how many were new.
    pub fn extend(&mut self, triples: impl IntoIterator<Item = Triple>) -> usize {
        let mut added = 0;
        for triple in triples {
            if self.add(triple) {
                added += 1;
            }
        }
        added
    }

    /// Append every statement of `other`; prefixes of `other` are bound too.
    pub fn merge(&mut self, other: Graph) {
        self.namespaces = std::mem::take(&mut self.namespaces).merged(&other.namespaces);
        self.triples.extend(other.triples);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Objects of every statement with the given subject and predicate.
    pub fn objects(&self, subject: &str, predicate: &str) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }

    /// Distinct subjects, in first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        let seen: IndexSet<&str> = self.triples.iter().map(|t| t.subject.as_str()).collect();
        seen.into_iter().collect()
    }

    /// Replay the graph into an emitter: prefixes first, then every statement.
    pub fn write_to<E: TriplesEmitter>(&self, emitter: &mut E) -> std::io::Result<u64> {
        for (prefix, iri) in self.namespaces.iter() {
            emitter.add_prefix(prefix, iri)?;
        }
        for triple in &self.triples {
            match &triple.object {
                Term::Iri(object) => emitter.emit_iri(&triple.subject, &triple.predicate, object)?,
                Term::Literal(value) => {
                    emitter.emit_literal(&triple.subject, &triple.predicate, value)?
                }
            }
        }
        emitter.flush()?;
        Ok(emitter.triple_count())
    }
}

/// Create the graph all transformers of one run write into.
pub fn initialize_graph(namespaces: &NamespaceTable) -> Graph {
    tracing::info!(prefixes = namespaces.len(), "adding namespaces to the RDF graph");
    Graph::new(namespaces)
}
