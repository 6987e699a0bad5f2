//! Prefix → namespace table handed to the transformers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::vocab::{cnt, foaf, o, standard};

/// Immutable mapping from short prefix to base URI.
///
/// Ordered so that serialized `@prefix` blocks are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamespaceTable {
    prefixes: BTreeMap<String, String>,
}

impl NamespaceTable {
    /// An empty table. Every namespaced field will be skipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The vocabularies an Omeka S install ships with.
    pub fn standard() -> Self {
        Self::empty()
            .with("rdf", standard::RDF)
            .with("rdfs", standard::RDFS)
            .with("xsd", standard::XSD)
            .with(o::PREFIX, o::NS)
            .with(cnt::PREFIX, cnt::NS)
            .with(foaf::PREFIX, foaf::NS)
            .with("dcterms", "http://purl.org/dc/terms/")
            .with("dctype", "http://purl.org/dc/dcmitype/")
            .with("bibo", "http://purl.org/ontology/bibo/")
            .with("skos", "http://www.w3.org/2004/02/skos/core#")
            .with("owl", "http://www.w3.org/2002/07/owl#")
    }

    /// Builder-style insert; a later binding for the same prefix wins.
    pub fn with(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), iri.into());
        self
    }

    /// Overlay `other` on top of this table.
    pub fn merged(mut self, other: &NamespaceTable) -> Self {
        for (prefix, iri) in &other.prefixes {
            self.prefixes.insert(prefix.clone(), iri.clone());
        }
        self
    }

    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Concatenate the namespace base with `local`, if `prefix` is bound.
    pub fn expand(&self, prefix: &str, local: &str) -> Option<String> {
        self.get(prefix).map(|ns| format!("{ns}{local}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, iri)| (p.as_str(), iri.as_str()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NamespaceTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            prefixes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
