//! Statement terms.

use std::fmt;

/// Object position of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Reference to another node.
    Iri(String),
    /// Plain literal, kept in its original textual form.
    Literal(String),
}

impl Term {
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Iri(value.into())
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Term::Iri(v) | Term::Literal(v) => v,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(v) => write!(f, "<{v}>"),
            Term::Literal(v) => write!(f, "{v:?}"),
        }
    }
}

/// A subject-predicate-object statement. Subjects and predicates are always IRIs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }

    pub fn iri(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self::new(subject, predicate, Term::iri(object))
    }

    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(subject, predicate, Term::literal(value))
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> <{}> {} .", self.subject, self.predicate, self.object)
    }
}
