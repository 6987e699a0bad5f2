//! Record → statement mapping, one transformer per record category.
//!
//! Each transformer maps records one at a time. A record's statements are
//! committed to the graph only once the whole record has mapped; a record
//! that fails is reported in the [`BatchReport`] and the batch moves on.

pub mod collections;
pub mod items;
pub mod media;

use tracing::warn;

use crate::error::RecordError;
use crate::graph::Graph;
use crate::model::{Category, Triple};
use crate::record::Record;

pub use collections::transform_collections;
pub use items::transform_items;
pub use media::transform_media;

/// A record that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFailure {
    /// The record's `@id`, when it had one.
    pub id: Option<String>,
    pub error: RecordError,
}

/// Outcome of one transformer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub category: Category,
    /// Records whose statements were committed.
    pub converted: usize,
    /// Statements newly added to the graph.
    pub statements: usize,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            converted: 0,
            statements: 0,
            failures: Vec::new(),
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Map every record with `map_record`, committing successes to `graph`.
pub(crate) fn run_batch<F>(
    category: Category,
    records: &[Record],
    graph: &mut Graph,
    mut map_record: F,
) -> BatchReport
where
    F: FnMut(&Record) -> Result<Vec<Triple>, RecordError>,
{
    let mut report = BatchReport::new(category);
    for record in records {
        match map_record(record) {
            Ok(triples) => {
                report.statements += graph.extend(triples);
                report.converted += 1;
            }
            Err(error) => {
                let id = record.display_id();
                warn!(
                    %category,
                    id = id.as_deref().unwrap_or("unknown"),
                    %error,
                    "skipping record"
                );
                report.failures.push(RecordFailure { id, error });
            }
        }
    }
    report
}
