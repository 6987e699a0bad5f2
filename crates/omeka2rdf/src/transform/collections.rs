use tracing::info;

use super::{run_batch, BatchReport};
use crate::graph::Graph;
use crate::model::vocab::{keys, standard};
use crate::model::{Category, Triple};
use crate::record::Record;

/// Emit a label for every item set.
pub fn transform_collections(collections: &[Record], graph: &mut Graph) -> BatchReport {
    info!(count = collections.len(), "creating collection triples");
    run_batch(Category::Collections, collections, graph, |set| {
        let subject = set.id()?;
        Ok(set
            .text(keys::TITLE)
            .map(|title| Triple::literal(subject, standard::RDFS_LABEL, title))
            .into_iter()
            .collect())
    })
}
