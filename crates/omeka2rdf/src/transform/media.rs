use tracing::info;

use super::{run_batch, BatchReport};
use crate::error::RecordError;
use crate::graph::Graph;
use crate::model::vocab::{cnt, keys, o, standard};
use crate::model::{Category, Triple};
use crate::record::Record;

/// Emit type, label, source and owning item for every media record.
pub fn transform_media(media: &[Record], graph: &mut Graph) -> BatchReport {
    info!(count = media.len(), "creating media triples");
    run_batch(Category::Media, media, graph, map_media)
}

fn map_media(media: &Record) -> Result<Vec<Triple>, RecordError> {
    let subject = media.id()?;
    let mut triples = Vec::new();

    // Content-as-text media carry their own class and the text itself.
    let content_type = media
        .types()?
        .into_iter()
        .find_map(|t| t.strip_prefix(keys::CONTENT_MARKER));
    match content_type {
        Some(class) => {
            triples.push(Triple::iri(subject, standard::RDF_TYPE, format!("{}{class}", cnt::NS)));
            if let Some(chars) = media.text(keys::CHARS) {
                triples.push(Triple::literal(subject, cnt::CHARS, chars));
            }
        }
        None => triples.push(Triple::iri(subject, standard::RDF_TYPE, o::MEDIA)),
    }

    if let Some(title) = media.text(keys::TITLE) {
        triples.push(Triple::literal(subject, standard::RDFS_LABEL, title));
    }

    // Sources are often file names or malformed URLs, so keep them as text.
    if let Some(source) = media.text(keys::SOURCE) {
        triples.push(Triple::literal(subject, o::SOURCE, source));
    }

    if let Some(item) = media.reference(keys::ITEM)? {
        triples.push(Triple::iri(subject, o::ITEM, item));
    }

    Ok(triples)
}
