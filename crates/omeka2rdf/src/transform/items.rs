//! Item mapping.
//!
//! For every item:
//! - `o:title` becomes an `rdfs:label`;
//! - each `o:item_set` becomes an `o:item_set` link;
//! - each property field `prefix:local` becomes one statement per value,
//!   with the predicate expanded through the namespace table;
//! - each `o:media` is looked up and its `o:original_url` linked with
//!   `foaf:depiction`;
//! - each namespaced, non-Omeka `@type` entry becomes an `rdf:type`.

use serde_json::Value;
use tracing::{debug, info, warn};

use super::{run_batch, BatchReport};
use crate::error::RecordError;
use crate::graph::Graph;
use crate::model::iri::is_absolute_reference;
use crate::model::vocab::{foaf, keys, o, standard};
use crate::model::{Category, NamespaceTable, Triple};
use crate::record::{classify_key, classify_type, property_values, FieldElement, FieldKey, Record};
use crate::resolver::MediaResolver;

/// Emit the statements for every item record.
pub fn transform_items<R: MediaResolver + ?Sized>(
    items: &[Record],
    namespaces: &NamespaceTable,
    resolver: &R,
    graph: &mut Graph,
) -> BatchReport {
    info!(count = items.len(), "creating item triples");
    let mapper = ItemMapper {
        namespaces,
        resolver,
    };
    run_batch(Category::Items, items, graph, |item| mapper.map(item))
}

struct ItemMapper<'a, R: ?Sized> {
    namespaces: &'a NamespaceTable,
    resolver: &'a R,
}

impl<R: MediaResolver + ?Sized> ItemMapper<'_, R> {
    fn map(&self, item: &Record) -> Result<Vec<Triple>, RecordError> {
        let subject = item.id()?;
        let mut triples = Vec::new();

        if let Some(title) = item.text(keys::TITLE) {
            triples.push(Triple::literal(subject, standard::RDFS_LABEL, title));
        }

        for set in item.reference_ids(keys::ITEM_SET)? {
            triples.push(Triple::iri(subject, o::ITEM_SET, set));
        }

        for (key, value) in item.fields() {
            match classify_key(key) {
                FieldKey::Namespaced { prefix, local } => {
                    self.map_property(subject, key, prefix, local, value, &mut triples)?;
                }
                FieldKey::MediaReference => {
                    self.map_media(subject, item, &mut triples)?;
                }
                FieldKey::Unrecognized if key.starts_with(':') => {
                    debug!(item = subject, "property {key} has no prefix, skipping");
                }
                FieldKey::Reserved | FieldKey::Unrecognized => {}
            }
        }

        self.map_types(subject, item, &mut triples)?;

        Ok(triples)
    }

    fn map_property(
        &self,
        subject: &str,
        key: &str,
        prefix: &str,
        local: &str,
        value: &Value,
        triples: &mut Vec<Triple>,
    ) -> Result<(), RecordError> {
        let Some(predicate) = self.namespaces.expand(prefix, local) else {
            info!(prefix, item = subject, "prefix not found, skipping field {key}");
            return Ok(());
        };
        let Some(elements) = property_values(value) else {
            warn!(item = subject, field = key, "field is not a list of values, skipping");
            return Ok(());
        };
        if let Value::Array(entries) = value {
            let dropped = entries.len() - elements.len();
            if dropped > 0 {
                debug!(item = subject, field = key, dropped, "skipping values that are not objects");
            }
        }

        for element in elements {
            let element = FieldElement::parse(key, element)?;
            if let Some(literal) = element.value {
                triples.push(Triple::literal(subject, &predicate, literal));
            }
            if let Some(reference) = element.reference {
                if is_absolute_reference(&reference) {
                    triples.push(Triple::iri(subject, &predicate, reference));
                } else {
                    debug!(
                        item = subject,
                        "URI {reference} doesn't start with http, keeping it as a literal"
                    );
                    triples.push(Triple::literal(subject, &predicate, reference));
                }
                // The label travels with the reference as a second statement.
                if let Some(label) = element.label {
                    triples.push(Triple::literal(subject, &predicate, label));
                }
            }
        }
        Ok(())
    }

    fn map_media(
        &self,
        subject: &str,
        item: &Record,
        triples: &mut Vec<Triple>,
    ) -> Result<(), RecordError> {
        for media_id in item.reference_ids(keys::MEDIA)? {
            let media = match self.resolver.fetch_media(media_id) {
                Ok(Some(media)) => media,
                Ok(None) => {
                    debug!(item = subject, media = media_id, "media lookup returned nothing");
                    continue;
                }
                Err(error) => {
                    warn!(item = subject, media = media_id, %error, "media lookup failed");
                    continue;
                }
            };
            if let Some(url) = media.text(keys::ORIGINAL_URL) {
                triples.push(Triple::iri(subject, foaf::DEPICTION, url.trim()));
            }
        }
        Ok(())
    }

    /// `rdf:type` for every namespaced entry except Omeka's own classes.
    fn map_types(
        &self,
        subject: &str,
        item: &Record,
        triples: &mut Vec<Triple>,
    ) -> Result<(), RecordError> {
        for entry in item.types()? {
            let FieldKey::Namespaced { prefix, local } = classify_type(entry) else {
                continue;
            };
            match self.namespaces.expand(prefix, local) {
                Some(class) => triples.push(Triple::iri(subject, standard::RDF_TYPE, class)),
                None => info!(prefix, item = subject, "prefix not found, skipping type {entry}"),
            }
        }
        Ok(())
    }
}
