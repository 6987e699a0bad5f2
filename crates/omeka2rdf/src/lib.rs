//! Convert Omeka S API records (items, media, item sets) into RDF graphs.

pub mod api;
pub mod config;
pub mod emitter;
pub mod error;
pub mod graph;
pub mod model;
pub mod persist;
pub mod record;
pub mod resolver;
pub mod source;
pub mod transform;

pub use graph::{initialize_graph, Graph};
pub use model::{Category, NamespaceTable, Term, Triple};
pub use record::Record;
pub use transform::{transform_collections, transform_items, transform_media, BatchReport};
