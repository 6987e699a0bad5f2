pub mod category;
pub mod iri;
pub mod namespace;
pub mod term;
pub mod vocab;

pub use category::Category;
pub use namespace::NamespaceTable;
pub use term::{Term, Triple};
