//! RDF vocabulary constants used by the Omeka mapping.
//!
//! - `o:` prefix (http://omeka.org/s/vocabs/o#) -- Omeka S core vocabulary
//! - `o-cnt:` prefix (http://www.w3.org/2011/content#) -- content-as-text media
//! - `foaf:` prefix (http://xmlns.com/foaf/0.1/) -- depictions

/// Standard RDF/RDFS/XSD namespace URIs
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// Omeka S core vocabulary (`o:` prefix)
pub mod o {
    pub const PREFIX: &str = "o";
    pub const NS: &str = "http://omeka.org/s/vocabs/o#";

    pub const MEDIA: &str = "http://omeka.org/s/vocabs/o#Media";
    pub const ITEM_SET: &str = "http://omeka.org/s/vocabs/o#item_set";
    pub const SOURCE: &str = "http://omeka.org/s/vocabs/o#source";
    pub const ITEM: &str = "http://omeka.org/s/vocabs/o#item";
}

/// Content-as-text vocabulary (`o-cnt:` prefix)
pub mod cnt {
    pub const PREFIX: &str = "o-cnt";
    pub const NS: &str = "http://www.w3.org/2011/content#";

    pub const CHARS: &str = "http://www.w3.org/2011/content#chars";
}

/// Friend-of-a-friend (`foaf:` prefix)
pub mod foaf {
    pub const PREFIX: &str = "foaf";
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";

    pub const DEPICTION: &str = "http://xmlns.com/foaf/0.1/depiction";
}

/// JSON-LD keys and Omeka field names read from API records.
pub mod keys {
    pub const ID: &str = "@id";
    pub const TYPE: &str = "@type";
    pub const VALUE: &str = "@value";

    pub const TITLE: &str = "o:title";
    pub const LABEL: &str = "o:label";
    pub const ITEM_SET: &str = "o:item_set";
    pub const MEDIA: &str = "o:media";
    pub const ITEM: &str = "o:item";
    pub const SOURCE: &str = "o:source";
    pub const ORIGINAL_URL: &str = "o:original_url";
    pub const CHARS: &str = "o-cnt:chars";

    /// Keys starting with either marker belong to Omeka itself.
    pub const RESERVED_MARKERS: [&str; 2] = ["o:", "o-module"];
    /// Type entries with this marker are Omeka's own classes.
    pub const RESERVED_TYPE_MARKER: &str = "o:";
    /// Type-list entry marking content-as-text media.
    pub const CONTENT_MARKER: &str = "o-cnt:";
}
