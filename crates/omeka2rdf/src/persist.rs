//! Writing graphs to disk, one file per record category.

use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::emitter::ntriples::NTriplesEmitter;
use crate::emitter::turtle::TurtleEmitter;
use crate::error::{ConfigError, PersistError};
use crate::graph::Graph;
use crate::model::Category;

// ---------------------------------------------------------------------------
// Format
// ---------------------------------------------------------------------------

/// Output serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[serde(alias = "nt")]
    NTriples,
    #[default]
    #[serde(alias = "ttl")]
    Turtle,
}

impl Format {
    pub fn extension(self) -> &'static str {
        match self {
            Format::NTriples => "nt",
            Format::Turtle => "ttl",
        }
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ntriples" | "nt" => Ok(Format::NTriples),
            "turtle" | "ttl" => Ok(Format::Turtle),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::NTriples => "ntriples",
            Format::Turtle => "turtle",
        })
    }
}

// ---------------------------------------------------------------------------
// OutputLayout
// ---------------------------------------------------------------------------

/// Output directory and file stem per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    pub directory: PathBuf,
    pub items: String,
    pub media: String,
    pub collections: String,
    pub combined: String,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("rdf"),
            items: "items".to_string(),
            media: "medias".to_string(),
            collections: "collections".to_string(),
            combined: "graph".to_string(),
        }
    }
}

impl OutputLayout {
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Self::default()
        }
    }

    /// Destination file for `category` in `format`.
    pub fn path_for(&self, category: Category, format: Format) -> PathBuf {
        let stem = match category {
            Category::Items => &self.items,
            Category::Media => &self.media,
            Category::Collections => &self.collections,
            Category::Combined => &self.combined,
        };
        self.directory
            .join(format!("{stem}.{}", format.extension()))
    }
}

// ---------------------------------------------------------------------------
// Saving
// ---------------------------------------------------------------------------

/// Serialize `graph` to the file for `category`, returning the path written.
pub fn write_graph(
    graph: &Graph,
    category: Category,
    format: Format,
    layout: &OutputLayout,
) -> Result<PathBuf, PersistError> {
    let path = layout.path_for(category, format);
    if !layout.directory.as_os_str().is_empty() {
        std::fs::create_dir_all(&layout.directory).map_err(|source| PersistError::CreateDir {
            path: layout.directory.clone(),
            source,
        })?;
    }
    write_file(graph, format, &path).map_err(|source| PersistError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn write_file(graph: &Graph, format: Format, path: &Path) -> std::io::Result<u64> {
    let writer = BufWriter::new(File::create(path)?);
    match format {
        Format::NTriples => graph.write_to(&mut NTriplesEmitter::new(writer)),
        Format::Turtle => graph.write_to(&mut TurtleEmitter::new(writer)),
    }
}

/// Save `graph` for `category`. Failures are logged, never returned.
pub fn save_graph(graph: &Graph, category: Category, format: Format, layout: &OutputLayout) {
    let path = layout.path_for(category, format);
    info!(
        path = %path.display(),
        %format,
        statements = graph.len(),
        "saving graph to file"
    );
    if let Err(e) = write_graph(graph, category, format, layout) {
        error!(error = %e, "an error occurred during the creation of the RDF file");
    }
}
