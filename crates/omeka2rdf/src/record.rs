//! Omeka API records and classification of their field keys.
//!
//! A [`Record`] is the JSON-LD object the API returns for an item, a media or
//! an item set. Field keys are either JSON-LD keywords (`@id`), Omeka system
//! fields (`o:title`, `o-module-mapping:marker`) or property terms
//! (`dcterms:subject`). [`classify_key`] sorts a key into one of those shapes
//! once so the transformers can dispatch on the result.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::RecordError;
use crate::model::vocab::keys;

// ---------------------------------------------------------------------------
// Key classification
// ---------------------------------------------------------------------------

/// Shape of a record field key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey<'a> {
    /// Owned by Omeka (`o:*`, `o-module*`); not mapped generically.
    Reserved,
    /// The `o:media` list of attached media.
    MediaReference,
    /// A `prefix:local` property term.
    Namespaced { prefix: &'a str, local: &'a str },
    /// No prefix separator, or an empty prefix.
    Unrecognized,
}

/// Classify a field key.
pub fn classify_key(key: &str) -> FieldKey<'_> {
    if key == keys::MEDIA {
        return FieldKey::MediaReference;
    }
    let Some((prefix, local)) = key.split_once(':') else {
        return FieldKey::Unrecognized;
    };
    if keys::RESERVED_MARKERS.iter().any(|m| key.starts_with(m)) {
        return FieldKey::Reserved;
    }
    if prefix.is_empty() {
        return FieldKey::Unrecognized;
    }
    FieldKey::Namespaced { prefix, local }
}

/// Classify a `@type` entry. Only `o:` classes are reserved here; module
/// classes such as `o-module-mapping:Marker` are ordinary namespaced terms.
pub fn classify_type(entry: &str) -> FieldKey<'_> {
    if entry.starts_with(keys::RESERVED_TYPE_MARKER) {
        return FieldKey::Reserved;
    }
    match entry.split_once(':') {
        Some((prefix, local)) if !prefix.is_empty() => FieldKey::Namespaced { prefix, local },
        _ => FieldKey::Unrecognized,
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// One item, media or item set as returned by the API. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Field value; JSON `null` counts as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The record URI, which becomes the statement subject.
    pub fn id(&self) -> Result<&str, RecordError> {
        match self.get(keys::ID) {
            None => Err(RecordError::MissingId),
            Some(Value::String(id)) if !id.trim().is_empty() => Ok(id.trim()),
            Some(other) => Err(RecordError::InvalidId(other.to_string())),
        }
    }

    /// Best-effort identifier for log lines and failure reports.
    pub fn display_id(&self) -> Option<String> {
        match self.0.get(keys::ID)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Textual form of a scalar field.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(literal_text)
    }

    /// Entries of `@type`, accepting a single string or a list of strings.
    pub fn types(&self) -> Result<Vec<&str>, RecordError> {
        match self.get(keys::TYPE) {
            None => Ok(Vec::new()),
            Some(Value::String(t)) => Ok(vec![t.as_str()]),
            Some(Value::Array(entries)) => Ok(entries.iter().filter_map(Value::as_str).collect()),
            Some(_) => Err(RecordError::MalformedField {
                field: keys::TYPE.to_string(),
                reason: "expected a string or a list of strings",
            }),
        }
    }

    /// `@id`s of a list of linked resources (`o:item_set`, `o:media`).
    ///
    /// An absent field yields an empty list; a linked entry without a string
    /// `@id` fails the record.
    pub fn reference_ids(&self, key: &str) -> Result<Vec<&str>, RecordError> {
        let Some(value) = self.get(key) else {
            return Ok(Vec::new());
        };
        match value {
            Value::Array(entries) => entries.iter().map(|e| reference_id(key, e)).collect(),
            single => reference_id(key, single).map(|id| vec![id]),
        }
    }

    /// `@id` of a single linked resource (`o:item` on a media).
    pub fn reference(&self, key: &str) -> Result<Option<&str>, RecordError> {
        self.get(key).map(|v| reference_id(key, v)).transpose()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

fn reference_id<'a>(field: &str, entry: &'a Value) -> Result<&'a str, RecordError> {
    entry
        .get(keys::ID)
        .and_then(Value::as_str)
        .map(str::trim)
        .ok_or_else(|| RecordError::MalformedField {
            field: field.to_string(),
            reason: "linked resource has no string @id",
        })
}

/// Text of a scalar JSON value: strings verbatim, numbers and booleans as
/// their JSON spelling. Objects, arrays and null have no literal form.
pub fn literal_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

// ---------------------------------------------------------------------------
// Property values
// ---------------------------------------------------------------------------

/// One value object of a property field, e.g.
/// `{"@value": "History"}` or `{"@id": "http://...", "o:label": "Paris"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldElement {
    pub value: Option<String>,
    /// Trimmed `@id`.
    pub reference: Option<String>,
    /// `o:label`, only read alongside a reference.
    pub label: Option<String>,
}

impl FieldElement {
    pub fn parse(field: &str, element: &Map<String, Value>) -> Result<Self, RecordError> {
        let value = element
            .get(keys::VALUE)
            .and_then(literal_text);
        let reference = match element.get(keys::ID) {
            None | Some(Value::Null) => None,
            Some(Value::String(id)) => Some(id.trim().to_string()),
            Some(_) => {
                return Err(RecordError::MalformedField {
                    field: field.to_string(),
                    reason: "value @id is not a string",
                })
            }
        };
        let label = reference
            .as_ref()
            .and_then(|_| element.get(keys::LABEL))
            .and_then(literal_text);
        Ok(Self {
            value,
            reference,
            label,
        })
    }
}

/// Value objects of a property field.
///
/// Omeka always sends a list; a lone object is accepted too. `None` means
/// the field has no usable shape and should be skipped. Non-object list
/// entries are dropped.
pub fn property_values(value: &Value) -> Option<Vec<&Map<String, Value>>> {
    match value {
        Value::Array(entries) => Some(entries.iter().filter_map(Value::as_object).collect()),
        Value::Object(element) => Some(vec![element]),
        _ => None,
    }
}
