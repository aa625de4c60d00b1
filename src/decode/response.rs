//! Decoded response model and the decoder itself
//!
//! One pass over the scanned assignments builds an intermediate
//! accumulation (envelope scalars plus a `name -> index -> value` map);
//! the accumulation is then shaped into either a single record or an
//! ordered table of rows.

use super::scanner::{scan, ResponseKey};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

/// Timestamp layout used by the API for date-valued fields.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Property name that declares the column manifest of a tabular response.
const COLUMN_MANIFEST: &str = "column";

// ============================================================================
// Value model
// ============================================================================

/// A leaf value from the response body.
///
/// Values arrive as strings; anything matching the API's fixed
/// timestamp layout is coerced, everything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A coerced `YYYY-MM-DD HH:MM:SS` timestamp.
    Timestamp(NaiveDateTime),
    /// Any other string, unchanged.
    Text(String),
}

impl Value {
    /// Coerce a raw string, keeping it verbatim when it is not a
    /// timestamp. Parse failure is the normal path for non-date fields.
    pub fn coerce(raw: &str) -> Self {
        match NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
            Ok(ts) => Value::Timestamp(ts),
            Err(_) => Value::Text(raw.to_string()),
        }
    }

    /// The text form, if this value was not coerced.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Timestamp(_) => None,
        }
    }

    /// The timestamp, if this value was coerced.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            Value::Text(_) => None,
        }
    }

    /// Render back to the wire text form.
    pub fn into_text(self) -> String {
        match self {
            Value::Text(s) => s,
            Value::Timestamp(ts) => ts.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// A property of a single-record response.
///
/// Cardinality decides the shape: exactly one index seen collapses to a
/// scalar, more than one stays an index-ordered list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Property {
    /// Exactly one value was present.
    Scalar(Value),
    /// Multiple values, in ascending index order.
    List(Vec<Value>),
}

impl Property {
    /// The scalar value, if cardinality was one.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Property::Scalar(v) => Some(v),
            Property::List(_) => None,
        }
    }

    /// The list of values, if cardinality was greater than one.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Property::List(v) => Some(v),
            Property::Scalar(_) => None,
        }
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Top-level scalar fields of a response (`code`, `description`,
/// `runtime`, `queuetime`, ...), always strings, disjoint from the
/// indexed-property namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl Envelope {
    /// Look up an envelope field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The `code` field, parsed.
    pub fn code(&self) -> Option<u32> {
        self.get("code")?.parse().ok()
    }

    /// The `description` field.
    pub fn description(&self) -> Option<&str> {
        self.get("description")
    }

    /// Iterate over all envelope fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether any field was present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, key: String, value: String) {
        self.fields.insert(key, value);
    }
}

// ============================================================================
// Decoded shapes
// ============================================================================

/// A single row of a tabular response, keyed by column name. Columns
/// never populated for a given index are simply absent.
pub type Row = BTreeMap<String, Value>;

/// A response decoded in single-record mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordResponse {
    /// Top-level scalar fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Indexed properties, collapsed per cardinality.
    pub properties: BTreeMap<String, Property>,
}

impl RecordResponse {
    /// Look up a property by name.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }
}

/// A response decoded in tabular mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TableResponse {
    /// Top-level scalar fields.
    #[serde(flatten)]
    pub envelope: Envelope,
    /// Declared column names, in manifest order. Empty when the
    /// response carried no manifest.
    pub columns: Vec<String>,
    /// Rows in ascending index order.
    pub rows: Vec<Row>,
}

/// The decoder's result: one record, or an ordered table of rows.
///
/// Command callers pattern-match on the variant their API command
/// produces; both variants carry the envelope since `code` and
/// `description` accompany every response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedResponse {
    /// Single-record shape.
    Record(RecordResponse),
    /// Tabular shape.
    Table(TableResponse),
}

impl DecodedResponse {
    /// The envelope, whichever shape was decoded.
    pub fn envelope(&self) -> &Envelope {
        match self {
            DecodedResponse::Record(r) => &r.envelope,
            DecodedResponse::Table(t) => &t.envelope,
        }
    }

    /// The envelope `code` field, parsed.
    pub fn code(&self) -> Option<u32> {
        self.envelope().code()
    }

    /// The record view, if decoded in single-record mode.
    pub fn as_record(&self) -> Option<&RecordResponse> {
        match self {
            DecodedResponse::Record(r) => Some(r),
            DecodedResponse::Table(_) => None,
        }
    }

    /// The table view, if decoded in tabular mode.
    pub fn as_table(&self) -> Option<&TableResponse> {
        match self {
            DecodedResponse::Table(t) => Some(t),
            DecodedResponse::Record(_) => None,
        }
    }
}

// ============================================================================
// Decoder
// ============================================================================

/// Intermediate accumulation of one decode pass.
#[derive(Debug, Default)]
struct Accumulation {
    envelope: Envelope,
    // BTreeMaps keep property names and row indexes in ascending order.
    properties: BTreeMap<String, BTreeMap<u64, Value>>,
}

impl Accumulation {
    fn has_manifest(&self) -> bool {
        self.properties.contains_key(COLUMN_MANIFEST)
    }
}

/// Fold the scanned assignments into the accumulation.
fn accumulate(body: &str) -> Accumulation {
    let mut acc = Accumulation::default();
    for (key, raw) in scan(body) {
        match key {
            ResponseKey::Scalar(name) => {
                acc.envelope.insert(name, raw.to_string());
            }
            ResponseKey::Property { name, index } => {
                // Last write wins on a duplicated (name, index) pair.
                acc.properties
                    .entry(name)
                    .or_default()
                    .insert(index, Value::coerce(raw));
            }
        }
    }
    acc
}

/// Decode a response body, selecting the shape from the parsed state:
/// a `column` manifest implies tabular mode, its absence single-record
/// mode. Callers that know their command's shape can use
/// [`decode_record`] or [`decode_table`] directly.
pub fn decode(body: &str) -> DecodedResponse {
    let acc = accumulate(body);
    if acc.has_manifest() {
        DecodedResponse::Table(table_from(acc))
    } else {
        DecodedResponse::Record(record_from(acc))
    }
}

/// Decode a response body in single-record mode.
///
/// A tabular body still yields a record view: the manifest shows up as
/// an ordinary multi-valued `column` property.
pub fn decode_record(body: &str) -> RecordResponse {
    record_from(accumulate(body))
}

/// Decode a response body in tabular mode.
///
/// Without a manifest no column filtering applies; without any indexed
/// properties the table is empty.
pub fn decode_table(body: &str) -> TableResponse {
    table_from(accumulate(body))
}

fn record_from(acc: Accumulation) -> RecordResponse {
    let properties = acc
        .properties
        .into_iter()
        .map(|(name, cells)| {
            let mut values: Vec<Value> = cells.into_values().collect();
            let property = if values.len() == 1 {
                Property::Scalar(values.remove(0))
            } else {
                Property::List(values)
            };
            (name, property)
        })
        .collect();

    RecordResponse {
        envelope: acc.envelope,
        properties,
    }
}

fn table_from(mut acc: Accumulation) -> TableResponse {
    let columns: Vec<String> = acc
        .properties
        .remove(COLUMN_MANIFEST)
        .map(|cells| cells.into_values().map(Value::into_text).collect())
        .unwrap_or_default();

    // Transpose `column -> index -> value` into `index -> column -> value`,
    // dropping columns absent from the manifest.
    let mut rows: BTreeMap<u64, Row> = BTreeMap::new();
    for (name, cells) in acc.properties {
        if !columns.is_empty() && !columns.iter().any(|c| c == &name) {
            continue;
        }
        for (index, value) in cells {
            rows.entry(index).or_default().insert(name.clone(), value);
        }
    }

    TableResponse {
        envelope: acc.envelope,
        columns,
        rows: rows.into_values().collect(),
    }
}
