use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One cell of a log record: a continuous sample or a short discrete tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Tag(String),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Tag(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Discriminator between regular samples and discrete events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    #[default]
    Field,
    Marker,
}

/// One timestamped entry of the log.
///
/// Field names are dynamic (whatever the ingested log carries) and the
/// field-selection list declares which of them are plotted. The serialized
/// shape matches the on-disk records: a `type` discriminator, a `Time` stamp
/// in seconds, and every other key flattened into `values`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(rename = "type", default)]
    pub kind: RecordKind,
    #[serde(rename = "Time", default)]
    pub time: f64,
    #[serde(flatten)]
    pub values: HashMap<String, Value>,
}

impl LogRecord {
    pub fn field(time: f64) -> Self {
        Self {
            kind: RecordKind::Field,
            time,
            values: HashMap::new(),
        }
    }

    pub fn marker(time: f64) -> Self {
        Self {
            kind: RecordKind::Marker,
            time,
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), Value::Number(value));
        self
    }

    pub fn with_tag(mut self, name: impl Into<String>, tag: impl Into<String>) -> Self {
        self.values.insert(name.into(), Value::Tag(tag.into()));
        self
    }

    /// Numeric sample for `name`; `None` for missing fields and tags.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(Value::as_number)
    }

    pub fn is_marker(&self) -> bool {
        self.kind == RecordKind::Marker
    }
}

/// Record storage owned by the ingestion side; the engine only borrows it.
///
/// The `revision` counter bumps on every mutation and is the buffer-identity
/// key for the aggregation memo.
#[derive(Clone, Debug, Default)]
pub struct RecordBuffer {
    records: Vec<LogRecord>,
    revision: u64,
}

impl RecordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<LogRecord>) -> Self {
        Self {
            records,
            revision: 1,
        }
    }

    /// Parses a JSON array of records in the on-disk log shape.
    pub fn from_json(json: &str) -> eyre::Result<Self> {
        let records: Vec<LogRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn append(&mut self, record: LogRecord) {
        self.records.push(record);
        self.revision += 1;
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = LogRecord>) {
        self.records.extend(records);
        self.revision += 1;
    }

    pub fn replace(&mut self, records: Vec<LogRecord>) {
        self.records = records;
        self.revision += 1;
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
