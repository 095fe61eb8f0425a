//! Record model shared by both collections.
//!
//! Records are free-form JSON objects. Only `id` is interpreted, and only
//! through [`record_id`].

use serde_json::{Map, Value};

/// A single book or member entry.
pub type Record = Map<String, Value>;

/// The two resource kinds persisted by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    Books,
    Members,
}

impl Collection {
    /// File name of the backing document.
    pub fn file_name(self) -> &'static str {
        match self {
            Collection::Books => "books.json",
            Collection::Members => "members.json",
        }
    }

    /// Singular label used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            Collection::Books => "Book",
            Collection::Members => "Member",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Collection::Books => "books",
            Collection::Members => "members",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer `id` of a record; `None` when missing or not an integer.
pub fn record_id(record: &Record) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

/// Shallow merge: every key of `patch` is inserted into `target`, overwriting.
pub fn merge(target: &mut Record, patch: Record) {
    for (key, value) in patch {
        target.insert(key, value);
    }
}

/// String field lowercased, or empty when missing or not a string.
pub(crate) fn folded_field(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_lowercase)
        .unwrap_or_default()
}
