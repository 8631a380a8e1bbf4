//! Planning Center data types.
//!
//! These types represent the data structures from the Planning Center API.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// One JSON:API resource object: an immutable id plus opaque attributes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    /// Server-assigned id
    pub id: String,
    /// Resource type, e.g. `Person` or `FieldDatum`
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Field name to value mapping
    #[serde(default)]
    pub attributes: Value,
    /// Links to related resources
    #[serde(default)]
    pub relationships: Value,
}

impl Record {
    /// String attribute, if present and a string.
    pub fn attribute_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)?.as_str()
    }

    /// Id of a to-one relationship (`relationships.<name>.data.id`).
    pub fn related_id(&self, relationship: &str) -> Option<&str> {
        self.relationships.get(relationship)?.get("data")?.get("id")?.as_str()
    }
}

/// Opaque reference to the next page of a collection.
///
/// Consumed when followed, so a cursor cannot be reused after advancing.
#[derive(Debug, PartialEq, Eq)]
pub struct Cursor(String);

impl Cursor {
    /// The URL that fetches the next page; it already encodes the query.
    pub fn into_url(self) -> String {
        self.0
    }
}

/// One page of a collection response.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    /// Records on this page
    #[serde(default)]
    pub data: Vec<Record>,
    /// `links.next` carries the cursor on most endpoints
    #[serde(default)]
    pub links: Value,
    /// `meta.next.href` carries it on others
    #[serde(default)]
    pub meta: Value,
}

impl Page {
    /// Cursor for the following page; `None` on the last page.
    pub fn next_cursor(&self) -> Option<Cursor> {
        self.links
            .get("next")
            .and_then(Value::as_str)
            .or_else(|| self.meta.get("next")?.get("href")?.as_str())
            .filter(|url| !url.is_empty())
            .map(|url| Cursor(url.to_string()))
    }
}

/// Server id of a named field definition, resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDefinitionId(pub String);

impl fmt::Display for FieldDefinitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One person's stored value for a field definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDatum {
    /// Field datum id
    pub id: String,
    /// Stored value (empty when the API sends `null`)
    pub value: String,
    /// Person that owns this value
    pub person_id: String,
}

impl FieldDatum {
    /// Build from a `FieldDatum` record; `None` when it has no owning person.
    pub fn from_record(record: &Record) -> Option<Self> {
        let person_id = record.related_id("customizable")?.to_string();
        Some(Self {
            id: record.id.clone(),
            value: record.attribute_str("value").unwrap_or_default().to_string(),
            person_id,
        })
    }
}

/// Contact details found for a person by name search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    /// Id of the first search match
    pub person_id: String,
    /// First email address on file
    pub email: Option<String>,
    /// First phone number on file
    pub phone: Option<String>,
}

/// Whether a paginated fetch reached the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// Every page was read.
    Complete,
    /// A request failed; records after it were never seen.
    Truncated {
        /// The error that stopped pagination
        reason: String,
    },
}

/// Records gathered by a paginated fetch, with its completion status.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    /// Records in fetch order
    pub records: Vec<T>,
    /// Pages successfully read
    pub pages: usize,
    /// Complete or truncated
    pub status: FetchStatus,
}

impl<T> Fetched<T> {
    /// Whether the final page was reached.
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, FetchStatus::Complete)
    }

    /// Number of records gathered.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were gathered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Convert each record, dropping those `f` rejects; status and page count carry over.
    pub fn filter_map<U>(self, f: impl FnMut(T) -> Option<U>) -> Fetched<U> {
        Fetched {
            records: self.records.into_iter().filter_map(f).collect(),
            pages: self.pages,
            status: self.status,
        }
    }
}

/// Tally of one job's per-record mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Records whose mutation succeeded
    pub succeeded: usize,
    /// Records whose mutation was rejected or never reached the server
    pub failed: usize,
    /// Records left alone on purpose
    pub skipped: usize,
    /// The operator declined the confirmation prompt
    pub aborted: bool,
    /// The record list came from a truncated fetch
    pub incomplete: bool,
}

impl BatchReport {
    /// Report for a run the operator declined.
    pub fn aborted() -> Self {
        Self { aborted: true, ..Self::default() }
    }

    /// Records a mutation was attempted on.
    pub const fn processed(&self) -> usize {
        self.succeeded + self.failed
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.aborted {
            return f.write_str("aborted, no changes made");
        }
        write!(
            f,
            "{} processed, {} succeeded, {} failed, {} skipped",
            self.processed(),
            self.succeeded,
            self.failed,
            self.skipped
        )?;
        if self.incomplete {
            f.write_str(" (record list incomplete)")?;
        }
        Ok(())
    }
}
