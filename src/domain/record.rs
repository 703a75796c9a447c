//! User record domain model.
//!
//! A [`Record`] is one row of the admin table. The upstream payload carries
//! `id`, `name`, `email` and `role`; anything else is kept verbatim in
//! [`Record::extra`] so it survives edits and takes part in search.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identity of a record.
///
/// The endpoint sends ids as strings (`"1"`), but integer ids are accepted
/// too and normalized to their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// One user entry of the admin table.
///
/// # Examples
///
/// ```
/// use adminui::Record;
///
/// let json = r#"{"id":"7","name":"Ann","email":"ann@x.io","role":"admin","team":"core"}"#;
/// let record: Record = serde_json::from_str(json).unwrap();
/// assert_eq!(record.id.as_str(), "7");
/// assert!(record.matches("core"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: String,
    /// Fields beyond the four known ones, preserved in payload order.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Creates a record with no extra fields.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Stringified value of every field: id, name, email, role, then extras.
    pub fn field_values(&self) -> impl Iterator<Item = std::borrow::Cow<'_, str>> {
        use std::borrow::Cow;

        let known = [
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
        ]
        .into_iter()
        .map(Cow::Borrowed);

        let extra = self.extra.values().map(|value| match value {
            serde_json::Value::String(s) => Cow::Borrowed(s.as_str()),
            other => Cow::Owned(other.to_string()),
        });

        known.chain(extra)
    }

    /// Whether any field value, lowercased, contains `needle_lower`.
    ///
    /// The caller lowercases the needle once per filter pass.
    #[must_use]
    pub fn matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty()
            || self
                .field_values()
                .any(|value| value.to_lowercase().contains(needle_lower))
    }
}
