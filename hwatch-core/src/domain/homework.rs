//! Homework domain model
//!
//! One reviewed submission as reported by the review service.

use serde_json::Value;

/// A submission record from the `homeworks` list
///
/// Built leniently from whatever JSON the service sent: a record without a
/// usable name or status still converts, and the bot reports the problem
/// itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Homework {
    /// Submission identifier (`homework_name`, or `name`)
    pub name: Option<String>,

    /// Review status code (`approved`, `reviewing`, `rejected`)
    ///
    /// A non-string status is kept as its JSON text so that it surfaces as
    /// an unknown status rather than a missing one.
    pub status: Option<String>,

    /// Opaque marker of the last update (`date_updated`, or `updatedAt`)
    pub updated_at: Option<Value>,
}

impl Homework {
    /// Update marker rendered as text, without JSON quoting for strings
    pub fn update_marker(&self) -> Option<String> {
        self.updated_at.as_ref().map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

impl From<&Value> for Homework {
    fn from(record: &Value) -> Self {
        Homework {
            name: field(record, &["homework_name", "name"])
                .and_then(Value::as_str)
                .map(str::to_string),
            status: field(record, &["status"]).map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
            updated_at: field(record, &["date_updated", "updatedAt"]).cloned(),
        }
    }
}

/// First non-null value among `keys`
fn field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|value| !value.is_null()))
}
