use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// A sub-requirement of a step.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub name: String,
    /// Missing or null in the stored record means incomplete.
    #[serde(default, deserialize_with = "null_as_incomplete")]
    #[schemars(with = "Option<bool>")]
    pub is_completed: bool,
    /// User id of whoever ticked the item.
    #[serde(default)]
    pub completed_by: Option<String>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ChecklistItem {
    /// Flip completion, stamping or clearing the completer.
    ///
    /// Returns the new completion state.
    pub fn toggle(&mut self, actor: Option<&str>, now: DateTime<Utc>) -> bool {
        self.is_completed = !self.is_completed;
        if self.is_completed {
            self.completed_by = actor.map(str::to_string);
            self.completed_at = Some(now);
        } else {
            self.completed_by = None;
            self.completed_at = None;
        }
        self.is_completed
    }
}

fn null_as_incomplete<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
