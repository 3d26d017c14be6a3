//! Domain model types for NPT persistence

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Storage backend selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// Single JSON document on disk
    #[default]
    File,
    /// Process-local collection, lost on restart
    Memory,
}

impl std::fmt::Display for StorageMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageMode::File => write!(f, "file"),
            StorageMode::Memory => write!(f, "memory"),
        }
    }
}

impl std::str::FromStr for StorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(StorageMode::File),
            "memory" => Ok(StorageMode::Memory),
            _ => Err(format!("Invalid storage mode: {}", s)),
        }
    }
}

/// A logged downtime event on a production line or machine.
///
/// Keys in the stored document that have no field here are kept in `extra`
/// and written back unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NptEntry {
    pub id: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub building_section: String,
    #[serde(deserialize_with = "lenient_string")]
    pub operation_category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub operation: String,
    #[serde(deserialize_with = "lenient_string")]
    pub line_no: String,
    #[serde(deserialize_with = "lenient_string")]
    pub machine_no: String,
    #[serde(deserialize_with = "lenient_string")]
    pub smv: String,
    #[serde(deserialize_with = "lenient_string")]
    pub downtime_cause: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_time: String,
    #[serde(deserialize_with = "lenient_string")]
    pub end_time: String,
    #[serde(deserialize_with = "lenient_string")]
    pub total_minutes: String,
    #[serde(deserialize_with = "lenient_string")]
    pub num_operators: String,
    #[serde(deserialize_with = "lenient_string")]
    pub responsible_dept: String,
    #[serde(deserialize_with = "lenient_string")]
    pub responsible_user: String,
    #[serde(deserialize_with = "lenient_string")]
    pub remarks: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client-supplied entry fields.
///
/// Used both for creation (absent fields become empty strings) and for
/// partial updates (absent fields keep their stored value). `id` is never
/// read from the request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NptEntryInput {
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub building_section: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub operation_category: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub line_no: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub machine_no: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub smv: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub downtime_cause: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub num_operators: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub responsible_dept: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub responsible_user: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

/// Invokes `$apply!(field)` for every string field shared by `NptEntry` and
/// `NptEntryInput`.
macro_rules! for_each_entry_field {
    ($apply:ident) => {
        $apply!(building_section);
        $apply!(operation_category);
        $apply!(operation);
        $apply!(line_no);
        $apply!(machine_no);
        $apply!(smv);
        $apply!(downtime_cause);
        $apply!(start_time);
        $apply!(end_time);
        $apply!(total_minutes);
        $apply!(num_operators);
        $apply!(responsible_dept);
        $apply!(responsible_user);
        $apply!(remarks);
        $apply!(date);
    };
}

impl NptEntryInput {
    /// Builds a new entry, defaulting absent fields to empty strings and an
    /// absent or empty `date` to `today`.
    pub fn into_entry(self, id: i64, today: &str) -> NptEntry {
        let mut entry = NptEntry {
            id,
            ..NptEntry::default()
        };

        macro_rules! fill {
            ($field:ident) => {
                if let Some(value) = self.$field {
                    entry.$field = value;
                }
            };
        }
        for_each_entry_field!(fill);

        if entry.date.is_empty() {
            entry.date = today.to_string();
        }
        entry
    }

    /// Overwrites every field present in `self`; absent fields keep their
    /// current value.
    pub fn merge_into(self, entry: &mut NptEntry) {
        macro_rules! merge {
            ($field:ident) => {
                if let Some(value) = self.$field {
                    entry.$field = value;
                }
            };
        }
        for_each_entry_field!(merge);
    }

    pub fn is_empty(&self) -> bool {
        *self == NptEntryInput::default()
    }
}

/// Result of a fail-soft list.
///
/// `degraded` is set when the collection could not be read and `entries` was
/// replaced by an empty list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryListing {
    pub entries: Vec<NptEntry>,
    pub degraded: bool,
}

impl EntryListing {
    pub fn complete(entries: Vec<NptEntry>) -> Self {
        Self {
            entries,
            degraded: false,
        }
    }

    pub fn degraded() -> Self {
        Self {
            entries: Vec::new(),
            degraded: true,
        }
    }
}

/// Accepts strings, numbers and booleans; `null` and absent become `None`.
fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}
