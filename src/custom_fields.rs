//! Typed access to JIRA custom fields.
//!
//! Custom fields are not part of the modeled issue schema. They arrive as raw
//! JSON in [`IssueFields::unknowns`](crate::api::types::IssueFields::unknowns)
//! and are decoded into a concrete type only when asked for.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::api::types::{null_as_default, Issue, Version};

/// Field ID of the "Release Blocker" custom field.
pub const RELEASE_BLOCKER_FIELD: &str = "customfield_12319743";

/// Field ID of the "Target Version" custom field.
pub const TARGET_VERSION_FIELD: &str = "customfield_12319940";

/// Errors that can occur when decoding a custom field.
#[derive(Debug, Error)]
pub enum FieldError {
    /// The stored value does not have the expected shape.
    #[error("failed to decode custom field {field}: {source}")]
    Decode {
        field: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FieldError {
    /// The field ID the error refers to.
    pub fn field(&self) -> &str {
        match self {
            FieldError::Decode { field, .. } => field,
        }
    }
}

/// Result type for custom-field lookups.
pub type Result<T> = std::result::Result<T, FieldError>;

/// An option-style custom field value.
///
/// Only a JSON object decodes into a `CustomField`. Members that are missing
/// or `null` take their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Map<String, serde_json::Value>")]
pub struct CustomField {
    /// URL of the option resource.
    #[serde(rename = "self")]
    pub self_url: String,
    /// The option ID.
    pub id: String,
    /// The option value (e.g. "Approved", "Proposed").
    pub value: String,
    /// Whether the option is disabled.
    pub disabled: bool,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct CustomFieldObject {
    #[serde(rename = "self", deserialize_with = "null_as_default")]
    self_url: String,
    #[serde(deserialize_with = "null_as_default")]
    id: String,
    #[serde(deserialize_with = "null_as_default")]
    value: String,
    #[serde(deserialize_with = "null_as_default")]
    disabled: bool,
}

impl TryFrom<serde_json::Map<String, serde_json::Value>> for CustomField {
    type Error = serde_json::Error;

    fn try_from(
        object: serde_json::Map<String, serde_json::Value>,
    ) -> std::result::Result<Self, Self::Error> {
        let raw: CustomFieldObject = serde_json::from_value(serde_json::Value::Object(object))?;
        Ok(Self {
            self_url: raw.self_url,
            id: raw.id,
            value: raw.value,
            disabled: raw.disabled,
        })
    }
}

/// Decode the custom field `field` of `issue` into `T`.
///
/// Returns `Ok(None)` when the issue has no fields or the key is missing. A
/// key that is present but `null` decodes as `T::default()`. Returns an error
/// only when a value is present but cannot be decoded into `T`.
pub fn get_unknown_field<T>(field: &str, issue: &Issue) -> Result<Option<T>>
where
    T: DeserializeOwned + Default,
{
    let Some(fields) = issue.fields.as_ref() else {
        return Ok(None);
    };
    let Some(value) = fields.unknowns.get(field) else {
        return Ok(None);
    };

    trace!(issue = %issue.key, field, "Decoding custom field");

    if value.is_null() {
        return Ok(Some(T::default()));
    }

    T::deserialize(value)
        .map(Some)
        .map_err(|source| FieldError::Decode {
            field: field.to_string(),
            source,
        })
}

/// Get the "Release Blocker" value of an issue, if set.
pub fn get_release_blocker(issue: &Issue) -> Result<Option<CustomField>> {
    get_unknown_field(RELEASE_BLOCKER_FIELD, issue)
}

/// Get the target versions of an issue, if set.
pub fn issue_target_versions(issue: &Issue) -> Result<Option<Vec<Version>>> {
    get_unknown_field(TARGET_VERSION_FIELD, issue)
}
