use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Normalized, field-based representation of a resume.
///
/// Produced by the text parser or submitted by the editor. Every field is
/// optional on input: absent or `null` values become the empty default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredResume {
    #[serde(default, deserialize_with = "nullable")]
    pub raw_text: String,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub phone: String,
    #[serde(default, deserialize_with = "nullable")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "nullable")]
    pub location: String,
    #[serde(default, deserialize_with = "nullable")]
    pub website: String,
    #[serde(default, deserialize_with = "nullable")]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable")]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "nullable")]
    pub skills: Vec<String>,
    /// Editor-owned sections; passed through untouched.
    #[serde(default, deserialize_with = "nullable")]
    pub projects: Vec<Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub certifications: Vec<Value>,
    #[serde(default, deserialize_with = "nullable")]
    pub languages: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable")]
    pub company: String,
    #[serde(default, deserialize_with = "nullable")]
    pub duration: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub degree: String,
    #[serde(default, deserialize_with = "nullable")]
    pub institution: String,
    #[serde(default, deserialize_with = "nullable")]
    pub year: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

impl StructuredResume {
    /// Converts an arbitrary JSON value into a resume.
    ///
    /// Only objects are accepted; a wrongly typed field is a contract
    /// violation rather than something to coerce.
    pub fn from_json(value: Value) -> Result<Self, AppError> {
        if !value.is_object() {
            return Err(AppError::InvalidInput(format!(
                "resume must be a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| AppError::InvalidInput(e.to_string()))
    }
}

/// Treats an explicit `null` the same as a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
