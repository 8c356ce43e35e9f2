//! Structured variables collected by the platform's conversation flow.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Variables captured during a call.
///
/// A handful of fields are known to the interview script and typed here;
/// anything else the flow collects is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedVariables {
    #[serde(
        default,
        deserialize_with = "deserialize_flag",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_woman: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favorite_food: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_node: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExtractedVariables {
    /// Boolean variable by name, known field or extra.
    ///
    /// Extras stored as `"true"`/`"false"` strings count as booleans since
    /// the platform transmits every dynamic variable as text.
    pub fn flag(&self, name: &str) -> Option<bool> {
        match name {
            "is_woman" => self.is_woman,
            _ => self.extra.get(name).and_then(value_as_flag),
        }
    }

    /// String variable by name, known field or extra.
    pub fn text(&self, name: &str) -> Option<&str> {
        match name {
            "favorite_food" => self.favorite_food.as_deref(),
            "food_reason" => self.food_reason.as_deref(),
            "previous_node" => self.previous_node.as_deref(),
            "current_node" => self.current_node.as_deref(),
            _ => self.extra.get(name).and_then(Value::as_str),
        }
    }
}

fn parse_flag_text(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn value_as_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => parse_flag_text(s),
        _ => None,
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(b)) => Ok(Some(b)),
        Some(Flag::Text(s)) => parse_flag_text(&s)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a boolean flag, got {s:?}"))),
    }
}
