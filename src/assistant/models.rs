use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub message: Option<Value>,
}

impl ChatRequest {
    /// The message as prompt text. `None` for a missing, null or falsy value
    /// (`false`, `0`, `[]`, `{}`); strings are returned untouched, even empty.
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::Bool(true) => Some("True".to_string()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Array(items) if items.is_empty() => None,
            Value::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}
