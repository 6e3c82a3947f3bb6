use serde_json::{json, Map, Value};

use crate::RelayError;

pub const ROLE_USER: &str = "user";
pub const ROLE_ASSISTANT: &str = "assistant";

/// A turn produced by the relay. Turns coming from the caller stay raw JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        ChatTurn {
            role: ROLE_USER.to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatTurn {
            role: ROLE_ASSISTANT.to_string(),
            content: content.into(),
        }
    }
}

impl From<ChatTurn> for Value {
    fn from(turn: ChatTurn) -> Value {
        json!({ "role": turn.role, "content": turn.content })
    }
}

/// What the relay needs out of an invocation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundPayload {
    pub message: String,
    /// Echoed back verbatim, entries are not inspected.
    pub conversation_history: Vec<Value>,
}

impl InboundPayload {
    /// Accepts either the payload itself or a gateway event whose `body`
    /// holds the payload as a JSON string.
    pub fn from_event(event: &Value) -> Result<Self, RelayError> {
        match event.get("body") {
            Some(Value::String(body)) => decode(&serde_json::from_str::<Value>(body)?),
            Some(_) => Err(RelayError::InvalidEvent(
                "body must be a JSON-encoded string".to_string(),
            )),
            None => decode(event),
        }
    }
}

fn decode(payload: &Value) -> Result<InboundPayload, RelayError> {
    let fields = payload.as_object().ok_or_else(|| {
        RelayError::InvalidEvent(format!("payload must be a JSON object, got {}", payload))
    })?;

    Ok(InboundPayload {
        message: message_of(fields)?,
        conversation_history: match fields.get("conversationHistory") {
            Some(Value::Array(turns)) => turns.clone(),
            Some(other) => {
                return Err(RelayError::InvalidEvent(format!(
                    "conversationHistory must be an array, got {}",
                    other
                )))
            }
            None => Vec::new(),
        },
    })
}

// A present `message` key wins even when its value is unusable.
fn message_of(fields: &Map<String, Value>) -> Result<String, RelayError> {
    let key = if fields.contains_key("message") {
        "message"
    } else {
        "prompt"
    };
    match fields.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(RelayError::InvalidEvent(format!(
            "{} must be a string, got {}",
            key, other
        ))),
        None => Ok(String::new()),
    }
}
