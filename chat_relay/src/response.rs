use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::BTreeMap;

pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const CORS_ALLOW_METHODS: &str = "OPTIONS,POST";

/// Proxy-integration response: the body is a JSON document encoded as a string.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    pub fn success(response: &str, conversation_history: &[Value]) -> Self {
        let headers = BTreeMap::from([
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
            (
                "Access-Control-Allow-Headers".to_string(),
                CORS_ALLOW_HEADERS.to_string(),
            ),
            (
                "Access-Control-Allow-Methods".to_string(),
                CORS_ALLOW_METHODS.to_string(),
            ),
        ]);
        HandlerResponse {
            status_code: 200,
            headers,
            body: json!({
                "success": true,
                "response": response,
                "conversationHistory": conversation_history,
            })
            .to_string(),
        }
    }

    /// Failure responses carry no CORS headers.
    pub fn error(status_code: u16, error: &str) -> Self {
        HandlerResponse {
            status_code,
            headers: BTreeMap::new(),
            body: json!({ "success": false, "error": error }).to_string(),
        }
    }

    pub fn internal_error(error: &str) -> Self {
        Self::error(500, error)
    }
}
