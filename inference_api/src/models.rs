use serde::{Deserialize, Serialize};

pub const MAX_NEW_TOKENS: u32 = 512;
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.9;
pub const DO_SAMPLE: bool = true;

/// Body POSTed to the generation endpoint.
/// Only the prompt varies, sampling parameters are fixed.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub do_sample: bool,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            max_new_tokens: MAX_NEW_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            do_sample: DO_SAMPLE,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerationResult {
    // null and missing both mean "no text"
    #[serde(default)]
    pub generated_text: Option<String>,
}

impl GenerationResult {
    pub fn into_text(self) -> String {
        self.generated_text.unwrap_or_default()
    }
}
