//! Client for the remote text generation service.

mod models;
pub use models::{GenerationRequest, GenerationResult};
mod run_generation;
pub use run_generation::run_generation;

use std::time::Duration;
use text_completion::{GenerationError, TextGenerator};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug)]
pub struct InferenceHandler {
    pub endpoint: String,
    pub timeout: Duration,
    client: reqwest::Client,
}

impl InferenceHandler {
    pub fn new(endpoint: impl Into<String>) -> Self {
        InferenceHandler {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl TextGenerator for InferenceHandler {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        run_generation(self, GenerationRequest::new(prompt)).await
    }
}
