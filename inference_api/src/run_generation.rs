use text_completion::GenerationError;
use tracing::*;

use crate::{GenerationRequest, GenerationResult, InferenceHandler};

/// Sends one generation request. No retry: a failed call is reported as is.
pub async fn run_generation(
    handler: &InferenceHandler,
    req: GenerationRequest,
) -> Result<String, GenerationError> {
    trace!(
        "run_generation endpoint={} prompt={}",
        handler.endpoint,
        req.prompt
    );

    let response = handler
        .client
        .post(&handler.endpoint)
        .timeout(handler.timeout)
        .json(&req)
        .send()
        .await
        .map_err(|e| GenerationError::Other(e.into()))?;

    trace!("POST {} {:?}", handler.endpoint, response);

    let status = response.status();
    if !status.is_success() {
        let err_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(GenerationError::Remote {
            status: status.as_u16(),
            body: err_text,
        });
    }

    let result: GenerationResult = response
        .json()
        .await
        .map_err(|e| GenerationError::Other(e.into()))?;

    debug!("run_generation prompt={} result={:?}", req.prompt, result);
    Ok(result.into_text())
}
