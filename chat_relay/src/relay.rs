use serde_json::Value;
use text_completion::{GenerationError, TextGenerator};
use tracing::*;

use crate::{ChatTurn, HandlerResponse, InboundPayload, RelayError};

/// Handles one invocation. Every failure ends up in the returned response,
/// the conversation history is only extended when generation succeeded.
pub async fn handle_event<G>(generator: &G, event: &Value) -> HandlerResponse
where
    G: TextGenerator + Sync,
{
    info!("Received event: {}", event);

    match relay(generator, event).await {
        Ok(response) => response,
        Err(RelayError::Generation(GenerationError::Remote { status, body })) => {
            error!("Remote error: {} {}", status, body);
            HandlerResponse::error(status, &body)
        }
        Err(e) => {
            error!("Error: {}", e);
            HandlerResponse::internal_error(&e.to_string())
        }
    }
}

async fn relay<G>(generator: &G, event: &Value) -> Result<HandlerResponse, RelayError>
where
    G: TextGenerator + Sync,
{
    let InboundPayload {
        message,
        mut conversation_history,
    } = InboundPayload::from_event(event)?;

    // Only the latest message is sent, earlier turns are echoed back as received.
    let generated_text = generator.generate(&message).await?;
    info!("Generation result: {}", generated_text);

    conversation_history.push(ChatTurn::user(message).into());
    conversation_history.push(ChatTurn::assistant(generated_text.as_str()).into());

    Ok(HandlerResponse::success(
        &generated_text,
        &conversation_history,
    ))
}
