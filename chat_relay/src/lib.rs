//! Relays one chat message to a text generator and returns an HTTP-shaped
//! response carrying the updated conversation history.

mod error;
pub use error::RelayError;
mod event;
pub use event::{ChatTurn, InboundPayload, ROLE_ASSISTANT, ROLE_USER};
mod relay;
pub use relay::handle_event;
mod response;
pub use response::{HandlerResponse, CORS_ALLOW_HEADERS, CORS_ALLOW_METHODS};
