//! Chat service integration
//!
//! Provides the interface to the generative-language provider that
//! produces assistant replies, plus a mock implementation for tests.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiChatClient;
pub use mock::MockChatClient;

use crate::models::Turn;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Generate a reply for the given conversation.
    ///
    /// Returns `Ok(None)` when the provider answered successfully but the
    /// response carried no usable text.
    async fn generate_reply(&self, turns: &[Turn]) -> Result<Option<String>>;
}
