//! Trait for the external text-completion collaborator.

use crate::error::Result;

/// Abstraction over a text-generation service: a function from a prompt to
/// a completion, decoded deterministically. The pipeline treats the service
/// as pure; failures surface as [`crate::error::RaterError::ExternalService`]
/// and are never retried here.
#[async_trait::async_trait]
pub trait CompletionApi: Send + Sync {
    /// Requests a completion for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String>;
}
