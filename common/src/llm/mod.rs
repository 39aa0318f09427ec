pub mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

use crate::error::Result;
use async_trait::async_trait;

/// Seam between the pipeline and the hosted model, so tests can substitute a
/// canned generator.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}
