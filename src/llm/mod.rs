mod client;
mod types;

#[cfg(test)]
pub use client::MockLlmClient;
pub use client::{GeminiClient, LlmClient};
pub use types::*;
