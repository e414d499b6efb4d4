use super::mocks::MockLlmClient;
use axum::Router;
use prompt_gateway::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    gateway::PromptGateway,
    server::{self, AppState},
};
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_APOLOGY: &str = "Sorry, the assistant is unavailable right now.";

pub const INDEX_HTML: &str = "<!DOCTYPE html><html><body><h1>Writing Assistant</h1></body></html>";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
            index_template: "templates/index.html".to_string(),
        },
        llm: LlmConfig {
            api_key: "test-api-key".to_string(),
            apology: TEST_APOLOGY.to_string(),
            ..LlmConfig::default()
        },
    }
}

/// Create a temporary directory holding an index template
pub fn create_template_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write template");
    dir
}

/// Build the full router around a mock provider
pub fn create_test_app(mock: MockLlmClient) -> (Router, TempDir) {
    create_test_app_with_config(mock, create_test_config())
}

pub fn create_test_app_with_config(mock: MockLlmClient, config: Config) -> (Router, TempDir) {
    let temp_dir = create_template_dir();
    let gateway = PromptGateway::new(Arc::new(mock), &config.llm);
    let state = AppState::new(
        Arc::new(gateway),
        config.llm.models.clone(),
        temp_dir.path().join("index.html"),
    );
    (server::router(state), temp_dir)
}
