use async_trait::async_trait;
use prompt_gateway::{
    Error, Result,
    llm::{GenerateResponse, LlmClient, PromptRequest},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client that records requests and replays canned replies
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub reply: Arc<Mutex<Option<String>>>,
    pub requests: Arc<Mutex<Vec<PromptRequest>>>,
    pub error: Option<String>,
    pub panic_on_call: bool,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            reply: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
            panic_on_call: false,
        }
    }

    pub fn with_reply(self, text: impl Into<String>) -> Self {
        *self.reply.lock().unwrap() = Some(text.into());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn panicking(mut self) -> Self {
        self.panic_on_call = true;
        self
    }

    pub fn get_requests(&self) -> Vec<PromptRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<PromptRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(&self, request: PromptRequest) -> Result<GenerateResponse> {
        let model = request.model.clone();
        self.requests.lock().unwrap().push(request);

        if self.panic_on_call {
            panic!("mock provider exploded");
        }

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        Ok(GenerateResponse {
            text: self.reply.lock().unwrap().clone(),
            finish_reason: Some("STOP".to_string()),
            model,
        })
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
