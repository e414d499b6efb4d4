use super::{
    capability::Capability,
    error::{ApiError, ApiResult},
    extract::JsonBody,
    fields::extract_fields,
    types::GenerationResponse,
};
use crate::{
    config::{ModelTier, ModelTiers},
    gateway::{FailureKind, GenerationOutcome, PromptGateway},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use serde_json::{Map, Value};
use std::{path::PathBuf, sync::Arc};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<PromptGateway>,
    pub models: Arc<ModelTiers>,
    pub index_template: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        gateway: Arc<PromptGateway>,
        models: ModelTiers,
        index_template: impl Into<PathBuf>,
    ) -> Self {
        Self {
            gateway,
            models: Arc::new(models),
            index_template: Arc::new(index_template.into()),
        }
    }
}

pub async fn index(State(state): State<AppState>) -> Response {
    match tokio::fs::read_to_string(state.index_template.as_path()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(
                "Failed to read index template {}: {}",
                state.index_template.display(),
                e
            );
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading page").into_response()
        }
    }
}

pub async fn generate_text(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<GenerationResponse>> {
    dispatch(&state, Capability::GenerateText, &body).await
}

pub async fn rewrite(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<GenerationResponse>> {
    dispatch(&state, Capability::Rewrite, &body).await
}

pub async fn summarize(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<GenerationResponse>> {
    dispatch(&state, Capability::Summarize, &body).await
}

pub async fn generate_code(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<GenerationResponse>> {
    dispatch(&state, Capability::GenerateCode, &body).await
}

pub async fn translate(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<GenerationResponse>> {
    dispatch(&state, Capability::Translate, &body).await
}

pub async fn adjust_tone(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<GenerationResponse>> {
    dispatch(&state, Capability::AdjustTone, &body).await
}

pub async fn generate_image_description(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Json<GenerationResponse>> {
    dispatch(&state, Capability::GenerateImageDescription, &body).await
}

async fn dispatch(
    state: &AppState,
    capability: Capability,
    body: &Map<String, Value>,
) -> ApiResult<Json<GenerationResponse>> {
    let fields = extract_fields(body, capability.fields())?;
    let prompt = capability.build_prompt(&fields);

    // The base tier is the gateway's own default.
    let model = match capability.model_tier() {
        ModelTier::Base => None,
        tier => Some(state.models.resolve(tier)),
    };

    info!(
        "Handling {} with {} prompt characters",
        capability.route(),
        prompt.chars().count()
    );

    match state
        .gateway
        .generate(&prompt, model, capability.generation_config())
        .await
    {
        GenerationOutcome::Success { text } => Ok(Json(GenerationResponse { response: text })),
        GenerationOutcome::Failure {
            kind: FailureKind::InvalidInput,
            message,
        } => Err(ApiError::BadRequest(message)),
        GenerationOutcome::Failure { kind, message } => {
            warn!("{} failed: {}", capability.route(), kind);
            Err(ApiError::Upstream(message))
        }
    }
}
