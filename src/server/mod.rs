pub mod capability;
pub mod error;
pub mod extract;
pub mod fields;
pub mod handlers;
pub mod types;

pub use capability::Capability;
pub use handlers::AppState;

use crate::{Result, config::Config, gateway::PromptGateway, llm::GeminiClient};
use axum::{
    Router,
    extract::Request,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use error::ApiError;
use std::{any::Any, net::SocketAddr, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{info, info_span, warn};
use uuid::Uuid;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            Capability::GenerateText.route(),
            post(handlers::generate_text),
        )
        .route(Capability::Rewrite.route(), post(handlers::rewrite))
        .route(Capability::Summarize.route(), post(handlers::summarize))
        .route(
            Capability::GenerateCode.route(),
            post(handlers::generate_code),
        )
        .route(Capability::Translate.route(), post(handlers::translate))
        .route(Capability::AdjustTone.route(), post(handlers::adjust_tone))
        .route(
            Capability::GenerateImageDescription.route(),
            post(handlers::generate_image_description),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request| {
            info_span!(
                "request",
                request_id = %Uuid::new_v4(),
                method = %request.method(),
                uri = %request.uri(),
            )
        }))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = GeminiClient::new(&config.llm)?;
    let gateway = PromptGateway::new(Arc::new(client), &config.llm);

    let app_state = AppState::new(
        Arc::new(gateway),
        config.llm.models.clone(),
        &config.server.index_template,
    );

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn handle_panic(_payload: Box<dyn Any + Send + 'static>) -> Response {
    ApiError::Internal("request handler panicked".to_string()).into_response()
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
