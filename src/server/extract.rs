use super::error::ApiError;
use axum::{
    Json, async_trait,
    extract::{FromRequest, Request},
};
use serde_json::{Map, Value};
use tracing::debug;

/// A request body that must be a JSON object. Every other shape, a missing
/// body, or a wrong content type is rejected as `Invalid JSON`.
#[derive(Debug)]
pub struct JsonBody(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(Value::Object(map))) => Ok(Self(map)),
            Ok(Json(other)) => {
                debug!("Rejecting non-object JSON body: {}", type_name(&other));
                Err(ApiError::InvalidJson)
            }
            Err(rejection) => {
                debug!("Rejecting request body: {}", rejection.body_text());
                Err(ApiError::InvalidJson)
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
