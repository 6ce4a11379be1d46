/// Request body extraction
use crate::{error::ServerError, validation::RawPayload};
use axum::{
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use serde_json::Value;

/// Request body as a loose key/value map, ready for validation.
///
/// JSON objects and url-encoded forms are accepted. Any other content type
/// yields an empty payload, so required fields are then reported missing.
#[derive(Debug, Clone, Default)]
pub struct Payload(pub RawPayload);

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let Some(content_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return BodyKind::Other;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
    {
        BodyKind::Json
    } else if mime == "application/x-www-form-urlencoded" {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[axum::async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Json => {
                let Json(value) = Json::<Value>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(e.body_text()))?;

                match value {
                    Value::Object(map) => Ok(Payload(map)),
                    other => Err(ServerError::BadRequest(format!(
                        "Expected a JSON object, got {}",
                        other
                    ))),
                }
            }
            BodyKind::Form => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::BadRequest(e.body_text()))?;

                let map = pairs
                    .into_iter()
                    .map(|(key, value)| (key, Value::String(value)))
                    .collect();

                Ok(Payload(map))
            }
            BodyKind::Other => Ok(Payload::default()),
        }
    }
}
