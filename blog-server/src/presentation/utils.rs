use actix_web::dev::Payload;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::web::Bytes;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;

use crate::domain::error::DomainError;
use crate::presentation::dto::BlogPostRequest;

/// JSON bodies are only parsed when the request says it carries JSON; any
/// other content type, or an empty body, reads as an empty object.
impl FromRequest for BlogPostRequest {
    type Error = DomainError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = is_json_content(req);
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body
                .await
                .map_err(|e| DomainError::InvalidBody(e.to_string()))?;

            if !is_json || body.is_empty() {
                return Ok(BlogPostRequest::default());
            }

            serde_json::from_slice(&body).map_err(|e| DomainError::InvalidBody(e.to_string()))
        })
    }
}

fn is_json_content(req: &HttpRequest) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}
