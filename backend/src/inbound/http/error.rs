//! HTTP adapter mapping for transport errors.
//!
//! Purpose: answer requests that never reach a use-case (malformed JSON, a
//! non-numeric path id, an unknown route) with the domain [`Error`] payload
//! and a matching status code. Use-case outcomes never pass through here.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{ApiResult, Error, ErrorCode, TRACE_ID_HEADER};

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(message = error.message(), "internal error answered with redacted payload");
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

/// `JsonConfig` error handler: undecodable bodies become 400 responses.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejecting undecodable JSON body");
    let reason = match &err {
        JsonPayloadError::ContentType => "content type must be application/json".to_owned(),
        other => other.to_string(),
    };
    Error::invalid_request("request body is not valid JSON")
        .with_details(json!({ "reason": reason }))
        .into()
}

/// `PathConfig` error handler: non-numeric identifiers become 400 responses.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejecting malformed path parameter");
    Error::invalid_request("path identifier must be an integer")
        .with_details(json!({ "field": "id", "reason": err.to_string() }))
        .into()
}

/// Default service for routes that do not exist.
pub async fn route_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "no route for {} {}",
        req.method(),
        req.path()
    )))
}
