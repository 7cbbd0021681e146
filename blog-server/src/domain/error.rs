use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use bson::oid;
use serde::Serialize;
use thiserror::Error;

/// Failures raised by the document store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] mongodb::error::Error),
    #[error("{0}")]
    InvalidId(#[from] oid::Error),
    #[error("{0}")]
    Encoding(#[from] bson::ser::Error),
    #[error("store assigned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

/// The store operation a handler was performing when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    List,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Create => "error creating post",
            Operation::List => "error retrieving posts",
            Operation::Get => "error retrieving post",
            Operation::Update => "error updating post",
            Operation::Delete => "error deleting post",
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("title and body are required.")]
    MissingFields,
    #[error("post not found")]
    PostNotFound,
    #[error("{}", .operation.failure_message())]
    Store {
        operation: Operation,
        #[source]
        source: StoreError,
    },
    #[error("invalid request body")]
    InvalidBody(String),
}

impl DomainError {
    pub fn store(operation: Operation, source: impl Into<StoreError>) -> Self {
        DomainError::Store {
            operation,
            source: source.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::MissingFields | DomainError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            DomainError::PostNotFound => StatusCode::NOT_FOUND,
            DomainError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = self.to_string();
        let error = match self {
            DomainError::Store { source, .. } => Some(source.to_string()),
            DomainError::InvalidBody(reason) => Some(reason.clone()),
            _ => None,
        };
        let body = ErrorBody {
            message: message.as_str(),
            error,
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
