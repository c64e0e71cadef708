use axum::{http::StatusCode, response::IntoResponse};
use jsonwebtoken::errors::Error as JWError;
use surrealdb::Error as SError;

use thiserror::Error;
use tracing::error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("SurrealDb Error: {0}")]
    SurrealError(#[from] SError),

    #[error("Io Error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Axum Error: {0}")]
    AxumError(#[from] axum::Error),

    #[error("Jason web token Error: {0}")]
    JwTError(#[from] JWError),

    #[error("Validator Error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Form Rejection Error: {0}")]
    AxumJsonRejection(#[from] axum::extract::rejection::JsonRejection),

    #[error("Invalid record id `{0}`")]
    InvalidRecordId(String),

    // ! Connection graph
    #[error("Cannot send a connection request to yourself")]
    SelfConnection,

    #[error("Connection message exceeds {0} characters")]
    MessageTooLong(usize),

    #[error("User not found")]
    UserNotFound,

    #[error("Connection not found")]
    ConnectionNotFound,

    #[error("Connection already exists")]
    AlreadyConnected,

    #[error("Connection request already sent")]
    RequestAlreadyPending,

    #[error("You are not allowed to perform this action")]
    Forbidden,

    #[error("{0}")]
    InvalidState(&'static str),

    // ! Notifications
    #[error("Notification not found")]
    NotificationNotFound,

    #[error("Internal Server Error")]
    InternalServerError,

    // ! Auth
    #[error("Missing authorization token")]
    MissingToken,
    #[error("Invalid authorization token")]
    InvalidToken,
    #[error("Invalid authorization scheme")]
    InvalidScheme,
    #[error("Token expired")]
    TokenExpired,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            Error::SurrealError(error) => {
                error!("Surreal Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::IoError(error) => {
                error!("Io Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::AxumError(error) => {
                error!("Axum Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::JwTError(error) => {
                error!("JWT Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ValidationError(error) => {
                let message = format!("Input validation error: [{}]", error).replace('\n', ", ");
                (StatusCode::BAD_REQUEST, message)
            }
            Error::AxumJsonRejection(error) => (StatusCode::BAD_REQUEST, error.to_string()),
            Error::InvalidRecordId(id) => {
                (StatusCode::BAD_REQUEST, format!("Invalid record id `{id}`"))
            }
            Error::SelfConnection => (
                StatusCode::BAD_REQUEST,
                "Cannot send a connection request to yourself".to_string(),
            ),
            Error::MessageTooLong(limit) => (
                StatusCode::BAD_REQUEST,
                format!("Connection message exceeds {limit} characters"),
            ),
            Error::UserNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            Error::ConnectionNotFound => {
                (StatusCode::NOT_FOUND, "Connection not found".to_string())
            }
            Error::AlreadyConnected => (
                StatusCode::CONFLICT,
                "Connection already exists".to_string(),
            ),
            Error::RequestAlreadyPending => (
                StatusCode::CONFLICT,
                "Connection request already sent".to_string(),
            ),
            Error::Forbidden => (
                StatusCode::FORBIDDEN,
                "You are not allowed to perform this action".to_string(),
            ),
            Error::InvalidState(msg) => (StatusCode::CONFLICT, msg.to_string()),
            Error::NotificationNotFound => {
                (StatusCode::NOT_FOUND, "Notification not found".to_string())
            }
            Error::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Error".to_string(),
            ),
            Error::MissingToken => (
                StatusCode::UNAUTHORIZED,
                "Missing authorization token".to_string(),
            ),
            Error::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization token".to_string(),
            ),
            Error::InvalidScheme => (
                StatusCode::UNAUTHORIZED,
                "Invalid authorization scheme".to_string(),
            ),
            Error::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired".to_string()),
        };
        (status, message).into_response()
    }
}
