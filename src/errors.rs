use axum::{extract::rejection::FormRejection, http::StatusCode, response::IntoResponse};
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

    #[error("Serde Json Error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    #[error("Validator Error: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Form Rejection Error: {0}")]
    AxumFormRejection(#[from] FormRejection),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Unknown status `{0}`")]
    UnknownStatus(String),

    #[error("Unknown leaderboard `{0}`")]
    UnknownLeaderboard(String),

    // ! the store refused a mutation; message is shown to the user as-is
    #[error("{0}")]
    StoreRejected(String),

    #[error("Not Found")]
    NotFound,
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
            Error::SerdeJsonError(error) => {
                error!("Serde Json Error:{:#?}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::Config(message) => {
                error!("Config Error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Error".to_string(),
                )
            }
            Error::ValidationError(error) => {
                let message = format!("Input validation error: [{}]", error).replace('\n', ", ");
                (StatusCode::BAD_REQUEST, message)
            }
            Error::AxumFormRejection(error) => {
                error!("Axum Form Rejection Error:{:#?}", error);
                (StatusCode::BAD_REQUEST, error.to_string())
            }
            Error::UnknownStatus(status) => (
                StatusCode::BAD_REQUEST,
                format!("Unknown status `{}`", status),
            ),
            Error::UnknownLeaderboard(board) => (
                StatusCode::NOT_FOUND,
                format!("Unknown leaderboard `{}`", board),
            ),
            Error::StoreRejected(message) => (StatusCode::BAD_GATEWAY, message),
            Error::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        };
        (status, message).into_response()
    }
}
