use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Request-level failures. All of them are the client's fault and are answered
/// with a short plain text reason and no partial body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing FEN")]
    MissingFen,

    #[error("Invalid FEN")]
    InvalidFen,

    #[error("Illegal FEN")]
    IllegalFen,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("at least some syzygy tables are required (SYZYGY_PATH)")]
    MissingSyzygyPath,

    #[error("invalid port: {0}")]
    InvalidPort(String),

    #[error("invalid DTM_MAX_PIECES: {0}")]
    InvalidDtmPieces(String),

    #[error(transparent)]
    Variant(#[from] tb_core::variant::UnknownVariant),
}

#[derive(Debug, thiserror::Error)]
pub enum TablebaseError {
    #[error("could not open tablebase directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tablebase path pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}
