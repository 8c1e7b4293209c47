use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    #[error(transparent)]
    Ggez(#[from] ggez::GameError),
}
