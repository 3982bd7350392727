use crate::tiles::Tile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TienGowError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hand size: expected {expected} tiles, got {actual}")]
    InvalidHandSize { expected: usize, actual: usize },

    #[error("Analysis unavailable: {0}")]
    AnalysisUnavailable(String),

    #[error("Pool underflow: no copy of '{0}' left to remove")]
    PoolUnderflow(Tile),

    #[error("Unknown tile: '{0}'")]
    UnknownTile(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Internal Error: {0}")]
    Internal(String),
}

pub type TgResult<T> = Result<T, TienGowError>;
