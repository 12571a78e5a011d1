use thiserror::Error;

#[derive(Error, Debug)]
pub enum TsError {
    #[error("unknown aggregation type: {0}")]
    UnknownAggregation(String),

    #[error("unknown reducer: {0}")]
    UnknownReducer(String),

    #[error("unknown bucket timestamp mode: {0}")]
    UnknownBucketTimestamp(String),

    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("invalid options file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TsError>;
