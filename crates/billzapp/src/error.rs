use thiserror::Error;

#[derive(Error, Debug)]
pub enum BillzError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown field `{field}` for entity type {entity}")]
    UnknownField { field: String, entity: &'static str },
}

pub type Result<T> = std::result::Result<T, BillzError>;
