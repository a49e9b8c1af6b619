use thiserror::Error;

#[derive(Debug, Error)]
pub enum BatchPackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown item type: {0}")]
    UnknownItemType(String),
    #[error("invalid count for {item}: {value:?}")]
    InvalidCount { item: String, value: String },
    #[error("item type {item} weighs {weight} oz, more than the batch capacity of {capacity} oz")]
    CapacityTooSmall {
        item: String,
        weight: u32,
        capacity: u32,
    },
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),
}

pub type Result<T> = std::result::Result<T, BatchPackError>;
