use shelf_model::ModelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("No item at position {0}")]
    NoSuchItem(usize),

    #[error("Item at position {0} is not a CD")]
    NotACd(usize),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
