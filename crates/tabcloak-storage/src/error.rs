use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no blob named '{0}'")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
