use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}
