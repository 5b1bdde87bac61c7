use arrow::datatypes::DataType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),

    #[error("document is missing a header row")]
    MissingHeader,

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("unsupported type for column {column}: {data_type}")]
    UnsupportedType { column: String, data_type: DataType },

    #[error(transparent)]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
