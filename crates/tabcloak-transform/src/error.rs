use arrow::datatypes::DataType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColumnTransformationError {
    #[error("unsupported type: {0}")]
    UnsupportedType(DataType),

    #[error("downcast failed")]
    DowncastFailed,

    #[error("malformed identifier: {0:?}")]
    MalformedIdentifier(String),

    #[error("unparseable date: {0:?}")]
    MalformedDate(String),
}

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("transformation of column {column} failed")]
    Column {
        column: String,
        #[source]
        source: ColumnTransformationError,
    },

    #[error(transparent)]
    Core(#[from] tabcloak_core::CoreError),

    #[error(transparent)]
    Arrow(#[from] arrow::error::ArrowError),
}
