use crate::error::TransformError;
use arrow::{datatypes::Schema, record_batch::RecordBatch};

pub trait Transformer: Send + Sync {
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError>;
    fn transform_records(&self, data: &RecordBatch) -> Result<RecordBatch, TransformError>;
}
