use crate::error::CoreError;
use arrow::array::StringArray;
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

/// Builds a schema in which every field is a nullable utf8 column.
///
/// Tabular files carry no type information beyond the header row, so every
/// value is kept as text and parsed only where a transformation needs it.
pub fn utf8_schema(field_names: &[&str]) -> Schema {
    Schema::new(
        field_names
            .iter()
            .map(|name| Field::new(name, DataType::Utf8, true))
            .collect(),
    )
}

/// Returns the named column as a string array.
pub fn utf8_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray, CoreError> {
    let index = batch
        .schema()
        .index_of(name)
        .map_err(|_| CoreError::MissingColumn(name.to_string()))?;

    let column = batch.column(index);

    column
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| CoreError::UnsupportedType {
            column: name.to_string(),
            data_type: column.data_type().clone(),
        })
}

/// Collects the named column into owned row values, `None` for nulls.
pub fn column_values(batch: &RecordBatch, name: &str) -> Result<Vec<Option<String>>, CoreError> {
    let column = utf8_column(batch, name)?;
    Ok(column
        .iter()
        .map(|value| value.map(|v| v.to_string()))
        .collect())
}
