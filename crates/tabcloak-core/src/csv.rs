use crate::data::utf8_schema;
use crate::error::CoreError;
use arrow::array::{new_empty_array, Array, ArrayRef};
use arrow::compute::kernels::concat::concat;
use arrow::record_batch::RecordBatch;
use std::io::Cursor;
use std::sync::Arc;
use tracing::debug;

const READ_BATCH_SIZE: usize = 4096;

/// Decodes a delimited text document into a single record batch.
///
/// The header row names the fields; every column is decoded as utf8 so that
/// values like zip codes keep their leading zeros.
pub fn read_csv(content: &str) -> Result<RecordBatch, CoreError> {
    let header = content.lines().next().ok_or(CoreError::MissingHeader)?;
    let field_names = header_fields(header);
    let field_names: Vec<&str> = field_names.iter().map(String::as_str).collect();

    let schema = Arc::new(utf8_schema(&field_names));

    let reader = arrow::csv::Reader::new(
        Cursor::new(content.as_bytes()),
        schema.clone(),
        true,
        None,
        READ_BATCH_SIZE,
        None,
        None,
    );

    let batches = reader.collect::<arrow::error::Result<Vec<RecordBatch>>>()?;

    let batch = match batches.len() {
        0 => {
            let columns: Vec<ArrayRef> = schema
                .fields()
                .iter()
                .map(|field| new_empty_array(field.data_type()))
                .collect();
            RecordBatch::try_new(schema, columns)?
        }
        1 => batches.into_iter().next().ok_or(CoreError::MissingHeader)?,
        _ => {
            let columns = (0..schema.fields().len())
                .map(|index| {
                    let arrays: Vec<&dyn Array> = batches
                        .iter()
                        .map(|batch| batch.column(index).as_ref())
                        .collect();
                    concat(&arrays)
                })
                .collect::<arrow::error::Result<Vec<ArrayRef>>>()?;
            RecordBatch::try_new(schema, columns)?
        }
    };

    debug!(rows = batch.num_rows(), "decoded tabular document");

    Ok(batch)
}

/// Splits the header row into field names, honoring quoting.
///
/// A quoted name may contain commas, and a doubled quote inside a quoted
/// name is an escaped literal quote.
fn header_fields(header: &str) -> Vec<String> {
    let mut fields = vec![];
    let mut current = String::new();
    let mut in_quotes = false;

    let mut chars = header.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Encodes a record batch as delimited text with a header row.
pub fn write_csv(batch: &RecordBatch) -> Result<String, CoreError> {
    let mut buffer: Vec<u8> = vec![];

    {
        let mut writer = arrow::csv::Writer::new(&mut buffer);
        writer.write(batch)?;
    }

    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::utf8_column;
    use arrow::array::StringArray;

    #[test]
    fn test_round_trip_preserves_order() {
        let schema = utf8_schema(&["id", "city"]);
        let batch = RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(StringArray::from(vec!["P3", "P1", "P2"])),
                Arc::new(StringArray::from(vec!["Columbus", "Dayton", "Akron"])),
            ],
        )
        .unwrap();

        let encoded = write_csv(&batch).unwrap();
        let decoded = read_csv(&encoded).unwrap();

        assert_eq!(
            vec![Some("P3"), Some("P1"), Some("P2")],
            utf8_column(&decoded, "id")
                .unwrap()
                .iter()
                .collect::<Vec<Option<&str>>>()
        );
    }

    #[test]
    fn test_round_trip_quoted_comma() {
        let schema = utf8_schema(&["location"]);
        let batch = RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(StringArray::from(vec![
                "City_Columbus, State_OH",
            ]))],
        )
        .unwrap();

        let encoded = write_csv(&batch).unwrap();
        let decoded = read_csv(&encoded).unwrap();

        assert_eq!(
            vec![Some("City_Columbus, State_OH")],
            utf8_column(&decoded, "location")
                .unwrap()
                .iter()
                .collect::<Vec<Option<&str>>>()
        );
    }

    #[test]
    fn test_quoted_header_name_with_comma() {
        let decoded = read_csv("\"Location, Label\",City\n\"City_Columbus, State_OH\",Columbus\n")
            .unwrap();

        assert_eq!(2, decoded.num_columns());
        assert_eq!("Location, Label", decoded.schema().field(0).name());
        assert_eq!(
            vec![Some("City_Columbus, State_OH")],
            utf8_column(&decoded, "Location, Label")
                .unwrap()
                .iter()
                .collect::<Vec<Option<&str>>>()
        );
    }

    #[test]
    fn test_header_only_document() {
        let decoded = read_csv("id,city\n").unwrap();

        assert_eq!(0, decoded.num_rows());
        assert_eq!(2, decoded.num_columns());
        assert_eq!("city", decoded.schema().field(1).name());
    }

    #[test]
    fn test_empty_document() {
        assert!(matches!(read_csv(""), Err(CoreError::MissingHeader)));
    }
}
