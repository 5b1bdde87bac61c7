use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use arrow::{array::ArrayRef, datatypes::DataType};

/// Masks a social security number down to its last four characters.
///
/// Idempotent: redacting already-redacted output yields the same output.
pub struct RedactSsn;

fn redacted(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let start = chars.len().saturating_sub(4);
    let last_four: String = chars[start..].iter().collect();
    format!("xxx-xx-{}", last_four)
}

impl ColumnTransformation for RedactSsn {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |value| Ok(redacted(value)))
    }

    fn output_format(
        &self,
        _input: &DataType,
    ) -> ColumnTransformationResult<ColumnTransformationOutput> {
        Ok(utf8_output())
    }
}
