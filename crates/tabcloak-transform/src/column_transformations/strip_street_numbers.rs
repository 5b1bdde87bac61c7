use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use arrow::{array::ArrayRef, datatypes::DataType};

/// Drops leading and trailing numeric tokens from a free-text address.
///
/// Best-effort heuristic, not an address grammar: interior numeric tokens
/// such as unit numbers survive. An address with no remaining tokens
/// becomes the empty string.
pub struct StripStreetNumbers;

fn is_numeric_token(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_digit())
}

fn stripped(value: &str) -> String {
    let mut parts: Vec<&str> = value.split_whitespace().collect();

    if parts.first().map_or(false, |part| is_numeric_token(part)) {
        parts.remove(0);
    }

    if parts.last().map_or(false, |part| is_numeric_token(part)) {
        parts.pop();
    }

    parts.join(" ")
}

impl ColumnTransformation for StripStreetNumbers {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |value| Ok(stripped(value)))
    }

    fn output_format(
        &self,
        _input: &DataType,
    ) -> ColumnTransformationResult<ColumnTransformationOutput> {
        Ok(utf8_output())
    }
}
