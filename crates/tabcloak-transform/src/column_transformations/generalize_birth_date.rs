use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use crate::error::ColumnTransformationError;
use arrow::{array::ArrayRef, datatypes::DataType};

/// Reduces an ISO date of birth to a decade-of-age bucket.
///
/// Age is computed against a fixed reference year, so the same dataset
/// generalizes identically on every run. The decade division truncates
/// toward zero rather than flooring, which only matters for birth years
/// after the reference year; those are not meaningful inputs.
pub struct GeneralizeBirthDate {
    pub reference_year: i32,
}

impl GeneralizeBirthDate {
    fn decade_label(&self, value: &str) -> ColumnTransformationResult<String> {
        let birth_year: i32 = value
            .split('-')
            .next()
            .unwrap_or("")
            .parse()
            .map_err(|_| ColumnTransformationError::MalformedDate(value.to_string()))?;

        let age_group = (self.reference_year - birth_year) / 10;
        Ok(format!("Age Group_{}0s", age_group))
    }
}

impl ColumnTransformation for GeneralizeBirthDate {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |value| self.decade_label(value))
    }

    fn output_format(
        &self,
        _input: &DataType,
    ) -> ColumnTransformationResult<ColumnTransformationOutput> {
        Ok(utf8_output())
    }
}
