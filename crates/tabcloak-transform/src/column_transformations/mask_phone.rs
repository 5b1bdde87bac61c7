use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use arrow::{array::ArrayRef, datatypes::DataType};

/// Keeps a phone number's area code and masks the remaining digits.
pub struct MaskPhone;

fn masked(value: &str) -> String {
    let area_code = value.split('-').next().unwrap_or("");
    format!("{}-xxx-xxxx", area_code)
}

impl ColumnTransformation for MaskPhone {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |value| Ok(masked(value)))
    }

    fn output_format(
        &self,
        _input: &DataType,
    ) -> ColumnTransformationResult<ColumnTransformationOutput> {
        Ok(utf8_output())
    }
}
