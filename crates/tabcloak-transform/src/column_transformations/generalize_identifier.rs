use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use crate::error::ColumnTransformationError;
use arrow::{array::ArrayRef, datatypes::DataType};

/// Coarsens a unique record code like `P123456` into a bucket label.
///
/// The leading alphabetic prefix is stripped and the numeric part grouped
/// into buckets of `bucket_size`. Bucket labels are not valid re-inputs;
/// feeding the output back in is a malformed-identifier error.
pub struct GeneralizeIdentifier {
    pub bucket_size: u64,
}

impl GeneralizeIdentifier {
    fn bucket_label(&self, value: &str) -> ColumnTransformationResult<String> {
        let digits = value.trim_start_matches(|c: char| c.is_ascii_alphabetic());
        let number: u64 = digits
            .parse()
            .map_err(|_| ColumnTransformationError::MalformedIdentifier(value.to_string()))?;

        Ok(format!("Group_{}", number / self.bucket_size))
    }
}

impl ColumnTransformation for GeneralizeIdentifier {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |value| self.bucket_label(value))
    }

    fn output_format(
        &self,
        _input: &DataType,
    ) -> ColumnTransformationResult<ColumnTransformationOutput> {
        Ok(utf8_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::StringArray;
    use std::sync::Arc;

    #[test]
    fn test_ids_bucketed_by_hundred() {
        let transformation = GeneralizeIdentifier { bucket_size: 100 };
        let array = Arc::new(StringArray::from(vec!["P123456", "P123499", "P000042"]));
        let result = transformation.transform_data(array).unwrap();

        assert_eq!(
            vec![Some("Group_1234"), Some("Group_1234"), Some("Group_0")],
            result
                .as_any()
                .downcast_ref::<StringArray>()
                .unwrap()
                .iter()
                .collect::<Vec<Option<&str>>>()
        );
    }

    #[test]
    fn test_non_numeric_identifier_is_an_error() {
        let transformation = GeneralizeIdentifier { bucket_size: 100 };
        let array = Arc::new(StringArray::from(vec!["P12x456"]));
        let result = transformation.transform_data(array);

        assert!(matches!(
            result,
            Err(ColumnTransformationError::MalformedIdentifier(_))
        ));
    }

    #[test]
    fn test_bucket_label_is_not_a_valid_re_input() {
        let transformation = GeneralizeIdentifier { bucket_size: 100 };
        let array = Arc::new(StringArray::from(vec!["Group_1234"]));

        assert!(transformation.transform_data(array).is_err());
    }
}
