use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use arrow::{array::ArrayRef, datatypes::DataType};

/// Full suppression: every value becomes a fixed sentinel.
///
/// Idempotent, and the only transformation that destroys all information
/// in its column.
pub struct SuppressValue {
    pub sentinel: String,
}

impl ColumnTransformation for SuppressValue {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |_| Ok(self.sentinel.clone()))
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
    fn test_every_value_suppressed() {
        let transformation = SuppressValue {
            sentinel: "Suppressed".to_string(),
        };
        let array = Arc::new(StringArray::from(vec![Some("43210"), Some("90210"), None]));
        let result = transformation.transform_data(array).unwrap();

        assert_eq!(
            vec![Some("Suppressed"), Some("Suppressed"), None],
            result
                .as_any()
                .downcast_ref::<StringArray>()
                .unwrap()
                .iter()
                .collect::<Vec<Option<&str>>>()
        );
    }

    #[test]
    fn test_idempotent() {
        let transformation = SuppressValue {
            sentinel: "Suppressed".to_string(),
        };
        let array: ArrayRef = Arc::new(StringArray::from(vec!["43210"]));

        let once = transformation.transform_data(array).unwrap();
        let twice = transformation.transform_data(once.clone()).unwrap();

        assert_eq!(
            once.as_any()
                .downcast_ref::<StringArray>()
                .unwrap()
                .iter()
                .collect::<Vec<Option<&str>>>(),
            twice
                .as_any()
                .downcast_ref::<StringArray>()
                .unwrap()
                .iter()
                .collect::<Vec<Option<&str>>>()
        );
    }
}
