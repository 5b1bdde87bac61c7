use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use arrow::{array::ArrayRef, datatypes::DataType};
use std::collections::HashMap;

/// What to do with a value the table does not know.
pub enum CategoryFallback {
    /// Collapse into a fixed bucket (gender: everything unmapped becomes
    /// the "other" group).
    Bucket(String),
    /// Leave the value unchanged (medication: unknown drugs pass through).
    Passthrough,
}

/// Replaces categorical values through a fixed lookup table.
///
/// Unmapped values are recovered locally via the fallback; this
/// transformation never fails.
pub struct MapCategory {
    table: HashMap<String, String>,
    fallback: CategoryFallback,
}

impl MapCategory {
    pub fn new(table: HashMap<String, String>, fallback: CategoryFallback) -> Self {
        Self { table, fallback }
    }

    fn mapped(&self, value: &str) -> String {
        match self.table.get(value) {
            Some(mapped) => mapped.clone(),
            None => match &self.fallback {
                CategoryFallback::Bucket(bucket) => bucket.clone(),
                CategoryFallback::Passthrough => value.to_string(),
            },
        }
    }
}

impl ColumnTransformation for MapCategory {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |value| Ok(self.mapped(value)))
    }

    fn output_format(
        &self,
        _input: &DataType,
    ) -> ColumnTransformationResult<ColumnTransformationOutput> {
        Ok(utf8_output())
    }
}
