mod generalize_birth_date;
mod generalize_identifier;
mod map_category;
mod mask_phone;
mod pseudonymize;
mod redact_ssn;
mod strip_street_numbers;
mod suppress;

pub use generalize_birth_date::GeneralizeBirthDate;
pub use generalize_identifier::GeneralizeIdentifier;
pub use map_category::{CategoryFallback, MapCategory};
pub use mask_phone::MaskPhone;
pub use pseudonymize::Pseudonymize;
pub use redact_ssn::RedactSsn;
pub use strip_street_numbers::StripStreetNumbers;
pub use suppress::SuppressValue;

use crate::error::ColumnTransformationError;
use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::DataType,
};
use std::sync::Arc;

pub type ColumnTransformationResult<T> = Result<T, ColumnTransformationError>;

pub struct ColumnTransformationOutput {
    pub data_type: DataType,
    pub nullable: bool,
}

/// A pure rewrite of one column's values.
///
/// Transformations read the original column data; nulls pass through
/// untouched so missing values survive the pipeline as missing values.
pub trait ColumnTransformation: Send + Sync {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef>;
    fn output_format(&self, input: &DataType) -> ColumnTransformationResult<ColumnTransformationOutput>;
}

/// Applies a per-value rewrite over a utf8 column, keeping nulls in place.
pub(crate) fn transform_utf8_values<F>(
    data: &ArrayRef,
    rewrite: F,
) -> ColumnTransformationResult<ArrayRef>
where
    F: Fn(&str) -> ColumnTransformationResult<String>,
{
    match data.data_type() {
        DataType::Utf8 => {
            let array = data
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or(ColumnTransformationError::DowncastFailed)?;

            let values = array
                .iter()
                .map(|value| value.map(|v| rewrite(v)).transpose())
                .collect::<ColumnTransformationResult<Vec<Option<String>>>>()?;

            Ok(Arc::new(values.into_iter().collect::<StringArray>()))
        }
        other => Err(ColumnTransformationError::UnsupportedType(other.clone())),
    }
}

pub(crate) fn utf8_output() -> ColumnTransformationOutput {
    ColumnTransformationOutput {
        data_type: DataType::Utf8,
        nullable: true,
    }
}
