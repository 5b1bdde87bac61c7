use crate::column_transformations::{
    CategoryFallback, ColumnTransformation, GeneralizeBirthDate, GeneralizeIdentifier, MapCategory,
    MaskPhone, Pseudonymize, RedactSsn, StripStreetNumbers, SuppressValue,
};
use crate::error::TransformError;
use crate::location::location_label;
use crate::tables::{default_gender_table, default_medication_table};
use crate::traits::Transformer;
use arrow::array::{Array, ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::collections::HashMap;
use std::sync::Arc;
use tabcloak_core::data::utf8_column;
use tabcloak_core::schema as canonical;
use tracing::debug;

/// Explicit configuration for one pipeline instance.
///
/// Everything is passed in at construction so several pipelines with
/// different tables or thresholds can coexist; nothing is module-global.
pub struct PipelineConfig {
    pub identifier_column: String,
    pub identifier_bucket_size: u64,
    pub pseudonym_column: String,
    pub pseudonym_prefix: String,
    /// Seed for the pseudonym nonce; `None` draws fresh entropy per run.
    pub pseudonym_seed: Option<u64>,
    pub birth_date_column: String,
    pub reference_year: i32,
    pub gender_column: String,
    pub gender_table: HashMap<String, String>,
    pub gender_fallback: String,
    pub ssn_column: String,
    pub phone_column: String,
    pub medication_column: String,
    pub medication_table: HashMap<String, String>,
    pub zip_column: String,
    pub suppression_sentinel: String,
    pub street_column: String,
    pub address_column: String,
    pub city_column: String,
    pub state_column: String,
    pub location_column: String,
    /// Columns removed from the output without a replacement.
    pub dropped_columns: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            identifier_column: canonical::PATIENT_ID.to_string(),
            identifier_bucket_size: 100,
            pseudonym_column: canonical::LAST_NAME.to_string(),
            pseudonym_prefix: "Pseudo_".to_string(),
            pseudonym_seed: None,
            birth_date_column: canonical::DATE_OF_BIRTH.to_string(),
            reference_year: 2023,
            gender_column: canonical::GENDER.to_string(),
            gender_table: default_gender_table(),
            gender_fallback: "Group_Other".to_string(),
            ssn_column: canonical::SSN.to_string(),
            phone_column: canonical::PHONE_NUMBER.to_string(),
            medication_column: canonical::MEDICATION.to_string(),
            medication_table: default_medication_table(),
            zip_column: canonical::ZIP_CODE.to_string(),
            suppression_sentinel: "Suppressed".to_string(),
            street_column: canonical::STREET_ADDRESS.to_string(),
            address_column: canonical::ADDRESS.to_string(),
            city_column: canonical::CITY.to_string(),
            state_column: canonical::STATE.to_string(),
            location_column: canonical::LOCATION.to_string(),
            dropped_columns: vec![canonical::FIRST_NAME.to_string()],
        }
    }
}

/// The fixed, ordered set of field-level rewrites.
///
/// Every transformation reads from the input batch; no transformation ever
/// observes another's output within the same pass. Dropping City, State and
/// Street Address while appending Address and Location changes the schema,
/// so the output is built as a new batch rather than edited in place.
pub struct AnonymizationPipeline {
    column_transformations: Vec<(String, Box<dyn ColumnTransformation>)>,
    street_transformation: Box<dyn ColumnTransformation>,
    street_column: String,
    address_column: String,
    city_column: String,
    state_column: String,
    location_column: String,
    dropped_columns: Vec<String>,
}

impl AnonymizationPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let pseudonymize = match config.pseudonym_seed {
            Some(seed) => Pseudonymize::with_seed(&config.pseudonym_prefix, seed),
            None => Pseudonymize::new(&config.pseudonym_prefix),
        };

        let column_transformations: Vec<(String, Box<dyn ColumnTransformation>)> = vec![
            (
                config.identifier_column,
                Box::new(GeneralizeIdentifier {
                    bucket_size: config.identifier_bucket_size,
                }),
            ),
            (config.pseudonym_column, Box::new(pseudonymize)),
            (
                config.birth_date_column,
                Box::new(GeneralizeBirthDate {
                    reference_year: config.reference_year,
                }),
            ),
            (config.ssn_column, Box::new(RedactSsn {})),
            (
                config.gender_column,
                Box::new(MapCategory::new(
                    config.gender_table,
                    CategoryFallback::Bucket(config.gender_fallback),
                )),
            ),
            (
                config.zip_column,
                Box::new(SuppressValue {
                    sentinel: config.suppression_sentinel,
                }),
            ),
            (
                config.medication_column,
                Box::new(MapCategory::new(
                    config.medication_table,
                    CategoryFallback::Passthrough,
                )),
            ),
            (config.phone_column, Box::new(MaskPhone {})),
        ];

        let mut dropped_columns = config.dropped_columns;
        dropped_columns.push(config.street_column.clone());
        dropped_columns.push(config.city_column.clone());
        dropped_columns.push(config.state_column.clone());

        Self {
            column_transformations,
            street_transformation: Box::new(StripStreetNumbers {}),
            street_column: config.street_column,
            address_column: config.address_column,
            city_column: config.city_column,
            state_column: config.state_column,
            location_column: config.location_column,
            dropped_columns,
        }
    }

    fn transformation_for(&self, column: &str) -> Option<&dyn ColumnTransformation> {
        self.column_transformations
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, transformation)| transformation.as_ref())
    }

    fn is_dropped(&self, column: &str) -> bool {
        self.dropped_columns.iter().any(|name| name == column)
    }
}

impl Default for AnonymizationPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

impl Transformer for AnonymizationPipeline {
    fn transform_schema(&self, schema: &Schema) -> Result<Schema, TransformError> {
        let mut fields = vec![];

        for field in schema.fields() {
            if self.is_dropped(field.name()) {
                continue;
            }

            match self.transformation_for(field.name()) {
                Some(transformation) => {
                    let output = transformation.output_format(field.data_type()).map_err(
                        |source| TransformError::Column {
                            column: field.name().clone(),
                            source,
                        },
                    )?;
                    fields.push(Field::new(field.name(), output.data_type, output.nullable));
                }
                None => fields.push(field.clone()),
            }
        }

        fields.push(Field::new(&self.address_column, DataType::Utf8, true));
        fields.push(Field::new(&self.location_column, DataType::Utf8, true));

        Ok(Schema::new(fields))
    }

    fn transform_records(&self, data: &RecordBatch) -> Result<RecordBatch, TransformError> {
        let schema = data.schema();

        let mut fields = vec![];
        let mut columns: Vec<ArrayRef> = vec![];

        for (index, field) in schema.fields().iter().enumerate() {
            if self.is_dropped(field.name()) {
                continue;
            }

            let column = data.column(index).clone();

            match self.transformation_for(field.name()) {
                Some(transformation) => {
                    let column_error = |source| TransformError::Column {
                        column: field.name().clone(),
                        source,
                    };
                    let transformed = transformation.transform_data(column).map_err(column_error)?;
                    let output = transformation
                        .output_format(field.data_type())
                        .map_err(|source| TransformError::Column {
                            column: field.name().clone(),
                            source,
                        })?;

                    fields.push(Field::new(field.name(), output.data_type, output.nullable));
                    columns.push(transformed);
                }
                None => {
                    fields.push(field.clone());
                    columns.push(column);
                }
            }
        }

        // The appended columns also read from the input batch only.
        let street_index = schema.index_of(&self.street_column)?;
        let address = self
            .street_transformation
            .transform_data(data.column(street_index).clone())
            .map_err(|source| TransformError::Column {
                column: self.street_column.clone(),
                source,
            })?;
        fields.push(Field::new(&self.address_column, DataType::Utf8, true));
        columns.push(address);

        let city = utf8_column(data, &self.city_column)?;
        let state = utf8_column(data, &self.state_column)?;
        let location: StringArray = (0..data.num_rows())
            .map(|row| {
                let city_value = if city.is_null(row) {
                    None
                } else {
                    Some(city.value(row))
                };
                let state_value = if state.is_null(row) {
                    None
                } else {
                    Some(state.value(row))
                };
                Some(location_label(city_value, state_value))
            })
            .collect();
        fields.push(Field::new(&self.location_column, DataType::Utf8, true));
        columns.push(Arc::new(location));

        debug!(
            rows = data.num_rows(),
            input_columns = schema.fields().len(),
            output_columns = columns.len(),
            "applied anonymization pipeline"
        );

        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
    }
}
