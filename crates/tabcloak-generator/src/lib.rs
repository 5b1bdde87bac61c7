//! Synthetic patient record source.
//!
//! Records are generated in cohorts that share one set of quasi-identifier
//! values, so a fresh dataset of cohort size `c` is `c`-anonymous by
//! construction. Everything else is drawn per record from fixed tables.

use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::sync::Arc;
use tabcloak_core::data::utf8_schema;
use tabcloak_core::schema as canonical;
use tracing::info;

mod error;
mod tables;

pub use error::GeneratorError;
pub use tables::{CITIES, CONDITIONS, FIRST_NAMES, LAST_NAMES, STREET_NAMES};

pub struct GeneratorConfig {
    /// Requested record count, rounded down to a multiple of `cohort_size`.
    pub record_count: usize,
    pub cohort_size: usize,
    /// Ages are derived relative to this year.
    pub reference_year: i32,
    /// `None` draws fresh entropy per run.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            record_count: 3500,
            cohort_size: 7,
            reference_year: 2023,
            seed: None,
        }
    }
}

struct PatientRecord {
    patient_id: String,
    first_name: String,
    last_name: String,
    date_of_birth: String,
    gender: String,
    ssn: String,
    phone_number: String,
    medical_condition: String,
    medication: String,
    street_address: String,
    city: String,
    state: String,
    zip_code: String,
}

/// Values shared by every record of one cohort.
struct Cohort {
    date_of_birth: String,
    ssn: String,
    street_address: String,
    city: String,
    state: String,
    zip_code: String,
}

pub struct PatientGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    used_ids: HashSet<u32>,
}

impl PatientGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            used_ids: HashSet::new(),
        }
    }

    pub fn generate(&mut self) -> Result<RecordBatch, GeneratorError> {
        let cohorts = self.config.record_count / self.config.cohort_size;
        let mut records = Vec::with_capacity(cohorts * self.config.cohort_size);

        for _ in 0..cohorts {
            let cohort = self.cohort();
            for _ in 0..self.config.cohort_size {
                records.push(self.record(&cohort));
            }
        }

        records.shuffle(&mut self.rng);

        info!(
            records = records.len(),
            cohort_size = self.config.cohort_size,
            "generated synthetic patient records"
        );

        batch_from_records(&records)
    }

    fn cohort(&mut self) -> Cohort {
        let age = self.rng.gen_range(18..=80);
        let year = self.config.reference_year - age;
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=28);

        let (city, state) = *CITIES.choose(&mut self.rng).unwrap();

        Cohort {
            date_of_birth: format!("{:04}-{:02}-{:02}", year, month, day),
            ssn: format!(
                "{:03}-{:02}-{:04}",
                self.rng.gen_range(100..=899),
                self.rng.gen_range(1..=99),
                self.rng.gen_range(1..=9999)
            ),
            street_address: format!(
                "{} {}",
                self.rng.gen_range(1..=9999),
                STREET_NAMES.choose(&mut self.rng).unwrap()
            ),
            city: city.to_string(),
            state: state.to_string(),
            zip_code: format!("{:05}", self.rng.gen_range(501..=99950)),
        }
    }

    fn record(&mut self, cohort: &Cohort) -> PatientRecord {
        let (condition, _) = CONDITIONS.choose(&mut self.rng).unwrap();
        // The medication is drawn from a random condition's list, not the
        // record's own, so the sensitive columns stay decoupled.
        let (_, medications) = CONDITIONS.choose(&mut self.rng).unwrap();
        let medication = medications.choose(&mut self.rng).unwrap();

        let gender = if self.rng.gen_bool(0.5) {
            "Male"
        } else {
            "Female"
        };

        PatientRecord {
            patient_id: format!("P{:06}", self.unique_id()),
            first_name: FIRST_NAMES.choose(&mut self.rng).unwrap().to_string(),
            last_name: LAST_NAMES.choose(&mut self.rng).unwrap().to_string(),
            date_of_birth: cohort.date_of_birth.clone(),
            gender: gender.to_string(),
            ssn: cohort.ssn.clone(),
            phone_number: format!(
                "{}-{:03}-{:04}",
                self.rng.gen_range(200..=999),
                self.rng.gen_range(200..=999),
                self.rng.gen_range(0..=9999)
            ),
            medical_condition: condition.to_string(),
            medication: medication.to_string(),
            street_address: cohort.street_address.clone(),
            city: cohort.city.clone(),
            state: cohort.state.clone(),
            zip_code: cohort.zip_code.clone(),
        }
    }

    fn unique_id(&mut self) -> u32 {
        loop {
            let candidate = self.rng.gen_range(0..1_000_000);
            if self.used_ids.insert(candidate) {
                return candidate;
            }
        }
    }
}

fn batch_from_records(records: &[PatientRecord]) -> Result<RecordBatch, GeneratorError> {
    let schema = utf8_schema(&canonical::input_fields());

    let column = |values: Vec<&str>| -> ArrayRef { Arc::new(StringArray::from(values)) };

    let columns = vec![
        column(records.iter().map(|r| r.patient_id.as_str()).collect()),
        column(records.iter().map(|r| r.first_name.as_str()).collect()),
        column(records.iter().map(|r| r.last_name.as_str()).collect()),
        column(records.iter().map(|r| r.date_of_birth.as_str()).collect()),
        column(records.iter().map(|r| r.gender.as_str()).collect()),
        column(records.iter().map(|r| r.ssn.as_str()).collect()),
        column(records.iter().map(|r| r.phone_number.as_str()).collect()),
        column(records.iter().map(|r| r.medical_condition.as_str()).collect()),
        column(records.iter().map(|r| r.medication.as_str()).collect()),
        column(records.iter().map(|r| r.street_address.as_str()).collect()),
        column(records.iter().map(|r| r.city.as_str()).collect()),
        column(records.iter().map(|r| r.state.as_str()).collect()),
        column(records.iter().map(|r| r.zip_code.as_str()).collect()),
    ];

    Ok(RecordBatch::try_new(Arc::new(schema), columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabcloak_core::data::column_values;
    use tabcloak_privacy::check_k_anonymity;

    fn generate(record_count: usize, seed: u64) -> RecordBatch {
        PatientGenerator::new(GeneratorConfig {
            record_count,
            seed: Some(seed),
            ..GeneratorConfig::default()
        })
        .generate()
        .unwrap()
    }

    #[test]
    fn test_record_count_rounded_down_to_cohorts() {
        let batch = generate(20, 1);
        assert_eq!(14, batch.num_rows());
    }

    #[test]
    fn test_canonical_input_schema() {
        let batch = generate(7, 1);
        let schema = batch.schema();
        let names: Vec<&str> = schema
            .fields()
            .iter()
            .map(|field| field.name().as_str())
            .collect();
        assert_eq!(canonical::input_fields(), names);
    }

    #[test]
    fn test_seven_anonymous_by_construction() {
        let batch = generate(70, 7);

        let quasi_identifiers: Vec<String> = vec![
            canonical::DATE_OF_BIRTH,
            canonical::SSN,
            canonical::STREET_ADDRESS,
            canonical::CITY,
            canonical::STATE,
            canonical::ZIP_CODE,
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let report = check_k_anonymity(&batch, &quasi_identifiers, 7).unwrap();
        assert!(report.satisfied);
    }

    #[test]
    fn test_patient_ids_unique() {
        let batch = generate(700, 3);
        let ids = column_values(&batch, canonical::PATIENT_ID).unwrap();
        let distinct: HashSet<_> = ids.iter().collect();
        assert_eq!(batch.num_rows(), distinct.len());
    }

    #[test]
    fn test_medication_drawn_from_known_drugs() {
        let batch = generate(70, 11);
        let known: HashSet<&str> = CONDITIONS
            .iter()
            .flat_map(|(_, medications)| medications.iter().copied())
            .collect();

        for medication in column_values(&batch, canonical::MEDICATION).unwrap() {
            assert!(known.contains(medication.unwrap().as_str()));
        }
    }

    #[test]
    fn test_seeded_generation_reproducible() {
        let first = generate(70, 99);
        let second = generate(70, 99);

        for name in canonical::input_fields() {
            assert_eq!(
                column_values(&first, name).unwrap(),
                column_values(&second, name).unwrap()
            );
        }
    }
}
