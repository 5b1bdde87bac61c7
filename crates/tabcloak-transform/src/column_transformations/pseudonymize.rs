use super::{
    transform_utf8_values, utf8_output, ColumnTransformation, ColumnTransformationOutput,
    ColumnTransformationResult,
};
use arrow::{array::ArrayRef, datatypes::DataType};
use md5::{Digest, Md5};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

/// Replaces a name with an irreversible tagged digest.
///
/// Each value is hashed together with a nonce drawn fresh from `1..=1000`,
/// so repeated runs over the same name yield different pseudonyms. Seed the
/// transformation for reproducible output in tests.
pub struct Pseudonymize {
    prefix: String,
    rng: Mutex<StdRng>,
}

impl Pseudonymize {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(prefix: &str, seed: u64) -> Self {
        Self {
            prefix: prefix.to_string(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pseudonym(&self, value: &str) -> String {
        let nonce: u32 = self.rng.lock().unwrap().gen_range(1..=1000);
        let digest = Md5::digest(format!("{}{}", value, nonce).as_bytes());
        format!("{}{:x}", self.prefix, digest)
    }
}

impl ColumnTransformation for Pseudonymize {
    fn transform_data(&self, data: ArrayRef) -> ColumnTransformationResult<ArrayRef> {
        transform_utf8_values(&data, |value| Ok(self.pseudonym(value)))
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

    fn values(result: &ArrayRef) -> Vec<Option<String>> {
        result
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap()
            .iter()
            .map(|v| v.map(|v| v.to_string()))
            .collect()
    }

    #[test]
    fn test_pseudonyms_are_tagged_digests() {
        let transformation = Pseudonymize::with_seed("Pseudo_", 7);
        let array: ArrayRef = Arc::new(StringArray::from(vec![Some("Miller"), None]));
        let result = transformation.transform_data(array).unwrap();

        let pseudonyms = values(&result);
        let first = pseudonyms[0].as_ref().unwrap();

        assert!(first.starts_with("Pseudo_"));
        assert_eq!("Pseudo_".len() + 32, first.len());
        assert!(first["Pseudo_".len()..]
            .chars()
            .all(|c| c.is_ascii_hexdigit()));
        assert_eq!(None, pseudonyms[1]);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let array: ArrayRef = Arc::new(StringArray::from(vec!["Miller", "Miller", "Schmidt"]));

        let first_run = Pseudonymize::with_seed("Pseudo_", 42)
            .transform_data(array.clone())
            .unwrap();
        let second_run = Pseudonymize::with_seed("Pseudo_", 42)
            .transform_data(array)
            .unwrap();

        assert_eq!(values(&first_run), values(&second_run));
    }

    #[test]
    fn test_nonce_varies_within_a_run() {
        // Same input value twice: the resampled nonce should almost surely
        // produce two different pseudonyms within one pass.
        let array: ArrayRef = Arc::new(StringArray::from(vec!["Miller"; 16]));
        let result = Pseudonymize::with_seed("Pseudo_", 1)
            .transform_data(array)
            .unwrap();

        let pseudonyms = values(&result);
        assert!(pseudonyms.iter().any(|p| p != &pseudonyms[0]));
    }
}
