mod distribution;
mod error;
mod grouping;
mod k_anonymity;
mod l_diversity;
mod t_closeness;

pub use distribution::{total_variation_distance, value_distribution, Distribution};
pub use error::PrivacyError;
pub use grouping::{group_by, Group, GroupKey};
pub use k_anonymity::{check_k_anonymity, KAnonymityReport, KAnonymityViolation};
pub use l_diversity::{check_l_diversity, LDiversityReport, LDiversityViolation};
pub use t_closeness::{check_t_closeness, TClosenessReport, TClosenessViolation};

use arrow::record_batch::RecordBatch;

/// Numeric thresholds for the three disclosure-control metrics.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    pub k: usize,
    pub l: usize,
    pub t: f64,
}

/// The combined verdicts over one dataset.
///
/// The three metrics are independent; none of them gates the others, and
/// none of them gates anonymization. Callers decide what to do with a
/// non-compliant dataset.
#[derive(Debug, Clone)]
pub struct PrivacyReport {
    pub k_anonymity: KAnonymityReport,
    pub l_diversity: LDiversityReport,
    pub t_closeness: TClosenessReport,
}

impl PrivacyReport {
    pub fn is_compliant(&self) -> bool {
        self.k_anonymity.satisfied && self.l_diversity.satisfied && self.t_closeness.satisfied
    }
}

/// Runs all three metric checks over the dataset.
///
/// T-closeness is a single-attribute measure; it is evaluated over the first
/// sensitive column.
pub fn evaluate(
    data: &RecordBatch,
    quasi_identifiers: &[String],
    sensitive_columns: &[String],
    thresholds: &Thresholds,
) -> Result<PrivacyReport, PrivacyError> {
    let t_closeness_column = sensitive_columns
        .first()
        .ok_or(PrivacyError::NoSensitiveColumns)?;

    Ok(PrivacyReport {
        k_anonymity: check_k_anonymity(data, quasi_identifiers, thresholds.k)?,
        l_diversity: check_l_diversity(data, quasi_identifiers, sensitive_columns, thresholds.l)?,
        t_closeness: check_t_closeness(data, quasi_identifiers, t_closeness_column, thresholds.t)?,
    })
}
