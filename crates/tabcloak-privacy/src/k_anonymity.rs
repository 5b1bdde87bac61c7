use crate::error::PrivacyError;
use crate::grouping::{group_by, GroupKey};
use arrow::record_batch::RecordBatch;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct KAnonymityViolation {
    pub group: GroupKey,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct KAnonymityReport {
    pub satisfied: bool,
    pub violations: Vec<KAnonymityViolation>,
}

/// Checks that every quasi-identifier group holds at least `k` records.
///
/// Every violating group is reported; evaluation never short-circuits. A
/// dataset with no records satisfies the property vacuously.
pub fn check_k_anonymity(
    data: &RecordBatch,
    quasi_identifiers: &[String],
    k: usize,
) -> Result<KAnonymityReport, PrivacyError> {
    let mut violations = vec![];

    for group in group_by(data, quasi_identifiers)? {
        let count = group.rows.len();
        if count < k {
            warn!(
                group = %group.key,
                count,
                k,
                "k-anonymity not satisfied for group"
            );
            violations.push(KAnonymityViolation {
                group: group.key,
                count,
            });
        }
    }

    Ok(KAnonymityReport {
        satisfied: violations.is_empty(),
        violations,
    })
}
