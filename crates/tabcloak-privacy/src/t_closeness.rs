use crate::distribution::{total_variation_distance, value_distribution};
use crate::error::PrivacyError;
use crate::grouping::{group_by, GroupKey};
use arrow::record_batch::RecordBatch;
use tabcloak_core::data::utf8_column;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct TClosenessViolation {
    pub group: GroupKey,
    pub distance: f64,
}

#[derive(Debug, Clone)]
pub struct TClosenessReport {
    pub satisfied: bool,
    pub violations: Vec<TClosenessViolation>,
}

/// Checks that every quasi-identifier group's sensitive-value distribution
/// stays within total variation distance `t` of the dataset-wide one.
///
/// Single-attribute measure; a group fails on strictly greater than `t`.
pub fn check_t_closeness(
    data: &RecordBatch,
    quasi_identifiers: &[String],
    sensitive_column: &str,
    t: f64,
) -> Result<TClosenessReport, PrivacyError> {
    let column = utf8_column(data, sensitive_column)?;

    let all_rows: Vec<usize> = (0..data.num_rows()).collect();
    let global = value_distribution(column, &all_rows);

    let mut violations = vec![];

    for group in group_by(data, quasi_identifiers)? {
        let local = value_distribution(column, &group.rows);
        let distance = total_variation_distance(&local, &global);

        if distance > t {
            warn!(
                group = %group.key,
                distance,
                t,
                "t-closeness not satisfied for group"
            );
            violations.push(TClosenessViolation {
                group: group.key,
                distance,
            });
        }
    }

    Ok(TClosenessReport {
        satisfied: violations.is_empty(),
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::StringArray;
    use std::sync::Arc;
    use tabcloak_core::data::utf8_schema;

    fn batch(zips: Vec<&str>, conditions: Vec<&str>) -> RecordBatch {
        let schema = utf8_schema(&["Zip Code", "Medical Condition"]);
        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(StringArray::from(zips)),
                Arc::new(StringArray::from(conditions)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_identical_distributions_always_satisfy() {
        // Both groups mirror the global 50/50 split exactly.
        let data = batch(
            vec!["43210", "43210", "90210", "90210"],
            vec!["Flu", "Asthma", "Flu", "Asthma"],
        );

        let report =
            check_t_closeness(&data, &["Zip Code".to_string()], "Medical Condition", 0.0).unwrap();

        assert!(report.satisfied);
    }

    #[test]
    fn test_skewed_group_reported_with_distance() {
        // Global: Flu 0.5, Asthma 0.5. Each group is all one value, so the
        // distance per group is |1 - 0.5| + |0 - 0.5| = 1.
        let data = batch(
            vec!["43210", "43210", "90210", "90210"],
            vec!["Flu", "Flu", "Asthma", "Asthma"],
        );

        let report =
            check_t_closeness(&data, &["Zip Code".to_string()], "Medical Condition", 0.4).unwrap();

        assert!(!report.satisfied);
        assert_eq!(2, report.violations.len());
        for violation in &report.violations {
            assert!((violation.distance - 1.0).abs() < 1e-9);
            assert!(violation.distance >= 0.0 && violation.distance <= 2.0);
        }
    }

    #[test]
    fn test_strictly_greater_than_threshold_fails() {
        let data = batch(
            vec!["43210", "43210", "90210", "90210"],
            vec!["Flu", "Flu", "Asthma", "Asthma"],
        );

        let report =
            check_t_closeness(&data, &["Zip Code".to_string()], "Medical Condition", 1.0).unwrap();

        // Distance equals the threshold exactly: not a violation.
        assert!(report.satisfied);
    }
}
