use crate::error::PrivacyError;
use crate::grouping::{group_by, value_at, GroupKey};
use arrow::array::StringArray;
use arrow::record_batch::RecordBatch;
use itertools::Itertools;
use tabcloak_core::data::utf8_column;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct LDiversityViolation {
    pub group: GroupKey,
    pub distinct_combinations: usize,
}

#[derive(Debug, Clone)]
pub struct LDiversityReport {
    pub satisfied: bool,
    pub violations: Vec<LDiversityViolation>,
}

/// Checks that every quasi-identifier group holds at least `l` distinct
/// combinations of the sensitive columns.
///
/// Diversity is measured over the combination of all listed sensitive
/// columns, not over any single one; duplicate combinations count once.
pub fn check_l_diversity(
    data: &RecordBatch,
    quasi_identifiers: &[String],
    sensitive_columns: &[String],
    l: usize,
) -> Result<LDiversityReport, PrivacyError> {
    let sensitive = sensitive_columns
        .iter()
        .map(|name| utf8_column(data, name))
        .collect::<Result<Vec<&StringArray>, _>>()?;

    let mut violations = vec![];

    for group in group_by(data, quasi_identifiers)? {
        let distinct_combinations = group
            .rows
            .iter()
            .map(|&row| {
                sensitive
                    .iter()
                    .map(|column| value_at(column, row))
                    .collect::<Vec<Option<String>>>()
            })
            .unique()
            .count();

        if distinct_combinations < l {
            warn!(
                group = %group.key,
                distinct_combinations,
                l,
                "l-diversity not satisfied for group"
            );
            violations.push(LDiversityViolation {
                group: group.key,
                distinct_combinations,
            });
        }
    }

    Ok(LDiversityReport {
        satisfied: violations.is_empty(),
        violations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tabcloak_core::data::utf8_schema;

    fn batch(conditions: Vec<&str>) -> RecordBatch {
        let zips = vec!["43210"; conditions.len()];
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
    fn test_strict_boundary_at_threshold() {
        // Three distinct values: satisfied at l=3, violated at l=4.
        let data = batch(vec!["A", "A", "B", "C", "C"]);
        let quasi = vec!["Zip Code".to_string()];
        let sensitive = vec!["Medical Condition".to_string()];

        let at_three = check_l_diversity(&data, &quasi, &sensitive, 3).unwrap();
        assert!(at_three.satisfied);

        let at_four = check_l_diversity(&data, &quasi, &sensitive, 4).unwrap();
        assert!(!at_four.satisfied);
        assert_eq!(3, at_four.violations[0].distinct_combinations);
    }

    #[test]
    fn test_combinations_counted_not_single_columns() {
        let schema = utf8_schema(&["Zip Code", "Medical Condition", "Medication"]);
        let data = RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(StringArray::from(vec!["43210", "43210", "43210"])),
                Arc::new(StringArray::from(vec!["Flu", "Flu", "Flu"])),
                Arc::new(StringArray::from(vec![
                    "Oseltamivir",
                    "Zanamivir",
                    "Oseltamivir",
                ])),
            ],
        )
        .unwrap();

        let quasi = vec!["Zip Code".to_string()];
        let both = vec![
            "Medical Condition".to_string(),
            "Medication".to_string(),
        ];

        // One condition value, two medication values: two distinct combinations.
        let report = check_l_diversity(&data, &quasi, &both, 2).unwrap();
        assert!(report.satisfied);

        let report = check_l_diversity(&data, &quasi, &both, 3).unwrap();
        assert!(!report.satisfied);
        assert_eq!(2, report.violations[0].distinct_combinations);
    }

    #[test]
    fn test_adding_sensitive_columns_never_decreases_diversity() {
        let schema = utf8_schema(&["Zip Code", "Medical Condition", "Medication"]);
        let data = RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(StringArray::from(vec!["43210", "43210", "43210", "43210"])),
                Arc::new(StringArray::from(vec!["Flu", "Flu", "Asthma", "Asthma"])),
                Arc::new(StringArray::from(vec![
                    "Oseltamivir",
                    "Zanamivir",
                    "Albuterol",
                    "Albuterol",
                ])),
            ],
        )
        .unwrap();

        let quasi = vec!["Zip Code".to_string()];

        let single = check_l_diversity(&data, &quasi, &["Medical Condition".to_string()], 100)
            .unwrap()
            .violations[0]
            .distinct_combinations;
        let combined = check_l_diversity(
            &data,
            &quasi,
            &["Medical Condition".to_string(), "Medication".to_string()],
            100,
        )
        .unwrap()
        .violations[0]
        .distinct_combinations;

        assert!(combined >= single);
        assert_eq!(2, single);
        assert_eq!(3, combined);
    }
}
