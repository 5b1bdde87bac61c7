use crate::grouping::value_at;
use arrow::array::StringArray;
use std::collections::{HashMap, HashSet};

/// Relative frequency of each distinct value within a set of rows.
///
/// Fractions sum to 1 for any non-empty row set.
pub type Distribution = HashMap<Option<String>, f64>;

pub fn value_distribution(column: &StringArray, rows: &[usize]) -> Distribution {
    let mut counts: HashMap<Option<String>, usize> = HashMap::new();
    for &row in rows {
        *counts.entry(value_at(column, row)).or_insert(0) += 1;
    }

    let total = rows.len() as f64;
    counts
        .into_iter()
        .map(|(value, count)| (value, count as f64 / total))
        .collect()
}

/// Total variation distance: the sum over all distinct values of the absolute
/// frequency difference. A value absent from one side counts as frequency 0
/// there, so the result lies in [0, 2].
pub fn total_variation_distance(local: &Distribution, global: &Distribution) -> f64 {
    let values: HashSet<&Option<String>> = local.keys().chain(global.keys()).collect();

    values
        .into_iter()
        .map(|value| {
            let local_frequency = local.get(value).copied().unwrap_or(0.0);
            let global_frequency = global.get(value).copied().unwrap_or(0.0);
            (local_frequency - global_frequency).abs()
        })
        .sum()
}
