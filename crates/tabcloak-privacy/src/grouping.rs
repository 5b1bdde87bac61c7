use crate::error::PrivacyError;
use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;
use std::collections::HashMap;
use std::fmt;
use tabcloak_core::data::utf8_column;

/// The tuple of quasi-identifier values shared by every record in a group.
///
/// A null is a valid groupable value, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey(pub Vec<Option<String>>);

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<&str> = self
            .0
            .iter()
            .map(|value| value.as_deref().unwrap_or("null"))
            .collect();
        write!(f, "({})", rendered.join(", "))
    }
}

/// One quasi-identifier group: the key and the dataset row indices sharing it.
#[derive(Debug, Clone)]
pub struct Group {
    pub key: GroupKey,
    pub rows: Vec<usize>,
}

pub(crate) fn value_at(column: &StringArray, row: usize) -> Option<String> {
    if column.is_null(row) {
        None
    } else {
        Some(column.value(row).to_string())
    }
}

/// Partitions the dataset rows by their quasi-identifier values.
///
/// Groups come back in first-appearance order. Membership is derived from the
/// current column values on every call; transforms change the very columns
/// used for grouping, so nothing here is cached. An empty column list yields
/// a single group containing every row.
pub fn group_by(data: &RecordBatch, columns: &[String]) -> Result<Vec<Group>, PrivacyError> {
    let arrays = columns
        .iter()
        .map(|name| utf8_column(data, name))
        .collect::<Result<Vec<&StringArray>, _>>()?;

    let mut slots: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<Group> = vec![];

    for row in 0..data.num_rows() {
        let key = GroupKey(arrays.iter().map(|array| value_at(array, row)).collect());

        match slots.get(&key) {
            Some(&slot) => groups[slot].rows.push(row),
            None => {
                slots.insert(key.clone(), groups.len());
                groups.push(Group {
                    key,
                    rows: vec![row],
                });
            }
        }
    }

    Ok(groups)
}
