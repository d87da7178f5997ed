use crate::index::Record;
use serde::Serialize;
use std::collections::BTreeMap;

/// Row counts per label of a dataset table.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSummary {
    pub total: usize,
    pub labels: BTreeMap<String, usize>,
}

impl LabelSummary {
    pub fn from_records(records: &[Record]) -> Self {
        let mut labels: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *labels.entry(record.label.clone()).or_insert(0) += 1;
        }

        Self {
            total: records.len(),
            labels,
        }
    }

    pub fn largest(&self) -> usize {
        self.labels.values().copied().max().unwrap_or(0)
    }
}
