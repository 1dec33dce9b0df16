use super::model::{CandidateTable, NumericField, YesNo};

/// Headline metrics over the filtered subset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub avg_it_experience: f64,
    pub avg_troubleshooting: f64,
    pub actively_looking: usize,
}

impl Summary {
    /// Compute metrics for the rows at `indices`.
    ///
    /// Means ignore missing values and are `0.0` when nothing is left to
    /// average, so the metric row never shows NaN.
    pub fn compute(table: &CandidateTable, indices: &[usize]) -> Self {
        let rows = || indices.iter().filter_map(|&i| table.records.get(i));

        Summary {
            count: indices.len(),
            avg_it_experience: mean(
                rows().filter_map(|r| r.value(NumericField::TotalItExperience)),
            ),
            avg_troubleshooting: mean(
                rows().filter_map(|r| r.value(NumericField::TroubleshootingExperience)),
            ),
            actively_looking: rows()
                .filter(|r| r.actively_looking == YesNo::Yes)
                .count(),
        }
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
