use crate::models::{DistributionEntry, DistributionKey, SignalRecord};

use super::patterns::percentage;

/// Bucket records by emotion or source, largest share first.
///
/// Buckets with equal shares keep the order in which they were first seen.
pub fn summarize_distribution<R: SignalRecord>(
    records: &[R],
    key: DistributionKey,
) -> Vec<DistributionEntry> {
    let mut buckets: Vec<(&'static str, usize)> = Vec::new();

    for record in records {
        let label = match key {
            DistributionKey::Emotion => record.emotion().as_str(),
            DistributionKey::Source => record.source().as_str(),
        };
        match buckets.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, count)) => *count += 1,
            None => buckets.push((label, 1)),
        }
    }

    let total = records.len();
    let mut summary: Vec<DistributionEntry> = buckets
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label: label.to_string(),
            count,
            percentage: percentage(count, total),
        })
        .collect();
    summary.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    summary
}
