use std::collections::VecDeque;

use crate::models::Reading;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Trailing window of the most recent readings; the oldest is evicted first.
#[derive(Debug, Clone)]
pub struct ReadingHistory {
    readings: VecDeque<Reading>,
    limit: usize,
}

impl ReadingHistory {
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            readings: VecDeque::with_capacity(limit),
            limit,
        }
    }

    pub fn push(&mut self, reading: Reading) {
        while self.readings.len() >= self.limit {
            self.readings.pop_front();
        }
        self.readings.push_back(reading);
    }

    pub fn latest(&self) -> Option<&Reading> {
        self.readings.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.readings.iter()
    }

    /// Oldest first.
    pub fn to_vec(&self) -> Vec<Reading> {
        self.readings.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.readings.clear();
    }
}

impl Default for ReadingHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Emotion, Source};
    use chrono::{Duration, TimeZone, Utc};

    fn reading(seq: i64) -> Reading {
        Reading {
            emotion: Emotion::Neutral,
            confidence: 0.75,
            source: Source::Camera,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seq),
        }
    }

    #[test]
    fn keeps_only_the_last_ten() {
        let mut history = ReadingHistory::default();
        for seq in 0..25 {
            history.push(reading(seq));
        }

        assert_eq!(history.len(), 10);
        let seconds: Vec<i64> = history
            .iter()
            .map(|r| r.timestamp.timestamp() - reading(0).timestamp.timestamp())
            .collect();
        assert_eq!(seconds, (15..25).collect::<Vec<_>>());
        assert_eq!(history.latest(), Some(&reading(24)));
    }

    #[test]
    fn zero_limit_is_raised_to_one() {
        let mut history = ReadingHistory::new(0);
        history.push(reading(1));
        history.push(reading(2));
        assert_eq!(history.limit(), 1);
        assert_eq!(history.to_vec(), vec![reading(2)]);
    }

    #[test]
    fn clear_empties_the_window() {
        let mut history = ReadingHistory::new(3);
        history.push(reading(1));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
