use crate::models::{Insight, TextAnalysis};

/// Tally of occurrences in first-encountered order.
struct Frequency<K> {
    counts: Vec<(K, usize)>,
}

impl<K: PartialEq + Copy> Frequency<K> {
    fn new() -> Self {
        Self { counts: Vec::new() }
    }

    fn record(&mut self, key: K) {
        match self.counts.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((key, 1)),
        }
    }

    /// Most frequent key; ties go to whichever key was recorded first.
    fn mode(&self) -> Option<(K, usize)> {
        self.counts.iter().fold(None, |best, &(key, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((key, count)),
        })
    }
}

/// Summarise recurring emotions and themes across analysed entries.
///
/// Emits at most one emotion insight followed by at most one theme insight.
/// Entries are visited in the order given, and emotions/themes within an entry
/// in their reported order; that visiting order breaks frequency ties.
pub fn derive_insights(entries: &[TextAnalysis]) -> Vec<Insight> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut emotions = Frequency::new();
    let mut themes = Frequency::new();
    for entry in entries {
        entry.emotions.iter().for_each(|emotion| emotions.record(*emotion));
        entry.key_themes.iter().for_each(|theme| themes.record(*theme));
    }

    let total = entries.len();
    let mut insights = Vec::with_capacity(2);

    if let Some((emotion, count)) = emotions.mode() {
        insights.push(Insight {
            pattern: format!("Frequent {emotion} emotions"),
            description: format!(
                "You've expressed {emotion} feelings in {count} out of {total} entries"
            ),
            frequency: percentage(count, total),
        });
    }

    if let Some((theme, count)) = themes.mode() {
        insights.push(Insight {
            pattern: format!("Focus on {theme}"),
            description: format!("{theme} appears frequently in your reflections"),
            frequency: percentage(count, total),
        });
    }

    insights
}

pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}
