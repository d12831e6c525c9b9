use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, CoreResult};
use crate::insights::derive_insights;
use crate::models::{Insight, JournalEntry, TextAnalysis};

use super::analyzer::analyze_text;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

struct JournalState {
    /// Most recent first.
    entries: Vec<JournalEntry>,
    selected: Option<String>,
}

/// In-memory journal for one user session.
#[derive(Clone)]
pub struct JournalStore {
    state: Arc<Mutex<JournalState>>,
    pending: Arc<AtomicUsize>,
    analysis_delay: Duration,
    clock: Arc<dyn Clock>,
}

/// Keeps the analyzing counter balanced even if the save future is dropped.
struct PendingAnalysis(Arc<AtomicUsize>);

impl PendingAnalysis {
    fn begin(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for PendingAnalysis {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl JournalStore {
    pub fn new(analysis_delay: Duration) -> Self {
        Self::with_clock(analysis_delay, Arc::new(SystemClock))
    }

    pub fn with_clock(analysis_delay: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(JournalState {
                entries: Vec::new(),
                selected: None,
            })),
            pending: Arc::new(AtomicUsize::new(0)),
            analysis_delay,
            clock,
        }
    }

    /// True while at least one saved entry is waiting on analysis. Advisory only.
    pub fn is_analyzing(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    /// Analyse `content` after the configured delay and prepend it to the journal.
    pub async fn save_entry(&self, content: &str) -> CoreResult<JournalEntry> {
        if content.trim().is_empty() {
            return Err(CoreError::BlankEntry);
        }

        let _pending = PendingAnalysis::begin(&self.pending);
        log_debug!("Analyzing journal entry ({} chars)", content.len());
        tokio::time::sleep(self.analysis_delay).await;

        let analysis = analyze_text(content);
        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            content: content.to_string(),
            timestamp: self.clock.now(),
            analysis,
        };

        self.state.lock().await.entries.insert(0, entry.clone());
        log_info!(
            "Journal entry {} saved: {:?}, {} emotion(s), {} words",
            entry.id,
            entry.analysis.sentiment,
            entry.analysis.emotions.len(),
            entry.analysis.word_count
        );

        Ok(entry)
    }

    pub async fn entries(&self) -> Vec<JournalEntry> {
        self.state.lock().await.entries.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn get(&self, id: &str) -> Option<JournalEntry> {
        let state = self.state.lock().await;
        state.entries.iter().find(|entry| entry.id == id).cloned()
    }

    /// Remove an entry, clearing the selection if it pointed at it.
    pub async fn delete_entry(&self, id: &str) -> bool {
        let mut state = self.state.lock().await;
        let before = state.entries.len();
        state.entries.retain(|entry| entry.id != id);
        let removed = state.entries.len() != before;

        if removed {
            if state.selected.as_deref() == Some(id) {
                state.selected = None;
            }
            log_info!("Journal entry {} deleted", id);
        }
        removed
    }

    pub async fn select(&self, id: &str) -> bool {
        let mut state = self.state.lock().await;
        if state.entries.iter().any(|entry| entry.id == id) {
            state.selected = Some(id.to_string());
            true
        } else {
            false
        }
    }

    pub async fn clear_selection(&self) {
        self.state.lock().await.selected = None;
    }

    pub async fn selected(&self) -> Option<JournalEntry> {
        let state = self.state.lock().await;
        let id = state.selected.as_deref()?;
        state.entries.iter().find(|entry| entry.id == id).cloned()
    }

    pub async fn insights(&self) -> Vec<Insight> {
        let state = self.state.lock().await;
        let analyses: Vec<TextAnalysis> = state
            .entries
            .iter()
            .map(|entry| entry.analysis.clone())
            .collect();
        derive_insights(&analyses)
    }
}
