use tokio::sync::Mutex;

use crate::clock::Clock;
use crate::models::Reading;

use super::classifier::{EmotionClassifier, SensorInput};
use super::controller::{SamplingState, SamplingStatus};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_warn};

/// Take one reading and append it to the session history.
///
/// Readings that land after the session left the active state are dropped, so
/// a stop racing with an in-flight sample never leaks a reading.
pub(super) async fn capture_reading(
    state: &Mutex<SamplingState>,
    classifier: &dyn EmotionClassifier,
    clock: &dyn Clock,
    input: &SensorInput,
) {
    let classification = classifier.classify(input);

    let confidence = if classification.confidence.is_finite() {
        classification.confidence.clamp(0.0, 1.0)
    } else {
        log_warn!(
            "classifier returned non-finite confidence for {}; recording 0",
            input.source()
        );
        0.0
    };

    let reading = Reading {
        emotion: classification.emotion,
        confidence,
        source: input.source(),
        timestamp: clock.now(),
    };

    let mut guard = state.lock().await;
    if guard.status != SamplingStatus::Active {
        log_debug!("discarding {} reading taken after stop", reading.source);
        return;
    }

    log_debug!(
        "{} reading: {} ({:.0}%)",
        reading.source,
        reading.emotion,
        reading.confidence * 100.0
    );
    guard.history.push(reading.clone());
    guard.unseen += 1;
    guard.current = Some(reading);
}
