use super::types::Trace;
use crate::config::SpeedModel;
use crate::geometry::{Finger, FINGER_COUNT};
use serde::Serialize;

/// The conventional five characters per "word" used for WPM.
pub const CHARS_PER_WORD: f32 = 5.0;

/// Read-only aggregate of a completed trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Summary {
    pub chars_typed: usize,
    pub chars_skipped: usize,
    pub total_distance: f32,
    /// Transitions whose hand differs from the previous stroke's.
    pub alternations: usize,
    pub transitions: usize,
    pub alternation_ratio: f32,
    pub duration_secs: f32,
    pub wpm: f32,
    pub finger_counts: [u32; FINGER_COUNT],
}

impl Summary {
    /// Share of keystrokes typed by `finger`, as a percentage.
    pub fn usage_percent(&self, finger: Finger) -> f32 {
        if self.chars_typed == 0 {
            return 0.0;
        }
        100.0 * self.finger_counts[finger.index()] as f32 / self.chars_typed as f32
    }
}

/// Reduce a trace to summary statistics.
///
/// Edge cases are defined, not incidental: a trace with fewer than two
/// events has no transitions and reports an alternation ratio of 0, and a
/// zero-length or zero-duration trace reports a WPM of 0 rather than a
/// division blowing up.
pub fn aggregate(trace: &Trace, model: &SpeedModel) -> Summary {
    let chars_typed = trace.events.len();
    let total_distance: f32 = trace.events.iter().map(|e| e.distance).sum();

    let mut finger_counts = [0u32; FINGER_COUNT];
    for event in &trace.events {
        finger_counts[event.finger.index()] += 1;
    }

    // The first event has no predecessor and forms no transition.
    let transitions = chars_typed.saturating_sub(1);
    let alternations = trace.events.iter().skip(1).filter(|e| e.alternates).count();
    let alternation_ratio = if transitions == 0 {
        0.0
    } else {
        alternations as f32 / transitions as f32
    };

    let duration_secs = if model.units_per_second > 0.0 {
        total_distance / model.units_per_second
    } else {
        0.0
    };

    let minutes = duration_secs / 60.0;
    let wpm = if chars_typed == 0 || minutes <= 0.0 {
        0.0
    } else {
        (chars_typed as f32 / CHARS_PER_WORD) / minutes
    };

    Summary {
        chars_typed,
        chars_skipped: trace.skipped,
        total_distance,
        alternations,
        transitions,
        alternation_ratio,
        duration_secs,
        wpm,
        finger_counts,
    }
}
