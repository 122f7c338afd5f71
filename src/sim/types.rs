use crate::geometry::{Finger, Hand};
use serde::Serialize;

/// One simulated keystroke, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovementEvent {
    pub ch: char,
    pub finger: Finger,
    pub hand: Hand,
    /// Distance the finger traveled from wherever the previous strokes
    /// left it. Sequential: events cannot be reordered.
    pub distance: f32,
    /// True when this stroke's hand differs from the previous stroke's.
    /// The first event of a trace counts as alternating.
    pub alternates: bool,
}

/// The ordered movement record of one simulation run. `skipped` counts
/// input characters with no key in the layout; they emit no event but stay
/// observable so downstream totals are never silently short.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trace {
    pub events: Vec<MovementEvent>,
    pub skipped: usize,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
