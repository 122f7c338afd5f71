use super::tracker::FingerState;
use super::types::{MovementEvent, Trace};
use crate::layouts::Layout;
use tracing::trace;

/// Walk `text` one character at a time and record every finger movement.
///
/// Skip policy: a character with no key in the layout emits no event and is
/// tallied in `Trace::skipped`. Processing is strictly sequential — each
/// distance depends on where the previous strokes left the finger — but
/// independent calls share no state and may run concurrently.
pub fn simulate(layout: &Layout, text: &str) -> Trace {
    let mut fingers = FingerState::at_home(layout);
    let mut events = Vec::with_capacity(text.len());
    let mut skipped = 0usize;
    let mut prev_hand = None;

    for ch in text.chars() {
        let Some(key) = layout.lookup(ch) else {
            trace!(ch = ?ch, "character not in layout, skipping");
            skipped += 1;
            continue;
        };

        let distance = fingers.advance(key.finger, key.pos);
        let hand = key.finger.hand();
        let alternates = prev_hand != Some(hand);
        prev_hand = Some(hand);

        events.push(MovementEvent {
            ch,
            finger: key.finger,
            hand,
            distance,
            alternates,
        });
    }

    Trace { events, skipped }
}
