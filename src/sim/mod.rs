pub mod engine;
pub mod metrics;
pub mod tracker;
pub mod types;

pub use self::engine::simulate;
pub use self::metrics::{aggregate, Summary, CHARS_PER_WORD};
pub use self::tracker::FingerState;
pub use self::types::{MovementEvent, Trace};
