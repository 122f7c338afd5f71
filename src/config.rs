use clap::Args;
use serde::{Deserialize, Serialize};

/// Default finger travel speed, in grid units per second.
pub const DEFAULT_UNITS_PER_SECOND: f32 = 4.0;

/// Converts simulated travel distance into elapsed time. Every tunable is a
/// named flag; nothing is hardcoded in the engine.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedModel {
    /// Finger speed in grid units (one key width) per second.
    #[arg(long, default_value_t = DEFAULT_UNITS_PER_SECOND)]
    pub units_per_second: f32,
}

impl Default for SpeedModel {
    fn default() -> Self {
        Self {
            units_per_second: DEFAULT_UNITS_PER_SECOND,
        }
    }
}
