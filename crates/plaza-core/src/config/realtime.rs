//! Real-time event feed configuration.

use serde::{Deserialize, Serialize};

/// Settings for the in-process event broadcast hub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealtimeConfig {
    /// Buffer capacity of the broadcast channel. Slow subscribers that
    /// lag behind by more than this many events miss the oldest ones.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_channel_capacity() -> usize {
    256
}
