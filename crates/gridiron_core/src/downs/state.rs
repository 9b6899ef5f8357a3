use std::fmt;

use serde::{Deserialize, Serialize};

/// Yards needed for a fresh set of downs.
pub const FIRST_DOWN_DISTANCE: i32 = 10;

/// Downs per series before the ball rolls over.
pub const MAX_DOWNS: u8 = 4;

/// Current down and yards to go.
///
/// Replaced as a whole after every resolved play; never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownState {
    pub down: u8,
    pub distance: i32,
}

impl Default for DownState {
    fn default() -> Self {
        Self::first_and_ten()
    }
}

impl DownState {
    pub fn new(down: u8, distance: i32) -> Self {
        Self { down, distance }
    }

    pub fn first_and_ten() -> Self {
        Self { down: 1, distance: FIRST_DOWN_DISTANCE }
    }

    /// Down within `1..=4` and a positive distance to go.
    pub fn is_valid(&self) -> bool {
        (1..=MAX_DOWNS).contains(&self.down) && self.distance > 0
    }
}

fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl fmt::Display for DownState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} & {}", ordinal(self.down), self.distance)
    }
}
