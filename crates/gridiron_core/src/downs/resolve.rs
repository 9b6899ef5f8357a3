//! Play resolution
//!
//! ## Evaluation Order (Fixed)
//! 1. First down (gain reaches the line to gain)
//! 2. No gain (ball spotted where it started)
//! 3. Normal (anything else, including losses)
//!
//! A failed 4th down rolls the series over to 1st & 10. Possession and
//! direction are left alone; that is up to the operator.

use serde::{Deserialize, Serialize};

use super::state::{DownState, FIRST_DOWN_DISTANCE, MAX_DOWNS};
use crate::field::{Direction, FieldCoordinate, YardLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayCategory {
    FirstDown,
    NoGain,
    Normal,
}

/// Result of one resolved play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub category: PlayCategory,
    pub yards_gained: i32,
    pub next: DownState,
    /// Where the ball ends up (the end coordinate of the play).
    pub spot: FieldCoordinate,
    /// The series ran out of downs and was reset.
    pub turnover_on_downs: bool,
}

impl PlayOutcome {
    pub fn is_first_down(&self) -> bool {
        self.category == PlayCategory::FirstDown
    }

    pub fn is_no_gain(&self) -> bool {
        self.yards_gained == 0
    }

    pub fn spot_label(&self, direction: Direction) -> YardLine {
        YardLine::from_coordinate(self.spot, direction)
    }

    /// One-line result banner, e.g. `FIRST DOWN! +12 yards → 1st & 10 at L32`.
    pub fn banner(&self, direction: Direction) -> String {
        let headline = match self.category {
            PlayCategory::FirstDown => {
                format!("FIRST DOWN! {:+} {}", self.yards_gained, yards_word(self.yards_gained))
            }
            PlayCategory::NoGain => "No gain".to_string(),
            PlayCategory::Normal if self.yards_gained < 0 => {
                let lost = self.yards_gained.unsigned_abs();
                format!("Loss of {} {}", lost, yards_word(self.yards_gained))
            }
            PlayCategory::Normal => {
                format!("Gain of {} {}", self.yards_gained, yards_word(self.yards_gained))
            }
        };

        let mut banner =
            format!("{} → {} at {}", headline, self.next, self.spot_label(direction));
        if self.turnover_on_downs {
            banner.push_str(" (turnover on downs)");
        }
        banner
    }
}

fn yards_word(yards: i32) -> &'static str {
    if yards.unsigned_abs() == 1 {
        "yard"
    } else {
        "yards"
    }
}

/// Resolve a play run from `start` to `end` in the situation `current`.
pub fn resolve_play(
    start: FieldCoordinate,
    end: FieldCoordinate,
    current: DownState,
) -> PlayOutcome {
    resolve_yards(start.yards_to(end), end, current)
}

/// Integer form of [`resolve_play`]; any inputs are accepted.
///
/// The spot is the end position clamped onto the field.
pub fn resolve_play_raw(start: i32, end: i32, down: u8, distance: i32) -> PlayOutcome {
    let yards_gained = end.saturating_sub(start);
    resolve_yards(yards_gained, FieldCoordinate::clamped(end), DownState::new(down, distance))
}

fn resolve_yards(yards_gained: i32, spot: FieldCoordinate, current: DownState) -> PlayOutcome {
    let first_down = yards_gained >= current.distance;
    let no_gain = yards_gained == 0;

    let category = if first_down {
        PlayCategory::FirstDown
    } else if no_gain {
        PlayCategory::NoGain
    } else {
        PlayCategory::Normal
    };

    let mut next = if first_down {
        DownState::new(1, FIRST_DOWN_DISTANCE)
    } else {
        DownState::new(
            current.down.saturating_add(1),
            current.distance.saturating_sub(yards_gained),
        )
    };

    let turnover_on_downs = next.down > MAX_DOWNS;
    if turnover_on_downs {
        log::info!("Turnover on downs after {} (gained {})", current, yards_gained);
        next = DownState::first_and_ten();
    }

    PlayOutcome { category, yards_gained, next, spot, turnover_on_downs }
}
