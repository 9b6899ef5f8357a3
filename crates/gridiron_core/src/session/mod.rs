//! Play session
//!
//! A [`PlaySession`] is an immutable snapshot of everything the operator has
//! set up: direction, down and distance, the pending yard-line selections,
//! the last spot and the play log. Operator input is an [`SessionEvent`];
//! [`PlaySession::apply`] returns the next snapshot and leaves `self` alone,
//! so the caller decides when to swap it in.
//!
//! ## Play Cycle
//!
//! ```text
//! AwaitingStart ──tap──▶ AwaitingEnd ──tap / No Gain──▶ ReadyToResolve
//!       ▲                     ▲                              │
//!       │                     └────────── New Play ──────────┤
//!       └──────────────────── resolve ───────────────────────┘
//! ```

pub mod selection;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use selection::Selection;

use crate::config::TrackerConfig;
use crate::downs::{resolve_play, DownState, PlayOutcome};
use crate::error::SessionError;
use crate::field::{to_coordinate, Direction, YardLine};
use crate::play_log::{PlayLog, PlayRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Operator tapped a yard line.
    Select(YardLine),
    /// Ball spotted where it started.
    NoGain,
    /// Carry the last spot forward as the next start without resolving.
    NewPlay,
    SetDirection(Direction),
    /// Back to 1st & 10, keeping the log.
    ResetDowns,
    /// Clear down state, selections and the log.
    ResetGame,
}

/// A play resolved by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPlay {
    pub start: YardLine,
    pub end: YardLine,
    pub direction: Direction,
    pub outcome: PlayOutcome,
    pub spot_label: YardLine,
}

impl ResolvedPlay {
    pub fn banner(&self) -> String {
        self.outcome.banner(self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub session: PlaySession,
    pub resolved: Option<ResolvedPlay>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaySession {
    direction: Direction,
    downs: DownState,
    selection: Selection,
    last_spot: Option<YardLine>,
    log: PlayLog,
    #[serde(default)]
    config: TrackerConfig,
}

impl Default for PlaySession {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl PlaySession {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            direction: config.default_direction,
            downs: DownState::default(),
            selection: Selection::default(),
            last_spot: None,
            log: PlayLog::new(),
            config,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn downs(&self) -> DownState {
        self.downs
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn last_spot(&self) -> Option<YardLine> {
        self.last_spot
    }

    pub fn log(&self) -> &PlayLog {
        &self.log
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Check a snapshot that came from outside, e.g. deserialized JSON.
    pub fn validate(&self) -> Result<(), SessionError> {
        if !self.downs.is_valid() {
            return Err(SessionError::InvalidDownState {
                down: self.downs.down,
                distance: self.downs.distance,
            });
        }
        Ok(())
    }

    /// Apply an event, stamping any logged play with the current time.
    pub fn apply(&self, event: SessionEvent) -> Result<Transition, SessionError> {
        self.apply_at(event, Utc::now())
    }

    pub fn apply_at(
        &self,
        event: SessionEvent,
        at: DateTime<Utc>,
    ) -> Result<Transition, SessionError> {
        let mut next = self.clone();

        let resolved = match event {
            SessionEvent::Select(label) => {
                next.selection = self.selection.select(label)?;
                next.resolve_pending(at)
            }
            SessionEvent::NoGain => {
                let start = match self.selection {
                    Selection::AwaitingEnd { start } => start,
                    Selection::AwaitingStart => return Err(SessionError::NoStartSelected),
                    Selection::ReadyToResolve { start, end } => {
                        return Err(SessionError::PlayPending {
                            start: start.to_string(),
                            end: end.to_string(),
                        })
                    }
                };
                next.selection = Selection::ReadyToResolve { start, end: start };
                next.resolve_pending(at)
            }
            SessionEvent::NewPlay => {
                if !self.config.carry_forward_new_play {
                    return Err(SessionError::NewPlayDisabled);
                }
                let spot = self.last_spot.ok_or(SessionError::NoPreviousSpot)?;
                next.selection = Selection::AwaitingEnd { start: spot };
                None
            }
            SessionEvent::SetDirection(direction) => {
                next.direction = direction;
                None
            }
            SessionEvent::ResetDowns => {
                log::info!("Down state reset to {}", DownState::default());
                next.downs = DownState::default();
                next.selection = Selection::AwaitingStart;
                None
            }
            SessionEvent::ResetGame => {
                log::info!("Game reset, clearing {} logged plays", self.log.len());
                next = PlaySession {
                    direction: self.direction,
                    ..PlaySession::new(self.config.clone())
                };
                None
            }
        };

        Ok(Transition { session: next, resolved })
    }

    fn resolve_pending(&mut self, at: DateTime<Utc>) -> Option<ResolvedPlay> {
        let Selection::ReadyToResolve { start, end } = self.selection else {
            return None;
        };

        let outcome = resolve_play(
            to_coordinate(start, self.direction),
            to_coordinate(end, self.direction),
            self.downs,
        );
        let spot_label = outcome.spot_label(self.direction);

        log::debug!(
            "Resolved {} -> {} ({}) on {}: {:?} {:+}",
            start,
            end,
            self.direction,
            self.downs,
            outcome.category,
            outcome.yards_gained
        );

        self.downs = outcome.next;
        if self.config.log_plays {
            self.log.append(PlayRecord {
                timestamp: at,
                start_label: start,
                end_label: end,
                yards_gained: outcome.yards_gained,
                down: outcome.next.down,
                distance_to_go: outcome.next.distance,
                spot_label,
            });
        }
        self.selection = Selection::AwaitingStart;
        self.last_spot = Some(end);

        Some(ResolvedPlay { start, end, direction: self.direction, outcome, spot_label })
    }
}
