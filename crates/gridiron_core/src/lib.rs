//! # gridiron_core - Yard-Line Play Tracking for American Football
//!
//! An operator marks where a play started and ended by tapping yard-line
//! labels; this crate turns those labels into field coordinates, works out
//! yards gained and the next down and distance, and keeps a log of the drive.
//!
//! ## Features
//! - Checked yard-line labels (`LG`, `L1`..`L49`, `50`, `R49`..`R1`, `RG`)
//! - Direction-aware coordinates in `0..=100`
//! - Pure down/distance resolution with 4th-down rollover
//! - Immutable session snapshots driven by operator events
//! - JSON API for UI front-ends

pub mod api;
pub mod config;
pub mod downs;
pub mod error;
pub mod field;
pub mod play_log;
pub mod session;

pub use api::{apply_event_json, resolve_play_json, to_coordinate_json};
pub use config::TrackerConfig;
pub use downs::{resolve_play, resolve_play_raw, DownState, PlayCategory, PlayOutcome};
pub use error::{InvalidLabelError, Result, SessionError, TrackerError};
pub use field::{parse_coordinate, to_coordinate, Direction, FieldCoordinate, Side, YardLine};
pub use play_log::{PlayLog, PlayRecord};
pub use session::{PlaySession, ResolvedPlay, Selection, SessionEvent, Transition};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
