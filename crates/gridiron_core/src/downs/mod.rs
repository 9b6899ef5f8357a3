//! Down/distance state machine.

pub mod resolve;
pub mod state;

pub use resolve::{resolve_play, resolve_play_raw, PlayCategory, PlayOutcome};
pub use state::{DownState, FIRST_DOWN_DISTANCE, MAX_DOWNS};
