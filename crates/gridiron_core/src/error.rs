use thiserror::Error;

/// Malformed yard-line label.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidLabelError {
    #[error("Empty yard-line label")]
    Empty,

    #[error("Unknown side marker in label: {label}")]
    UnknownSide { label: String },

    #[error("Yard count is not a valid number in label: {label}")]
    BadMagnitude { label: String },

    #[error("Yard line out of range in label {label}: {yards} (expected 1..=49)")]
    OutOfRange { label: String, yards: u32 },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Field coordinate out of range: {0} (expected 0..=100)")]
pub struct CoordinateOutOfRange(pub u8);

/// Operator event that does not fit the current selection state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("No start line selected")]
    NoStartSelected,

    #[error("No previous play to carry the spot forward from")]
    NoPreviousSpot,

    #[error("New Play carry-forward is disabled")]
    NewPlayDisabled,

    #[error("Start and end already selected ({start} -> {end}); resolve or reset first")]
    PlayPending { start: String, end: String },

    #[error("Invalid down state: down {down}, distance {distance} (expected down 1..=4, distance > 0)")]
    InvalidDownState { down: u8, distance: i32 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Error, Debug)]
pub enum LogExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error(transparent)]
    InvalidLabel(#[from] InvalidLabelError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Export(#[from] LogExportError),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
