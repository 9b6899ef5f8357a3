//! String-in/string-out entry points for UI collaborators.
//!
//! Errors are returned as `CODE: message` strings.

pub mod json_api;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNSUPPORTED_SCHEMA: &str = "UNSUPPORTED_SCHEMA";
    pub const INVALID_LABEL: &str = "INVALID_LABEL";
    pub const INVALID_EVENT: &str = "INVALID_EVENT";
    pub const INVALID_SESSION: &str = "INVALID_SESSION";
    pub const SERIALIZATION: &str = "SERIALIZATION";
}

pub use json_api::{
    apply_event_json, resolve_play_json, to_coordinate_json, CoordinateRequest,
    CoordinateResponse, EventRequest, EventResponse, ResolveRequest, ResolveResponse,
};
