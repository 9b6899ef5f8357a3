use serde::{Deserialize, Serialize};

use super::error_codes;
use crate::downs::{resolve_play, DownState, PlayCategory};
use crate::field::{to_coordinate, Direction, YardLine};
use crate::session::{PlaySession, ResolvedPlay, SessionEvent};
use crate::SCHEMA_VERSION;

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn check_schema(version: u8) -> Result<(), String> {
    if version == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA,
            format!("schema_version must be {SCHEMA_VERSION}, got {version}"),
        ))
    }
}

fn parse_label(label: &str) -> Result<YardLine, String> {
    label.parse().map_err(|e| {
        log::warn!("Rejected yard-line label {:?}: {}", label, e);
        err_code(error_codes::INVALID_LABEL, e)
    })
}

fn parse_request<'a, T: Deserialize<'a>>(json: &'a str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| err_code(error_codes::INVALID_REQUEST, e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| err_code(error_codes::SERIALIZATION, e))
}

#[derive(Debug, Deserialize)]
pub struct CoordinateRequest {
    pub schema_version: u8,
    pub label: String,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Debug, Serialize)]
pub struct CoordinateResponse {
    pub schema_version: u8,
    pub label: String,
    pub coordinate: u8,
}

/// `{"schema_version":1,"label":"L23","direction":"ltr"}` → `{"coordinate":23,...}`
pub fn to_coordinate_json(request_json: &str) -> Result<String, String> {
    let request: CoordinateRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let label = parse_label(&request.label)?;
    let coordinate = to_coordinate(label, request.direction);

    to_json(&CoordinateResponse {
        schema_version: SCHEMA_VERSION,
        label: label.to_string(),
        coordinate: coordinate.value(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    pub schema_version: u8,
    pub start: String,
    pub end: String,
    pub down: u8,
    pub distance: i32,
    #[serde(default)]
    pub direction: Direction,
}

#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub schema_version: u8,
    pub category: PlayCategory,
    pub yards_gained: i32,
    pub next_down: u8,
    pub next_distance: i32,
    pub spot_label: YardLine,
    pub turnover_on_downs: bool,
    pub banner: String,
}

/// Resolve one play given as two labels and the current down and distance.
pub fn resolve_play_json(request_json: &str) -> Result<String, String> {
    let request: ResolveRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let start = parse_label(&request.start)?;
    let end = parse_label(&request.end)?;
    let outcome = resolve_play(
        to_coordinate(start, request.direction),
        to_coordinate(end, request.direction),
        DownState::new(request.down, request.distance),
    );

    to_json(&ResolveResponse {
        schema_version: SCHEMA_VERSION,
        category: outcome.category,
        yards_gained: outcome.yards_gained,
        next_down: outcome.next.down,
        next_distance: outcome.next.distance,
        spot_label: outcome.spot_label(request.direction),
        turnover_on_downs: outcome.turnover_on_downs,
        banner: outcome.banner(request.direction),
    })
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub schema_version: u8,
    /// Snapshot from the previous response; omitted on the first call.
    #[serde(default)]
    pub session: Option<PlaySession>,
    pub event: SessionEvent,
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub schema_version: u8,
    pub session: PlaySession,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play: Option<ResolvedPlay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

/// Apply one operator event to a JSON-held session snapshot.
pub fn apply_event_json(request_json: &str) -> Result<String, String> {
    let request: EventRequest = parse_request(request_json)?;
    check_schema(request.schema_version)?;

    let session = request.session.unwrap_or_default();
    session
        .validate()
        .map_err(|e| err_code(error_codes::INVALID_SESSION, e))?;
    let transition = session
        .apply(request.event)
        .map_err(|e| err_code(error_codes::INVALID_EVENT, e))?;

    let banner = transition.resolved.as_ref().map(ResolvedPlay::banner);
    to_json(&EventResponse {
        schema_version: SCHEMA_VERSION,
        session: transition.session,
        play: transition.resolved,
        banner,
    })
}
