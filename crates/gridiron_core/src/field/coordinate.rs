//! Absolute field coordinates and offensive direction
//!
//! ## Coordinate System
//!
//! **Field coordinate** (what the down/distance logic works in):
//! - 0 = goal line the offense is defending, 100 = goal line it attacks
//! - independent of where the labels are painted
//!
//! **Raw coordinate** (what a label means on its own):
//! - 0 = left goal line (`LG`), 50 = midfield, 100 = right goal line (`RG`)
//!
//! With the offense moving left to right the two systems coincide; moving
//! right to left the field coordinate is the raw coordinate mirrored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::yard_line::YardLine;
use crate::error::{CoordinateOutOfRange, InvalidLabelError};

/// Length of the field between the goal lines, in yards.
pub const FIELD_LENGTH: u8 = 100;

/// Raw coordinate of the 50 yard line.
pub const MIDFIELD: u8 = 50;

/// Absolute position on the field, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FieldCoordinate(u8);

impl FieldCoordinate {
    pub const MIN: FieldCoordinate = FieldCoordinate(0);
    pub const MIDFIELD: FieldCoordinate = FieldCoordinate(MIDFIELD);
    pub const MAX: FieldCoordinate = FieldCoordinate(FIELD_LENGTH);

    pub fn new(value: u8) -> Result<Self, CoordinateOutOfRange> {
        if value <= FIELD_LENGTH {
            Ok(Self(value))
        } else {
            Err(CoordinateOutOfRange(value))
        }
    }

    /// Clamp an arbitrary integer onto the field.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(0, FIELD_LENGTH as i32) as u8)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Same spot seen from the other end of the field.
    #[inline]
    pub fn mirrored(self) -> Self {
        Self(FIELD_LENGTH - self.0)
    }

    /// Signed yards from `self` to `other` (negative when `other` is behind).
    #[inline]
    pub fn yards_to(self, other: FieldCoordinate) -> i32 {
        other.0 as i32 - self.0 as i32
    }
}

impl TryFrom<u8> for FieldCoordinate {
    type Error = CoordinateOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldCoordinate> for u8 {
    fn from(coord: FieldCoordinate) -> u8 {
        coord.0
    }
}

impl fmt::Display for FieldCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which way the offense is moving across the painted labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "ltr")]
    LeftToRight,
    #[serde(rename = "rtl")]
    RightToLeft,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }

    /// Convert between raw and field coordinates.
    ///
    /// The mapping is an involution, so the same call converts both ways.
    #[inline]
    pub fn orient(self, coord: FieldCoordinate) -> FieldCoordinate {
        match self {
            Direction::LeftToRight => coord,
            Direction::RightToLeft => coord.mirrored(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" | "left-to-right" | "lefttoright" => Ok(Direction::LeftToRight),
            "rtl" | "right-to-left" | "righttoleft" => Ok(Direction::RightToLeft),
            other => Err(format!("unknown direction '{other}' (expected ltr or rtl)")),
        }
    }
}

/// Translate a yard-line label into an absolute field coordinate.
pub fn to_coordinate(label: YardLine, direction: Direction) -> FieldCoordinate {
    direction.orient(label.raw_coordinate())
}

/// Parse a label string and translate it in one step.
pub fn parse_coordinate(
    label: &str,
    direction: Direction,
) -> Result<FieldCoordinate, InvalidLabelError> {
    let yard_line: YardLine = label.parse()?;
    Ok(to_coordinate(yard_line, direction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coord(label: &str, direction: Direction) -> u8 {
        parse_coordinate(label, direction).unwrap().value()
    }

    fn yard_line_strategy() -> impl Strategy<Value = YardLine> {
        prop::sample::select(YardLine::all().collect::<Vec<_>>())
    }

    #[test]
    fn test_left_to_right_landmarks() {
        let ltr = Direction::LeftToRight;
        assert_eq!(coord("LG", ltr), 0);
        assert_eq!(coord("L0", ltr), 0);
        assert_eq!(coord("50", ltr), 50);
        assert_eq!(coord("L50", ltr), 50);
        assert_eq!(coord("RG", ltr), 100);
        assert_eq!(coord("R0", ltr), 100);
        assert_eq!(coord("L23", ltr), 23);
        assert_eq!(coord("R5", ltr), 95);
    }

    #[test]
    fn test_right_to_left_landmarks() {
        let rtl = Direction::RightToLeft;
        assert_eq!(coord("LG", rtl), 100);
        assert_eq!(coord("RG", rtl), 0);
        assert_eq!(coord("50", rtl), 50);
        assert_eq!(coord("L23", rtl), 77);
        assert_eq!(coord("R5", rtl), 5);
    }

    #[test]
    fn test_invalid_label_rejected() {
        let err = parse_coordinate("Q12", Direction::LeftToRight).unwrap_err();
        assert!(matches!(err, InvalidLabelError::UnknownSide { .. }));
    }

    #[test]
    fn test_coordinate_bounds() {
        assert!(FieldCoordinate::new(100).is_ok());
        assert_eq!(FieldCoordinate::new(101), Err(CoordinateOutOfRange(101)));
        assert_eq!(FieldCoordinate::clamped(-7), FieldCoordinate::MIN);
        assert_eq!(FieldCoordinate::clamped(140), FieldCoordinate::MAX);
    }

    #[test]
    fn test_coordinate_serde_rejects_out_of_range() {
        let ok: FieldCoordinate = serde_json::from_str("42").unwrap();
        assert_eq!(ok.value(), 42);
        assert!(serde_json::from_str::<FieldCoordinate>("101").is_err());
    }

    #[test]
    fn test_direction_parse_and_flip() {
        assert_eq!("RTL".parse::<Direction>().unwrap(), Direction::RightToLeft);
        assert_eq!("left-to-right".parse::<Direction>().unwrap(), Direction::LeftToRight);
        assert!("up".parse::<Direction>().is_err());
        assert_eq!(Direction::LeftToRight.flip().flip(), Direction::LeftToRight);
        assert_eq!(serde_json::to_string(&Direction::RightToLeft).unwrap(), "\"rtl\"");
    }

    proptest! {
        #[test]
        fn prop_direction_flip_mirrors(label in yard_line_strategy()) {
            let ltr = to_coordinate(label, Direction::LeftToRight).value();
            let rtl = to_coordinate(label, Direction::RightToLeft).value();
            prop_assert_eq!(rtl, FIELD_LENGTH - ltr);
        }

        #[test]
        fn prop_translation_is_deterministic(label in yard_line_strategy(), flip in any::<bool>()) {
            let direction = if flip { Direction::RightToLeft } else { Direction::LeftToRight };
            prop_assert_eq!(to_coordinate(label, direction), to_coordinate(label, direction));
        }

        #[test]
        fn prop_inverse_recovers_label(label in yard_line_strategy(), flip in any::<bool>()) {
            let direction = if flip { Direction::RightToLeft } else { Direction::LeftToRight };
            let coord = to_coordinate(label, direction);
            prop_assert_eq!(YardLine::from_coordinate(coord, direction), label);
        }
    }
}
