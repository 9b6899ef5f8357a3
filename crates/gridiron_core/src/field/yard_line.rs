//! Yard-line labels
//!
//! Labels are painted from each goal line toward midfield:
//! `LG, L1 .. L49, 50, R49 .. R1, RG`. A label is parsed once at the input
//! boundary and carried as a [`YardLine`] from then on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::coordinate::{Direction, FieldCoordinate, FIELD_LENGTH, MIDFIELD};
use crate::error::InvalidLabelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn marker(self) -> char {
        match self {
            Side::Left => 'L',
            Side::Right => 'R',
        }
    }

    fn from_marker(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'L' => Some(Side::Left),
            'R' => Some(Side::Right),
            _ => None,
        }
    }
}

/// Distance from a goal line, `0..=49` (0 is the goal line itself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Yards(u8);

impl Yards {
    pub const GOAL_LINE: Yards = Yards(0);
    pub const MAX: u8 = MIDFIELD - 1;

    pub fn new(yards: u8) -> Option<Self> {
        (yards <= Self::MAX).then_some(Self(yards))
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }
}

/// A yard-line label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum YardLine {
    Midfield,
    Side(Side, Yards),
}

impl YardLine {
    pub fn goal_line(side: Side) -> Self {
        YardLine::Side(side, Yards::GOAL_LINE)
    }

    pub fn new(side: Side, yards: u8) -> Option<Self> {
        Yards::new(yards).map(|y| YardLine::Side(side, y))
    }

    /// Position of the label with the offense moving left to right.
    pub fn raw_coordinate(self) -> FieldCoordinate {
        match self {
            YardLine::Midfield => FieldCoordinate::MIDFIELD,
            YardLine::Side(Side::Left, y) => FieldCoordinate::clamped(y.get() as i32),
            YardLine::Side(Side::Right, y) => {
                FieldCoordinate::clamped(FIELD_LENGTH as i32 - y.get() as i32)
            }
        }
    }

    /// Label painted at a raw coordinate.
    pub fn from_raw(raw: FieldCoordinate) -> Self {
        let value = raw.value();
        match value.cmp(&MIDFIELD) {
            std::cmp::Ordering::Equal => YardLine::Midfield,
            std::cmp::Ordering::Less => YardLine::Side(Side::Left, Yards(value)),
            std::cmp::Ordering::Greater => YardLine::Side(Side::Right, Yards(FIELD_LENGTH - value)),
        }
    }

    /// Inverse of [`to_coordinate`](super::to_coordinate).
    pub fn from_coordinate(coord: FieldCoordinate, direction: Direction) -> Self {
        Self::from_raw(direction.orient(coord))
    }

    /// Every label on the field from the left goal line to the right one.
    pub fn all() -> impl Iterator<Item = YardLine> {
        (0..=FIELD_LENGTH as i32).map(|raw| YardLine::from_raw(FieldCoordinate::clamped(raw)))
    }
}

impl fmt::Display for YardLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YardLine::Midfield => write!(f, "{MIDFIELD}"),
            YardLine::Side(side, y) if *y == Yards::GOAL_LINE => write!(f, "{}G", side.marker()),
            YardLine::Side(side, y) => write!(f, "{}{}", side.marker(), y.get()),
        }
    }
}

impl FromStr for YardLine {
    type Err = InvalidLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        let mut chars = label.chars();
        let Some(first) = chars.next() else {
            return Err(InvalidLabelError::Empty);
        };

        if label == "50" {
            return Ok(YardLine::Midfield);
        }

        let side = Side::from_marker(first)
            .ok_or_else(|| InvalidLabelError::UnknownSide { label: label.to_string() })?;
        let rest = chars.as_str();

        if rest.eq_ignore_ascii_case("G") {
            return Ok(YardLine::goal_line(side));
        }

        if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidLabelError::BadMagnitude { label: label.to_string() });
        }
        let yards: u32 = rest
            .parse()
            .map_err(|_| InvalidLabelError::BadMagnitude { label: label.to_string() })?;

        match yards {
            0 => Ok(YardLine::goal_line(side)),
            50 => Ok(YardLine::Midfield),
            1..=49 => Ok(YardLine::Side(side, Yards(yards as u8))),
            _ => Err(InvalidLabelError::OutOfRange { label: label.to_string(), yards }),
        }
    }
}

impl TryFrom<String> for YardLine {
    type Error = InvalidLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YardLine> for String {
    fn from(line: YardLine) -> String {
        line.to_string()
    }
}
