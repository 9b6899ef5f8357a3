//! Field geometry: yard-line labels and absolute coordinates.

pub mod coordinate;
pub mod yard_line;

pub use coordinate::{
    parse_coordinate, to_coordinate, Direction, FieldCoordinate, FIELD_LENGTH, MIDFIELD,
};
pub use yard_line::{Side, YardLine, Yards};
