use std::str::{FromStr, SplitWhitespace};

use serde::{Deserialize, Serialize};

use crate::constants::{GOAL_Y, LEFT_GOAL_X, RIGHT_GOAL_X};
use crate::entity::Point;
use crate::error::ProtocolError;

/// The four entity tags the referee may send. Anything else is a
/// fatal protocol violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Flyer,
    OpponentFlyer,
    Orb,
    Drone,
}

impl EntityKind {
    pub fn from_tag(tag: &str) -> Result<Self, ProtocolError> {
        match tag {
            "FLYER" => Ok(Self::Flyer),
            "OPPONENT_FLYER" => Ok(Self::OpponentFlyer),
            "ORB" => Ok(Self::Orb),
            "DRONE" => Ok(Self::Drone),
            other => Err(ProtocolError::UnknownEntityKind {
                tag: other.to_string(),
            }),
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Flyer => "FLYER",
            Self::OpponentFlyer => "OPPONENT_FLYER",
            Self::Orb => "ORB",
            Self::Drone => "DRONE",
        }
    }
}

/// One raw entity line from a tick snapshot. `state` is the holding
/// flag and only meaningful for flyer records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: i32,
    pub kind: EntityKind,
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    pub state: i32,
}

/// Which horizontal half of the arena this team defends. The only
/// thing it decides is the goal mouth a throw is aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TeamSide {
    Left,
    Right,
}

impl TeamSide {
    pub fn from_wire(value: i32) -> Result<Self, ProtocolError> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            other => Err(ProtocolError::InvalidTeamSide { value: other }),
        }
    }

    /// The opposing goal mouth: throws always aim at the far side.
    pub fn goal_mouth(&self) -> Point {
        match self {
            Self::Left => Point::new(RIGHT_GOAL_X, GOAL_Y),
            Self::Right => Point::new(LEFT_GOAL_X, GOAL_Y),
        }
    }
}

/// One command line for one flyer, rendered in the referee's text
/// format by `Display`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Throw { at: Point, power: i32 },
    Freeze { drone_id: i32 },
    Move { at: Point, thrust: i32 },
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Throw { at, power } => {
                write!(
                    f,
                    "THROW {} {} {power}",
                    at.x.round() as i32,
                    at.y.round() as i32
                )
            }
            Self::Freeze { drone_id } => write!(f, "FREEZE {drone_id}"),
            Self::Move { at, thrust } => {
                write!(
                    f,
                    "MOVE {} {} {thrust}",
                    at.x.round() as i32,
                    at.y.round() as i32
                )
            }
        }
    }
}

pub fn parse_record(line: &str) -> Result<EntityRecord, ProtocolError> {
    let mut fields = line.split_whitespace();
    let id = parse_field(&mut fields, "id")?;
    let kind = EntityKind::from_tag(next_field(&mut fields, "kind")?)?;
    let x = parse_field(&mut fields, "x")?;
    let y = parse_field(&mut fields, "y")?;
    let vx = parse_field(&mut fields, "vx")?;
    let vy = parse_field(&mut fields, "vy")?;
    let state = parse_field(&mut fields, "state")?;
    Ok(EntityRecord {
        id,
        kind,
        x,
        y,
        vx,
        vy,
        state,
    })
}

pub fn parse_count(line: &str) -> Result<usize, ProtocolError> {
    parse_field(&mut line.split_whitespace(), "entity count")
}

pub fn parse_team_side(line: &str) -> Result<TeamSide, ProtocolError> {
    let value = parse_field(&mut line.split_whitespace(), "team side")?;
    TeamSide::from_wire(value)
}

fn next_field<'a>(
    fields: &mut SplitWhitespace<'a>,
    field: &'static str,
) -> Result<&'a str, ProtocolError> {
    fields.next().ok_or(ProtocolError::MissingField { field })
}

fn parse_field<T: FromStr>(
    fields: &mut SplitWhitespace<'_>,
    field: &'static str,
) -> Result<T, ProtocolError> {
    let raw = next_field(fields, field)?;
    raw.parse().map_err(|_| ProtocolError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_roundtrip_for_all_kinds() {
        for kind in [
            EntityKind::Flyer,
            EntityKind::OpponentFlyer,
            EntityKind::Orb,
            EntityKind::Drone,
        ] {
            assert_eq!(EntityKind::from_tag(kind.as_tag()).unwrap(), kind);
        }
    }

    #[test]
    fn rejects_unknown_tag() {
        assert_eq!(
            EntityKind::from_tag("GHOST"),
            Err(ProtocolError::UnknownEntityKind {
                tag: "GHOST".to_string()
            })
        );
    }

    #[test]
    fn parses_full_record() {
        let record = parse_record("7 ORB 4000 3000 -50 12 0").unwrap();
        assert_eq!(
            record,
            EntityRecord {
                id: 7,
                kind: EntityKind::Orb,
                x: 4000,
                y: 3000,
                vx: -50,
                vy: 12,
                state: 0,
            }
        );
    }

    #[test]
    fn record_parse_fails_on_short_line() {
        assert_eq!(
            parse_record("7 ORB 4000 3000"),
            Err(ProtocolError::MissingField { field: "vx" })
        );
    }

    #[test]
    fn record_parse_fails_on_non_numeric_coordinate() {
        assert_eq!(
            parse_record("7 ORB east 3000 0 0 0"),
            Err(ProtocolError::InvalidNumber {
                field: "x",
                value: "east".to_string()
            })
        );
    }

    #[test]
    fn record_parse_surfaces_unknown_kind() {
        assert!(matches!(
            parse_record("3 SNITCH 1 2 3 4 0"),
            Err(ProtocolError::UnknownEntityKind { .. })
        ));
    }

    #[test]
    fn count_and_team_side_parse() {
        assert_eq!(parse_count(" 12 ").unwrap(), 12);
        assert_eq!(parse_team_side("0").unwrap(), TeamSide::Left);
        assert_eq!(parse_team_side("1").unwrap(), TeamSide::Right);
        assert_eq!(
            parse_team_side("2"),
            Err(ProtocolError::InvalidTeamSide { value: 2 })
        );
    }

    #[test]
    fn left_side_attacks_right_goal() {
        assert_eq!(TeamSide::Left.goal_mouth(), Point::new(16_000.0, 3_750.0));
        assert_eq!(TeamSide::Right.goal_mouth(), Point::new(0.0, 3_750.0));
    }

    #[test]
    fn commands_render_in_wire_format() {
        let throw = Command::Throw {
            at: Point::new(16_000.0, 3_750.0),
            power: 500,
        };
        assert_eq!(throw.to_string(), "THROW 16000 3750 500");

        let freeze = Command::Freeze { drone_id: 11 };
        assert_eq!(freeze.to_string(), "FREEZE 11");

        let mv = Command::Move {
            at: Point::new(8_000.4, 3_749.6),
            thrust: 150,
        };
        assert_eq!(mv.to_string(), "MOVE 8000 3750 150");
    }
}
