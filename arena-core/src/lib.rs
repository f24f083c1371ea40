pub mod constants;
pub mod entity;
pub mod error;
pub mod protocol;

pub use entity::{Drone, Flyer, Orb, Point, TargetLock};
pub use error::ProtocolError;
pub use protocol::{Command, EntityKind, EntityRecord, TeamSide};
