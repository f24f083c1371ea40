use arena_core::protocol::{EntityKind, EntityRecord};
use arena_core::{Drone, Flyer, Orb, Point};

/// Everything alive this tick, grouped by role. Rebuilt from the wire
/// records at the start of every tick and dropped at its end; nothing
/// here survives between ticks.
#[derive(Clone, Debug, Default)]
pub struct TickState {
    pub flyers: Vec<Flyer>,
    pub rivals: Vec<Flyer>,
    pub orbs: Vec<Orb>,
    pub drones: Vec<Drone>,
}

impl TickState {
    pub fn from_records(records: &[EntityRecord]) -> Self {
        let mut state = Self::default();
        for record in records {
            let pos = Point::new(record.x as f64, record.y as f64);
            let vx = record.vx as f64;
            let vy = record.vy as f64;
            match record.kind {
                EntityKind::Flyer => state
                    .flyers
                    .push(Flyer::new(record.id, pos, vx, vy, record.state == 1)),
                EntityKind::OpponentFlyer => state
                    .rivals
                    .push(Flyer::new(record.id, pos, vx, vy, record.state == 1)),
                EntityKind::Orb => state.orbs.push(Orb::new(record.id, pos, vx, vy)),
                EntityKind::Drone => state.drones.push(Drone::new(record.id, pos, vx, vy)),
            }
        }
        state
    }
}
