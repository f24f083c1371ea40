//! Per-flyer action selection.
//!
//! Strict priority order, first applicable rule wins:
//! throw (holding), freeze (a drone is homing on this flyer and the
//! energy budget allows it), fallback mark (no orbs left), pursue
//! (nearest remaining orb, claimed so later flyers skip it).

use arena_core::constants::{
    ARENA_HEIGHT, ARENA_WIDTH, FREEZE_RANGE_FACTOR, MOVE_THRUST, THROW_POWER,
};
use arena_core::protocol::TeamSide;
use arena_core::{Command, Drone, Flyer, Orb, Point};

use crate::energy::Energy;

pub struct ActionPolicy {
    goal: Point,
}

impl ActionPolicy {
    pub fn new(side: TeamSide) -> Self {
        Self {
            goal: side.goal_mouth(),
        }
    }

    /// Decide one command for one flyer. Mutates the shared tick
    /// state it consumes: a freeze spends from `energy`, a pursuit
    /// removes the chosen orb from `orbs`.
    pub fn decide(
        &self,
        flyer: &Flyer,
        drones: &[Drone],
        orbs: &mut Vec<Orb>,
        rivals: &[Flyer],
        energy: &mut Energy,
    ) -> Command {
        // A carrier throws unconditionally; no threat or orb
        // evaluation happens for it.
        if flyer.holding {
            return Command::Throw {
                at: self.goal,
                power: THROW_POWER,
            };
        }

        if let Some(drone_id) = self.live_threat(flyer, drones, energy) {
            energy.spend_freeze();
            tracing::debug!(flyer = flyer.id, drone = drone_id, "freezing drone");
            return Command::Freeze { drone_id };
        }

        if orbs.is_empty() {
            // Nothing left to contest: mark the leading rival. A tick
            // with no rivals at all is outside the referee contract;
            // drift to the arena centre rather than index nothing.
            let at = rivals
                .first()
                .map_or(Point::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0), |r| {
                    r.pos
                });
            return Command::Move {
                at,
                thrust: MOVE_THRUST,
            };
        }

        let target = self.claim_nearest_orb(flyer, orbs);
        Command::Move {
            at: target,
            thrust: MOVE_THRUST,
        }
    }

    /// First drone (in wire order) homing on this flyer, in freeze
    /// range, while the budget allows a spend. First match, not best.
    fn live_threat(&self, flyer: &Flyer, drones: &[Drone], energy: &Energy) -> Option<i32> {
        for drone in drones {
            let Some(lock) = drone.lock else { continue };
            if lock.flyer_id == flyer.id
                && energy.can_freeze()
                && lock.distance < FREEZE_RANGE_FACTOR * (flyer.radius + drone.radius)
            {
                return Some(drone.id);
            }
        }
        None
    }

    /// Stable ascending sort by distance, so equal-distance orbs keep
    /// their original relative order. The winner is removed from the
    /// live set: one orb, one pursuer per tick.
    fn claim_nearest_orb(&self, flyer: &Flyer, orbs: &mut Vec<Orb>) -> Point {
        let mut ranked: Vec<(f64, i32, Point)> = orbs
            .iter()
            .map(|orb| (flyer.pos.distance(orb.pos), orb.id, orb.pos))
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (distance, orb_id, target) = ranked[0];
        tracing::debug!(flyer = flyer.id, orb = orb_id, distance, "pursuing orb");
        if let Some(idx) = orbs.iter().position(|orb| orb.id == orb_id) {
            orbs.remove(idx);
        }
        target
    }
}
