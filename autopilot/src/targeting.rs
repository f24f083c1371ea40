//! Drone target acquisition.
//!
//! A drone homes on whichever flyer is nearest, across both teams.
//! Locks are derived from scratch every tick: the runner hands each
//! drone a fresh `None` lock and two candidate sweeps.

use arena_core::{Drone, Flyer, TargetLock};

/// One sweep over `candidates`. A candidate takes the lock only when
/// strictly closer than the current holder, so on exact ties the
/// earlier candidate keeps it. An empty slice changes nothing.
pub fn update_lock(drone: &mut Drone, candidates: &[Flyer]) {
    for flyer in candidates {
        let distance = flyer.pos.distance(drone.pos);
        let closer = match drone.lock {
            Some(lock) => distance < lock.distance,
            None => true,
        };
        if closer {
            tracing::debug!(
                drone = drone.id,
                flyer = flyer.id,
                distance,
                "drone retargets"
            );
            drone.lock = Some(TargetLock {
                flyer_id: flyer.id,
                distance,
            });
        }
    }
}

/// Full per-tick acquisition: rival flyers first, own flyers second.
/// An own flyer displaces a rival lock only by being strictly closer.
pub fn acquire_locks(drones: &mut [Drone], rivals: &[Flyer], flyers: &[Flyer]) {
    for drone in drones.iter_mut() {
        update_lock(drone, rivals);
        update_lock(drone, flyers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::Point;

    fn flyer(id: i32, x: f64, y: f64) -> Flyer {
        Flyer::new(id, Point::new(x, y), 0.0, 0.0, false)
    }

    fn drone_at_origin() -> Drone {
        Drone::new(100, Point::new(0.0, 0.0), 0.0, 0.0)
    }

    #[test]
    fn lock_tracks_the_minimum_distance_seen() {
        let mut drone = drone_at_origin();
        update_lock(&mut drone, &[flyer(1, 300.0, 0.0), flyer(2, 50.0, 0.0)]);

        let lock = drone.lock.unwrap();
        assert_eq!(lock.flyer_id, 2);
        assert_eq!(lock.distance, 50.0);
    }

    #[test]
    fn empty_sweep_leaves_lock_unchanged() {
        let mut drone = drone_at_origin();
        update_lock(&mut drone, &[]);
        assert!(drone.lock.is_none());

        update_lock(&mut drone, &[flyer(1, 75.0, 0.0)]);
        let before = drone.lock;
        update_lock(&mut drone, &[]);
        assert_eq!(drone.lock, before);
    }

    #[test]
    fn earlier_candidate_wins_exact_ties() {
        let mut drone = drone_at_origin();
        update_lock(&mut drone, &[flyer(1, 100.0, 0.0), flyer(2, 0.0, 100.0)]);
        assert_eq!(drone.lock.unwrap().flyer_id, 1);
    }

    #[test]
    fn second_sweep_only_overrides_when_strictly_closer() {
        let mut drone = drone_at_origin();
        let rivals = [flyer(1, 100.0, 0.0)];

        let not_closer = [flyer(2, 0.0, 100.0)];
        update_lock(&mut drone, &rivals);
        update_lock(&mut drone, &not_closer);
        assert_eq!(drone.lock.unwrap().flyer_id, 1);

        let closer = [flyer(3, 0.0, 99.0)];
        update_lock(&mut drone, &closer);
        assert_eq!(drone.lock.unwrap().flyer_id, 3);
        assert_eq!(drone.lock.unwrap().distance, 99.0);
    }

    #[test]
    fn lock_distance_never_increases_across_sweeps() {
        let mut drone = drone_at_origin();
        let sweeps = [
            vec![flyer(1, 500.0, 0.0)],
            vec![flyer(2, 900.0, 0.0), flyer(3, 400.0, 0.0)],
            vec![flyer(4, 401.0, 0.0)],
        ];

        let mut last = f64::INFINITY;
        for sweep in &sweeps {
            update_lock(&mut drone, sweep);
            let current = drone.lock.unwrap().distance;
            assert!(current <= last);
            last = current;
        }
        assert_eq!(last, 400.0);
    }

    #[test]
    fn acquire_locks_picks_the_global_nearest_across_teams() {
        let mut drones = vec![drone_at_origin()];
        let rivals = [flyer(1, 600.0, 0.0)];
        let flyers = [flyer(2, 200.0, 0.0)];

        acquire_locks(&mut drones, &rivals, &flyers);
        assert_eq!(drones[0].lock.unwrap().flyer_id, 2);
        assert_eq!(drones[0].lock.unwrap().distance, 200.0);
    }
}
