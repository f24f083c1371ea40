use crate::constants::{DRONE_RADIUS, FLYER_RADIUS, ORB_RADIUS};

/// A position on the arena plane. Immutable once constructed; all
/// geometry in the decision pipeline reduces to distances between
/// these.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: Point) -> f64 {
        self.distance_sq(other).sqrt()
    }
}

/// A controllable team unit. Both teams use this type; which side a
/// flyer belongs to is decided by the collection it lives in for the
/// current tick.
#[derive(Clone, Copy, Debug)]
pub struct Flyer {
    pub id: i32,
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    /// Carrying an orb this tick.
    pub holding: bool,
}

impl Flyer {
    pub fn new(id: i32, pos: Point, vx: f64, vy: f64, holding: bool) -> Self {
        Self {
            id,
            pos,
            vx,
            vy,
            radius: FLYER_RADIUS,
            holding,
        }
    }

    /// Capture test: the point lies within this flyer's reach.
    pub fn contains(&self, p: Point) -> bool {
        self.pos.distance(p) <= self.radius
    }
}

/// A capturable orb. Exists only while neither team has grabbed it.
#[derive(Clone, Copy, Debug)]
pub struct Orb {
    pub id: i32,
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Orb {
    pub fn new(id: i32, pos: Point, vx: f64, vy: f64) -> Self {
        Self {
            id,
            pos,
            vx,
            vy,
            radius: ORB_RADIUS,
        }
    }
}

/// The flyer a drone is currently homing on. `distance` is exactly
/// that flyer's distance to the drone at lock time; the pair is
/// rebuilt from scratch every tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetLock {
    pub flyer_id: i32,
    pub distance: f64,
}

/// A roaming hazard that chases whichever flyer is nearest. `lock` is
/// `None` until a targeting sweep has seen at least one candidate.
#[derive(Clone, Copy, Debug)]
pub struct Drone {
    pub id: i32,
    pub pos: Point,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub lock: Option<TargetLock>,
}

impl Drone {
    pub fn new(id: i32, pos: Point, vx: f64, vy: f64) -> Self {
        Self {
            id,
            pos,
            vx,
            vy,
            radius: DRONE_RADIUS,
            lock: None,
        }
    }
}
