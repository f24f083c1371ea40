pub const ARENA_WIDTH: f64 = 16_000.0;
pub const ARENA_HEIGHT: f64 = 7_500.0;

pub const LEFT_GOAL_X: f64 = 0.0;
pub const RIGHT_GOAL_X: f64 = 16_000.0;
pub const GOAL_Y: f64 = 3_750.0;

pub const FLYER_RADIUS: f64 = 400.0;
pub const ORB_RADIUS: f64 = 150.0;
pub const DRONE_RADIUS: f64 = 200.0;

pub const THROW_POWER: i32 = 500;
pub const MOVE_THRUST: i32 = 150;

/// Energy deducted per freeze; also the strict lower bound the
/// pre-spend balance must exceed before a freeze is allowed.
pub const FREEZE_COST: i32 = 10;
/// A drone is freezable while its locked distance is below this
/// multiple of the combined flyer + drone radii.
pub const FREEZE_RANGE_FACTOR: f64 = 2.5;
pub const ENERGY_PER_TICK: i32 = 1;
