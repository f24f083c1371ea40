use arena_core::constants::{ENERGY_PER_TICK, FREEZE_COST};

/// The match-long freeze budget. Starts at zero, earns one point at
/// the end of every tick, and is only ever spent by freezes. Passed
/// explicitly through the policy so earlier flyers in evaluation
/// order have first claim within a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Energy {
    points: i32,
}

impl Energy {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_points(points: i32) -> Self {
        Self { points }
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    /// A freeze is allowed only while the balance strictly exceeds
    /// the cost.
    pub fn can_freeze(&self) -> bool {
        self.points > FREEZE_COST
    }

    pub fn spend_freeze(&mut self) {
        self.points -= FREEZE_COST;
    }

    /// Per-tick income, paid after every flyer has acted, independent
    /// of how much the tick spent.
    pub fn end_tick(&mut self) {
        self.points += ENERGY_PER_TICK;
    }
}
