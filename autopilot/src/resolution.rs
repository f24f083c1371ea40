//! Rival capture resolution.
//!
//! The opponent acts before our policy does: any orb already inside a
//! rival's reach is treated as grabbed and dropped from the live set,
//! so the action policy never chases an orb it cannot win.

use arena_core::{Flyer, Orb};

/// For each rival in order, remove the first orb (current set order)
/// within that rival's capture radius. At most one orb per rival, and
/// removal is immediate so a later rival cannot claim the same orb.
pub fn claim_contested_orbs(orbs: &mut Vec<Orb>, rivals: &[Flyer]) {
    for rival in rivals {
        if let Some(idx) = orbs.iter().position(|orb| rival.contains(orb.pos)) {
            let orb = orbs.remove(idx);
            tracing::debug!(rival = rival.id, orb = orb.id, "orb conceded to rival");
        }
    }
}
