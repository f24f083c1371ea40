//! Per-tick decision engine for the arena referee protocol.
//!
//! Each tick the referee sends a full entity snapshot and expects one
//! command line per own flyer. The pipeline is strictly sequential:
//! drone target acquisition, rival orb-capture resolution, then the
//! priority-ordered action policy for each flyer in wire order.

pub mod energy;
pub mod policy;
pub mod resolution;
pub mod runner;
pub mod targeting;
pub mod world;
