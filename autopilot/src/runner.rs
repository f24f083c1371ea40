//! The read-decide-emit loop around the decision pipeline.
//!
//! One team-side line up front, then one snapshot per tick until the
//! stream ends. All output for a tick is flushed before the next
//! snapshot is read; the referee blocks on our command lines.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use arena_core::protocol::{self, Command};
use arena_core::ProtocolError;
use serde::Serialize;

use crate::energy::Energy;
use crate::policy::ActionPolicy;
use crate::resolution::claim_contested_orbs;
use crate::targeting::acquire_locks;
use crate::world::TickState;

/// Advisory end-of-match summary; never feeds back into decisions.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct MatchStats {
    pub ticks: u32,
    pub throws: u32,
    pub freezes: u32,
    pub moves: u32,
    pub energy_spent: i32,
    pub final_energy: i32,
}

pub fn run_match<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<MatchStats> {
    let side_line = read_line(&mut input)?
        .ok_or(ProtocolError::MissingLine {
            expected: "team side",
        })
        .context("reading match preamble")?;
    let side = protocol::parse_team_side(&side_line)?;

    let policy = ActionPolicy::new(side);
    let mut energy = Energy::new();
    let mut stats = MatchStats::default();

    while let Some(count_line) = read_line(&mut input)? {
        let count = protocol::parse_count(&count_line)
            .with_context(|| format!("tick {}", stats.ticks))?;

        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            let line = read_line(&mut input)?
                .ok_or(ProtocolError::MissingLine {
                    expected: "entity record",
                })
                .with_context(|| format!("tick {}", stats.ticks))?;
            records.push(
                protocol::parse_record(&line).with_context(|| format!("tick {}", stats.ticks))?,
            );
        }

        let mut state = TickState::from_records(&records);
        acquire_locks(&mut state.drones, &state.rivals, &state.flyers);

        tracing::debug!(orbs = state.orbs.len(), "orbs before rival resolution");
        claim_contested_orbs(&mut state.orbs, &state.rivals);
        tracing::debug!(orbs = state.orbs.len(), "orbs after rival resolution");

        for flyer in &state.flyers {
            let before = energy.points();
            let command = policy.decide(
                flyer,
                &state.drones,
                &mut state.orbs,
                &state.rivals,
                &mut energy,
            );
            stats.energy_spent += before - energy.points();
            match command {
                Command::Throw { .. } => stats.throws += 1,
                Command::Freeze { .. } => stats.freezes += 1,
                Command::Move { .. } => stats.moves += 1,
            }
            writeln!(output, "{command}").context("writing command")?;
        }
        output.flush().context("flushing tick output")?;

        energy.end_tick();
        stats.ticks += 1;
    }

    stats.final_energy = energy.points();
    Ok(stats)
}

/// `Ok(None)` on end of input; trailing newline and padding trimmed.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("reading input line")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
