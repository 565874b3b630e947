//! Sacrificing a crew member or prisoner for Disrepute.
//!
//! The one place randomness enters the engine; the die is injected so hosts
//! and tests control the source.
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::InfamyError;
use crate::state::{HistoryEntry, ReputationState};
use crate::thresholds::Tier;

/// Threshold required before the crew stoops to this.
pub const SACRIFICE_TIER: Tier = Tier::Despicable;

/// Minimum campaign days between sacrifices.
pub const SACRIFICE_COOLDOWN_DAYS: i64 = 7;

/// One sacrifice attempt. The day of the previous sacrifice is supplied by
/// the caller (the hosting app derives it from its own records); the engine
/// does not persist it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SacrificeInput {
    pub victim: String,
    /// Campaign day of the attempt.
    pub day: i64,
    pub last_sacrifice_day: Option<i64>,
    pub actor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SacrificeOutcome {
    pub victim: String,
    /// 1d3 roll.
    pub disrepute_gained: u8,
    pub disrepute: u32,
}

/// Resolves a sacrifice, rolling 1d3 Disrepute on the supplied die.
///
/// # Errors
///
/// `Validation` for a blank victim name, `Precondition` below the
/// Despicable threshold, `RateLimit` inside the seven-day window.
pub fn sacrifice(
    state: &mut ReputationState,
    input: &SacrificeInput,
    rng: &mut impl Rng,
) -> Result<SacrificeOutcome, InfamyError> {
    if input.victim.trim().is_empty() {
        return Err(InfamyError::validation("victim name is required"));
    }
    if state.infamy < SACRIFICE_TIER.requirement() {
        return Err(InfamyError::precondition(format!(
            "sacrifices require the {} threshold ({} Infamy)",
            SACRIFICE_TIER.name(),
            SACRIFICE_TIER.requirement()
        )));
    }
    if let Some(last) = input.last_sacrifice_day {
        let elapsed = input.day - last;
        if elapsed < SACRIFICE_COOLDOWN_DAYS {
            return Err(InfamyError::RateLimit {
                days_remaining: SACRIFICE_COOLDOWN_DAYS - elapsed,
            });
        }
    }

    let gain: u8 = rng.gen_range(1..=3);
    state.disrepute += u32::from(gain);
    state.record(HistoryEntry {
        day: input.day,
        infamy_delta: 0,
        disrepute_delta: i64::from(gain),
        reason: format!("Sacrificed crew member: {}", input.victim),
        port: None,
        actor: input.actor.clone(),
        manual_override: false,
    });

    Ok(SacrificeOutcome {
        victim: input.victim.clone(),
        disrepute_gained: gain,
        disrepute: state.disrepute,
    })
}
