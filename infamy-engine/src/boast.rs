//! Boasting at port: the one action that earns Infamy and Disrepute.
use serde::{Deserialize, Serialize};

use crate::error::InfamyError;
use crate::ports::{favored_bonus, is_known_port};
use crate::state::{HistoryEntry, ReputationState};
use crate::thresholds::{Tier, crossed_threshold};

/// Plunder consumed by the reroll mechanic, over and above any bonus spend.
pub const REROLL_PLUNDER_COST: u32 = 3;

/// Check bonus per point of plunder spent.
pub const PLUNDER_CHECK_BONUS: i32 = 2;

/// Skill used for the boast check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoastSkill {
    Bluff,
    Intimidate,
    Perform,
}

impl BoastSkill {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bluff => "Bluff",
            Self::Intimidate => "Intimidate",
            Self::Perform => "Perform",
        }
    }
}

/// One boast attempt. The skill check result already folds in dice and skill
/// modifiers; the DC comes from the caller (derived from average party
/// level). Plunder inventory lives outside the engine, so its current total
/// rides along read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoastInput {
    pub port: String,
    pub skill_check: i32,
    pub skill: BoastSkill,
    pub plunder_spent: u32,
    pub reroll: bool,
    pub available_plunder: u32,
    pub dc: i32,
    /// Campaign day of the attempt.
    pub day: i64,
    pub actor: String,
}

/// What a resolved boast attempt produced. Zero gain is still a successful
/// resolution; the attempt consumed its day and any plunder committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoastOutcome {
    pub infamy_gained: u8,
    /// Plunder actually consumed (the reroll floor may raise the request).
    /// The caller debits this from its inventory; the engine never does.
    pub plunder_spent: u32,
    pub effective_check: i32,
    pub dc: i32,
    /// True when the computed gain was cut down by the per-port cap.
    pub capped: bool,
    /// Threshold newly crossed by this gain, if any.
    pub new_threshold: Option<Tier>,
}

/// Degrees of success against the DC: fail, meet, exceed by 5, exceed by 10.
const fn degrees_of_success(check: i32, dc: i32) -> u8 {
    if check >= dc + 10 {
        3
    } else if check >= dc + 5 {
        2
    } else if check >= dc {
        1
    } else {
        0
    }
}

/// Resolves one boast attempt against `state`.
///
/// # Errors
///
/// `NotFound` for an unknown port, `RateLimit` when a boast was already
/// attempted on the same campaign day, `Validation` when the committed
/// plunder (including the reroll floor) exceeds what is available.
pub fn boast(state: &mut ReputationState, input: &BoastInput) -> Result<BoastOutcome, InfamyError> {
    if !is_known_port(&input.port) {
        return Err(InfamyError::unknown_port(&input.port));
    }
    if state.last_boast_day == Some(input.day) {
        return Err(InfamyError::RateLimit { days_remaining: 1 });
    }

    let mut plunder = input.plunder_spent;
    if input.reroll {
        // The reroll always costs at least its fixed price.
        plunder = plunder.max(REROLL_PLUNDER_COST);
    }
    if plunder > input.available_plunder {
        return Err(InfamyError::validation(format!(
            "not enough plunder: spending {plunder} with {} available",
            input.available_plunder
        )));
    }

    let effective_check = input.skill_check
        + PLUNDER_CHECK_BONUS * plunder as i32
        + favored_bonus(state, &input.port);
    let computed = degrees_of_success(effective_check, input.dc);

    // The cap uses the tier in force before the gain lands; crossing a
    // threshold mid-boast never refreshes the port.
    let tier_before = state.tier();
    let room = state.progress(&input.port).remaining(tier_before);
    let gain = computed.min(room);

    state.last_boast_day = Some(input.day);

    let infamy_before = state.infamy;
    let mut new_threshold = None;
    if gain > 0 {
        state.progress_mut(&input.port).add(tier_before, gain);
        state.infamy += u32::from(gain);
        state.disrepute += u32::from(gain);
        new_threshold = crossed_threshold(infamy_before, state.infamy);
    }

    state.record(HistoryEntry {
        day: input.day,
        infamy_delta: i64::from(gain),
        disrepute_delta: i64::from(gain),
        reason: format!("Boasting at port ({} check)", input.skill.name()),
        port: Some(input.port.clone()),
        actor: input.actor.clone(),
        manual_override: false,
    });

    Ok(BoastOutcome {
        infamy_gained: gain,
        plunder_spent: plunder,
        effective_check,
        dc: input.dc,
        capped: computed > gain,
        new_threshold,
    })
}
