//! Manual DM adjustment: the privileged escape hatch.
//!
//! Authorization is the hosting application's problem; the engine only
//! enforces the bookkeeping rules. This is the sole operation allowed to
//! lower Infamy, and every entry it writes is flagged as a manual override.
use serde::{Deserialize, Serialize};

use crate::error::InfamyError;
use crate::state::{HistoryEntry, ReputationState};
use crate::thresholds::{Tier, crossed_threshold};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustInput {
    pub infamy_delta: i64,
    pub disrepute_delta: i64,
    pub reason: String,
    /// Campaign day of the adjustment.
    pub day: i64,
    pub actor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjustOutcome {
    pub previous_infamy: u32,
    pub infamy: u32,
    pub previous_disrepute: u32,
    pub disrepute: u32,
    /// Threshold newly crossed upward by this adjustment, if any.
    pub new_threshold: Option<Tier>,
}

fn apply_delta(value: u32, delta: i64) -> u32 {
    let adjusted = i64::from(value) + delta;
    u32::try_from(adjusted.max(0)).unwrap_or(u32::MAX)
}

/// Applies a manual adjustment. Both scores floor at zero rather than erroring.
///
/// # Errors
///
/// `Validation` when the reason is blank or both deltas are zero.
pub fn adjust(
    state: &mut ReputationState,
    input: &AdjustInput,
) -> Result<AdjustOutcome, InfamyError> {
    if input.reason.trim().is_empty() {
        return Err(InfamyError::validation(
            "a reason is required for manual adjustments",
        ));
    }
    if input.infamy_delta == 0 && input.disrepute_delta == 0 {
        return Err(InfamyError::validation(
            "at least one of the infamy or disrepute deltas must be non-zero",
        ));
    }

    let previous_infamy = state.infamy;
    let previous_disrepute = state.disrepute;
    state.infamy = apply_delta(previous_infamy, input.infamy_delta);
    state.disrepute = apply_delta(previous_disrepute, input.disrepute_delta);

    // Record what actually changed, not what was asked for, so ledger sums
    // reconcile with the scores even when a floor kicked in.
    state.record(HistoryEntry {
        day: input.day,
        infamy_delta: i64::from(state.infamy) - i64::from(previous_infamy),
        disrepute_delta: i64::from(state.disrepute) - i64::from(previous_disrepute),
        reason: format!("DM Adjustment: {}", input.reason),
        port: None,
        actor: input.actor.clone(),
        manual_override: true,
    });

    Ok(AdjustOutcome {
        previous_infamy,
        infamy: state.infamy,
        previous_disrepute,
        disrepute: state.disrepute,
        new_threshold: crossed_threshold(previous_infamy, state.infamy),
    })
}
