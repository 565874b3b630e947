//! Impositions: benefits bought with Disrepute, gated by Infamy threshold.
use serde::Serialize;

use crate::error::InfamyError;
use crate::state::{HistoryEntry, ReputationState};
use crate::thresholds::{Tier, tier_label};

/// One purchasable benefit. The catalog lives in code; prices listed here are
/// base costs and get discounted at purchase time as thresholds climb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Imposition {
    pub id: &'static str,
    pub name: &'static str,
    pub tier: Tier,
    pub base_cost: u32,
    pub effect: &'static str,
}

/// Full catalog, ordered by tier then cost.
pub static CATALOG: [Imposition; 12] = [
    Imposition {
        id: "fearsome_colors",
        name: "Fearsome Colors",
        tier: Tier::Disgraceful,
        base_cost: 5,
        effect: "Merchant vessels flying lesser colors strike sail at the sight of yours.",
    },
    Imposition {
        id: "dock_talk",
        name: "The Talk of the Docks",
        tier: Tier::Disgraceful,
        base_cost: 5,
        effect: "Resupply the ship at a 10% discount at this port.",
    },
    Imposition {
        id: "press_ganged_hands",
        name: "Press-Ganged Hands",
        tier: Tier::Disgraceful,
        base_cost: 10,
        effect: "Recruit a handful of able deckhands without paying signing bonuses.",
    },
    Imposition {
        id: "dread_rumors",
        name: "Dread Rumors",
        tier: Tier::Despicable,
        base_cost: 10,
        effect: "Sow tales of your cruelty; harbor officials look the other way for a day.",
    },
    Imposition {
        id: "barterer_of_flesh",
        name: "Barterer of Flesh",
        tier: Tier::Despicable,
        base_cost: 10,
        effect: "Sell captives and prisoners at full market rate, no questions asked.",
    },
    Imposition {
        id: "master_of_morale",
        name: "Master of Morale",
        tier: Tier::Despicable,
        base_cost: 15,
        effect: "The crew works double shifts without grumbling for one voyage.",
    },
    Imposition {
        id: "captains_due",
        name: "The Captain's Due",
        tier: Tier::Notorious,
        base_cost: 15,
        effect: "Claim an extra share of any plunder divided at this port.",
    },
    Imposition {
        id: "pirate_council_seat",
        name: "Seat at the Pirate Council",
        tier: Tier::Notorious,
        base_cost: 20,
        effect: "Gain an audience with the pirate lords and a vote in their council.",
    },
    Imposition {
        id: "terror_of_the_lanes",
        name: "Terror of the Sea Lanes",
        tier: Tier::Loathsome,
        base_cost: 25,
        effect: "Convoys reroute to avoid you; pick your prey without escorts.",
    },
    Imposition {
        id: "tribute_demanded",
        name: "Tribute Demanded",
        tier: Tier::Loathsome,
        base_cost: 30,
        effect: "Extract a tribute of stores and coin from a lesser port.",
    },
    Imposition {
        id: "hurricane_crown",
        name: "The Hurricane Crown",
        tier: Tier::Vile,
        base_cost: 40,
        effect: "Fly the Hurricane King's own courtesy colors; no free port dares refuse you.",
    },
    Imposition {
        id: "scourge_of_the_seas",
        name: "Scourge of the Seas",
        tier: Tier::Vile,
        base_cost: 50,
        effect: "Your name alone routs green crews; lesser ships surrender before battle.",
    },
];

/// Looks up a catalog entry by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Imposition> {
    CATALOG.iter().find(|imposition| imposition.id == id)
}

/// Price after threshold discounts, assuming the tier is already unlocked.
///
/// Standing a tier above an imposition halves its price (rounded down, one
/// halving no matter how far above). At the top threshold, lowest-tier
/// impositions are free outright.
#[must_use]
pub fn effective_cost(imposition: &Imposition, current: Tier) -> u32 {
    if imposition.tier == Tier::Disgraceful && current == Tier::Vile {
        0
    } else if current.index() > imposition.tier.index() {
        imposition.base_cost / 2
    } else {
        imposition.base_cost
    }
}

/// Result of a successful purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseOutcome {
    pub id: &'static str,
    pub name: &'static str,
    pub cost_paid: u32,
    pub disrepute: u32,
    pub effect: &'static str,
}

/// Buys the imposition with `id`, debiting Disrepute.
///
/// # Errors
///
/// `NotFound` for an unknown id, `Precondition` when the imposition's tier is
/// not yet reached, `InsufficientFunds` when the discounted price exceeds the
/// banked Disrepute.
pub fn purchase(
    state: &mut ReputationState,
    id: &str,
    day: i64,
    actor: &str,
) -> Result<PurchaseOutcome, InfamyError> {
    let Some(imposition) = find(id) else {
        return Err(InfamyError::NotFound {
            kind: "imposition",
            name: id.to_string(),
        });
    };

    let current = state.tier().filter(|tier| *tier >= imposition.tier);
    let Some(current) = current else {
        return Err(InfamyError::precondition(format!(
            "{} requires the {} threshold",
            imposition.name,
            imposition.tier.name()
        )));
    };

    let cost = effective_cost(imposition, current);
    if cost > state.disrepute {
        return Err(InfamyError::InsufficientFunds {
            cost,
            disrepute: state.disrepute,
        });
    }

    state.disrepute -= cost;
    state.record(HistoryEntry {
        day,
        infamy_delta: 0,
        disrepute_delta: -i64::from(cost),
        reason: format!("Purchased imposition: {}", imposition.name),
        port: None,
        actor: actor.to_string(),
        manual_override: false,
    });

    Ok(PurchaseOutcome {
        id: imposition.id,
        name: imposition.name,
        cost_paid: cost,
        disrepute: state.disrepute,
        effect: imposition.effect,
    })
}

/// A catalog entry quoted against the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpositionQuote {
    pub id: &'static str,
    pub name: &'static str,
    pub base_cost: u32,
    /// Discounted price at the current threshold.
    pub display_cost: u32,
    pub effect: &'static str,
    /// Unlocked and affordable right now.
    pub available: bool,
}

/// One tier's worth of quoted catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierListing {
    pub tier: Tier,
    pub impositions: Vec<ImpositionQuote>,
}

/// Full catalog grouped by tier, quoted against `state`.
#[must_use]
pub fn list_impositions(state: &ReputationState) -> Vec<TierListing> {
    let current = state.tier();
    Tier::ALL
        .iter()
        .map(|tier| TierListing {
            tier: *tier,
            impositions: CATALOG
                .iter()
                .filter(|imposition| imposition.tier == *tier)
                .map(|imposition| {
                    let unlocked = current.is_some_and(|reached| reached >= imposition.tier);
                    let display_cost = match current {
                        Some(reached) if unlocked => effective_cost(imposition, reached),
                        _ => imposition.base_cost,
                    };
                    ImpositionQuote {
                        id: imposition.id,
                        name: imposition.name,
                        base_cost: imposition.base_cost,
                        display_cost,
                        effect: imposition.effect,
                        available: unlocked && state.disrepute >= display_cost,
                    }
                })
                .collect(),
        })
        .collect()
}
