//! Infamy thresholds and the schedules keyed off them.
//!
//! Threshold requirements and the favored-port schedules are deliberate
//! in-code constants so that balance can only change through reviewed code,
//! not external assets.
use serde::{Deserialize, Serialize};

/// Named Infamy thresholds, ordered from lowest to highest requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Disgraceful,
    Despicable,
    Notorious,
    Loathsome,
    Vile,
}

impl Tier {
    /// All tiers in ascending requirement order.
    pub const ALL: [Self; 5] = [
        Self::Disgraceful,
        Self::Despicable,
        Self::Notorious,
        Self::Loathsome,
        Self::Vile,
    ];

    /// Infamy score required to reach this tier.
    #[must_use]
    pub const fn requirement(self) -> u32 {
        match self {
            Self::Disgraceful => 10,
            Self::Despicable => 20,
            Self::Notorious => 30,
            Self::Loathsome => 40,
            Self::Vile => 55,
        }
    }

    /// Zero-based position in the ascending tier order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Disgraceful => 0,
            Self::Despicable => 1,
            Self::Notorious => 2,
            Self::Loathsome => 3,
            Self::Vile => 4,
        }
    }

    /// Highest tier whose requirement is met by `infamy`, or `None` below
    /// the first threshold.
    #[must_use]
    pub fn for_infamy(infamy: u32) -> Option<Self> {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|tier| infamy >= tier.requirement())
    }

    /// Player-facing tier name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disgraceful => "Disgraceful",
            Self::Despicable => "Despicable",
            Self::Notorious => "Notorious",
            Self::Loathsome => "Loathsome",
            Self::Vile => "Vile",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Player-facing label for a possibly-absent tier.
#[must_use]
pub const fn tier_label(tier: Option<Tier>) -> &'static str {
    match tier {
        Some(tier) => tier.name(),
        None => "None",
    }
}

/// Highest threshold newly crossed when infamy moves from `before` to
/// `after`, if any.
#[must_use]
pub fn crossed_threshold(before: u32, after: u32) -> Option<Tier> {
    Tier::ALL
        .iter()
        .rev()
        .copied()
        .find(|tier| before < tier.requirement() && after >= tier.requirement())
}

/// Favored-port slots unlocked at a tier: one at Disgraceful, a second at
/// Notorious, a third at Vile.
#[must_use]
pub const fn favored_port_slots(tier: Option<Tier>) -> usize {
    match tier {
        None => 0,
        Some(Tier::Disgraceful | Tier::Despicable) => 1,
        Some(Tier::Notorious | Tier::Loathsome) => 2,
        Some(Tier::Vile) => 3,
    }
}

/// Check bonus for the favored port occupying `position` (zero-based,
/// insertion order) at the given tier.
///
/// The bonus is positional: the first port chosen always carries the largest
/// bonus and every port's bonus grows as new slots unlock (+2/+4/+6 for the
/// first port at Disgraceful/Notorious/Vile, +2/+4 for the second, +2 for
/// the third).
#[must_use]
pub const fn favored_port_bonus(position: usize, tier: Option<Tier>) -> i32 {
    let slots = favored_port_slots(tier);
    if position >= slots {
        return 0;
    }
    2 * (slots - position) as i32
}
