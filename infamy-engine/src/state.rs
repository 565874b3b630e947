//! The per-campaign reputation record and its append-only audit ledger.
//!
//! `ReputationState` is the single value every operation reads and rewrites.
//! The engine performs no I/O: callers load the record, invoke one operation,
//! and persist whatever comes back.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;

use crate::thresholds::{Tier, favored_port_bonus};

/// Favored ports in insertion order. At most three slots ever unlock.
pub type FavoredPortList = SmallVec<[String; 3]>;

/// Infamy earned at one port, per threshold band. Each band caps at
/// [`PORT_TIER_CAP`]; a port that has given its five points at the current
/// band gives nothing more until the next threshold is reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortProgress {
    /// Points earned before the first threshold was reached.
    #[serde(default)]
    pub unranked: u8,
    #[serde(default)]
    pub disgraceful: u8,
    #[serde(default)]
    pub despicable: u8,
    #[serde(default)]
    pub notorious: u8,
    #[serde(default)]
    pub loathsome: u8,
    #[serde(default)]
    pub vile: u8,
}

/// Maximum Infamy any single port yields per threshold band.
pub const PORT_TIER_CAP: u8 = 5;

impl PortProgress {
    /// Points earned in the band for `tier`.
    #[must_use]
    pub const fn get(&self, tier: Option<Tier>) -> u8 {
        match tier {
            None => self.unranked,
            Some(Tier::Disgraceful) => self.disgraceful,
            Some(Tier::Despicable) => self.despicable,
            Some(Tier::Notorious) => self.notorious,
            Some(Tier::Loathsome) => self.loathsome,
            Some(Tier::Vile) => self.vile,
        }
    }

    /// Credits `amount` points to the band for `tier`, saturating at the cap.
    pub const fn add(&mut self, tier: Option<Tier>, amount: u8) {
        let slot = match tier {
            None => &mut self.unranked,
            Some(Tier::Disgraceful) => &mut self.disgraceful,
            Some(Tier::Despicable) => &mut self.despicable,
            Some(Tier::Notorious) => &mut self.notorious,
            Some(Tier::Loathsome) => &mut self.loathsome,
            Some(Tier::Vile) => &mut self.vile,
        };
        *slot = (*slot).saturating_add(amount);
        if *slot > PORT_TIER_CAP {
            *slot = PORT_TIER_CAP;
        }
    }

    /// Room left in the band for `tier`.
    #[must_use]
    pub const fn remaining(&self, tier: Option<Tier>) -> u8 {
        PORT_TIER_CAP.saturating_sub(self.get(tier))
    }
}

/// One immutable entry in the audit ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Campaign day the entry was recorded on.
    pub day: i64,
    pub infamy_delta: i64,
    pub disrepute_delta: i64,
    pub reason: String,
    #[serde(default)]
    pub port: Option<String>,
    /// Who triggered the operation (username or character name).
    pub actor: String,
    /// Set only by the DM adjustment operation.
    #[serde(default)]
    pub manual_override: bool,
}

/// A favored port together with its current positional bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoredPort {
    pub name: String,
    pub bonus: i32,
}

/// Snapshot returned to status queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub infamy: u32,
    pub disrepute: u32,
    pub threshold: Option<Tier>,
    pub favored_ports: Vec<FavoredPort>,
}

/// Per-campaign reputation record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReputationState {
    pub infamy: u32,
    pub disrepute: u32,
    #[serde(default)]
    pub favored_ports: FavoredPortList,
    #[serde(default)]
    pub port_progress: BTreeMap<String, PortProgress>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Campaign day of the most recent boast attempt, successful or not.
    #[serde(default)]
    pub last_boast_day: Option<i64>,
}

impl ReputationState {
    /// Fresh record for a newly established party.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current threshold, if the first one has been reached.
    #[must_use]
    pub fn tier(&self) -> Option<Tier> {
        Tier::for_infamy(self.infamy)
    }

    /// Favored ports with their live positional bonuses.
    #[must_use]
    pub fn favored_ports_with_bonuses(&self) -> Vec<FavoredPort> {
        let tier = self.tier();
        self.favored_ports
            .iter()
            .enumerate()
            .map(|(position, name)| FavoredPort {
                name: name.clone(),
                bonus: favored_port_bonus(position, tier),
            })
            .collect()
    }

    /// Status snapshot for display.
    #[must_use]
    pub fn status(&self) -> StatusReport {
        StatusReport {
            infamy: self.infamy,
            disrepute: self.disrepute,
            threshold: self.tier(),
            favored_ports: self.favored_ports_with_bonuses(),
        }
    }

    /// Progress record for a port, creating the zero record on first visit.
    pub(crate) fn progress_mut(&mut self, port: &str) -> &mut PortProgress {
        self.port_progress.entry(port.to_string()).or_default()
    }

    /// Progress for a port, zero if never visited.
    #[must_use]
    pub fn progress(&self, port: &str) -> PortProgress {
        self.port_progress.get(port).copied().unwrap_or_default()
    }

    /// Appends an audit entry. The ledger is append-only; nothing else in the
    /// engine touches it.
    pub(crate) fn record(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }
}
