//! Known ports of the Shackles and the favored-port mechanic.
use serde::Serialize;

use crate::error::InfamyError;
use crate::state::{FavoredPort, PortProgress, ReputationState};
use crate::thresholds::{favored_port_bonus, favored_port_slots, tier_label};

/// Every port where the crew can boast. Matches the campaign's port roster.
pub const KNOWN_PORTS: [&str; 56] = [
    "Alendruan Harbor",
    "Arena",
    "Banukmaud",
    "Beachcomber",
    "Blackblood Cay",
    "Bogsbridge",
    "Chalk Harbor",
    "Cho-Tzu",
    "Colvaas Gibbet",
    "Downpour",
    "Dragonsthrall",
    "Drenchport",
    "Drowning Rock",
    "Falchion Point",
    "Fort Benbem",
    "Fort Holiday",
    "Ganagsau",
    "Genzei",
    "Ghrinitshahara",
    "Goatshead",
    "Haigui Wan",
    "Halabad",
    "Heggapnod",
    "Hell Harbor",
    "Heslandaena",
    "Kora",
    "Kukgukmol",
    "Lilywhite",
    "Little Oppara",
    "Maidenspool",
    "Mezdrubal",
    "Moak Harbor",
    "Myscurial",
    "Neruma",
    "Ngozu",
    "Ollo",
    "Oyster Cay",
    "Parley Point",
    "Peshaka Naeu",
    "Pex",
    "Plumetown",
    "Port Peril",
    "Queen Bes",
    "Quent",
    "Raketooth",
    "Rapier Bay",
    "Rickety's Squibs",
    "Robu",
    "Rumbutter",
    "Slipcove",
    "Tyvas-Devas",
    "Vezhnu",
    "Vilelock",
    "Yelligo Wharf",
    "Zeibo",
    "Zhenbarghua",
];

/// Whether `name` is a port the engine recognizes.
#[must_use]
pub fn is_known_port(name: &str) -> bool {
    KNOWN_PORTS.contains(&name)
}

/// Current boast bonus for `port`, 0 unless it is a favored port.
#[must_use]
pub fn favored_bonus(state: &ReputationState, port: &str) -> i32 {
    state
        .favored_ports
        .iter()
        .position(|favored| favored == port)
        .map_or(0, |position| favored_port_bonus(position, state.tier()))
}

/// Result of marking a new favored port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoredPortOutcome {
    pub port: String,
    /// Bonus assigned to the slot just filled.
    pub bonus: i32,
    /// Full roster with live bonuses, first-chosen port first.
    pub favored_ports: Vec<FavoredPort>,
}

/// Marks `port` as a favored port in the next open slot.
///
/// # Errors
///
/// `NotFound` for an unrecognized port, `Precondition` when the port is
/// already favored or every slot unlocked at the current threshold is taken.
pub fn set_favored_port(
    state: &mut ReputationState,
    port: &str,
) -> Result<FavoredPortOutcome, InfamyError> {
    if !is_known_port(port) {
        return Err(InfamyError::unknown_port(port));
    }
    if state.favored_ports.iter().any(|favored| favored == port) {
        return Err(InfamyError::precondition(format!(
            "{port} is already a favored port"
        )));
    }

    let tier = state.tier();
    let slots = favored_port_slots(tier);
    let position = state.favored_ports.len();
    if position >= slots {
        return Err(InfamyError::precondition(format!(
            "only {slots} favored port(s) are unlocked at the {} threshold",
            tier_label(tier)
        )));
    }

    state.favored_ports.push(port.to_string());
    Ok(FavoredPortOutcome {
        port: port.to_string(),
        bonus: favored_port_bonus(position, tier),
        favored_ports: state.favored_ports_with_bonuses(),
    })
}

/// Infamy earned at one port across every threshold band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortVisitSummary {
    pub port: String,
    pub earned: PortProgress,
}

/// Per-port earnings, ordered by port name.
#[must_use]
pub fn port_visits(state: &ReputationState) -> Vec<PortVisitSummary> {
    state
        .port_progress
        .iter()
        .map(|(port, earned)| PortVisitSummary {
            port: port.clone(),
            earned: *earned,
        })
        .collect()
}
