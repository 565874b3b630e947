//! Infamy Engine
//!
//! Platform-agnostic rules for the Infamy/Disrepute reputation economy of a
//! pirate campaign tracker. This crate provides the reputation mechanics
//! without UI, HTTP, or storage dependencies: every operation is a pure
//! function of `(&mut ReputationState, input)` returning a typed outcome or
//! a typed, recoverable failure. The hosting application loads the state,
//! invokes one operation, and persists whatever comes back, serializing
//! access per campaign at its own boundary.

pub mod adjust;
pub mod boast;
pub mod error;
pub mod impositions;
pub mod ports;
pub mod sacrifice;
pub mod state;
pub mod thresholds;

// Re-export commonly used types
pub use adjust::{AdjustInput, AdjustOutcome, adjust};
pub use boast::{
    BoastInput, BoastOutcome, BoastSkill, PLUNDER_CHECK_BONUS, REROLL_PLUNDER_COST, boast,
};
pub use error::InfamyError;
pub use impositions::{
    CATALOG, Imposition, ImpositionQuote, PurchaseOutcome, TierListing, effective_cost,
    list_impositions, purchase,
};
pub use ports::{
    FavoredPortOutcome, KNOWN_PORTS, PortVisitSummary, favored_bonus, is_known_port, port_visits,
    set_favored_port,
};
pub use sacrifice::{
    SACRIFICE_COOLDOWN_DAYS, SACRIFICE_TIER, SacrificeInput, SacrificeOutcome, sacrifice,
};
pub use state::{
    FavoredPort, FavoredPortList, HistoryEntry, PORT_TIER_CAP, PortProgress, ReputationState,
    StatusReport,
};
pub use thresholds::{
    Tier, crossed_threshold, favored_port_bonus, favored_port_slots, tier_label,
};

/// Trait for abstracting reputation persistence.
/// Platform-specific implementations should provide this.
pub trait ReputationStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the reputation record for a campaign.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be loaded.
    fn load(&self, campaign: &str) -> Result<Option<ReputationState>, Self::Error>;

    /// Save the reputation record for a campaign.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be saved.
    fn save(&self, campaign: &str, state: &ReputationState) -> Result<(), Self::Error>;
}

/// Thin load/apply/save wrapper over the pure operations, for hosts that
/// want a single seam to hang persistence on.
pub struct InfamyEngine<S>
where
    S: ReputationStorage,
{
    storage: S,
}

impl<S> InfamyEngine<S>
where
    S: ReputationStorage,
{
    /// Create an engine backed by the provided storage.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load a campaign's record, creating the empty record on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    pub fn load_or_create(&self, campaign: &str) -> Result<ReputationState, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        Ok(self
            .storage
            .load(campaign)
            .map_err(Into::into)?
            .unwrap_or_default())
    }

    /// Load, apply one operation, and save only when the operation succeeds.
    /// Rule failures (`InfamyError`) leave the stored record untouched.
    ///
    /// # Errors
    ///
    /// Returns storage failures and rule failures alike; `InfamyError` can be
    /// recovered from the `anyhow::Error` via downcast.
    pub fn apply<T>(
        &self,
        campaign: &str,
        operation: impl FnOnce(&mut ReputationState) -> Result<T, InfamyError>,
    ) -> Result<T, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        let mut state = self.load_or_create(campaign)?;
        let outcome = operation(&mut state)?;
        self.storage.save(campaign, &state).map_err(Into::into)?;
        Ok(outcome)
    }

    /// Status snapshot without writing anything back.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails.
    pub fn status(&self, campaign: &str) -> Result<StatusReport, anyhow::Error>
    where
        S::Error: Into<anyhow::Error>,
    {
        Ok(self.load_or_create(campaign)?.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::convert::Infallible;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        records: Rc<RefCell<HashMap<String, ReputationState>>>,
    }

    impl ReputationStorage for MemoryStorage {
        type Error = Infallible;

        fn load(&self, campaign: &str) -> Result<Option<ReputationState>, Self::Error> {
            Ok(self.records.borrow().get(campaign).cloned())
        }

        fn save(&self, campaign: &str, state: &ReputationState) -> Result<(), Self::Error> {
            self.records
                .borrow_mut()
                .insert(campaign.to_string(), state.clone());
            Ok(())
        }
    }

    #[test]
    fn first_load_creates_the_empty_record() {
        let engine = InfamyEngine::new(MemoryStorage::default());
        let status = engine.status("wormwood").unwrap();
        assert_eq!(status.infamy, 0);
        assert_eq!(status.threshold, None);
    }

    #[test]
    fn apply_persists_successful_operations() {
        let storage = MemoryStorage::default();
        let engine = InfamyEngine::new(storage.clone());

        let outcome = engine
            .apply("wormwood", |state| {
                adjust(
                    state,
                    &AdjustInput {
                        infamy_delta: 12,
                        disrepute_delta: 12,
                        reason: "session catch-up".to_string(),
                        day: 1,
                        actor: "dm".to_string(),
                    },
                )
            })
            .unwrap();
        assert_eq!(outcome.infamy, 12);

        let stored = storage.load("wormwood").unwrap().unwrap();
        assert_eq!(stored.infamy, 12);
        assert_eq!(stored.history.len(), 1);
    }

    #[test]
    fn apply_leaves_the_record_alone_on_rule_failure() {
        let storage = MemoryStorage::default();
        let engine = InfamyEngine::new(storage.clone());

        let err = engine
            .apply("wormwood", |state| purchase(state, "hurricane_crown", 1, "pc"))
            .unwrap_err();
        assert!(err.downcast_ref::<InfamyError>().is_some());
        assert!(storage.load("wormwood").unwrap().is_none());
    }
}
