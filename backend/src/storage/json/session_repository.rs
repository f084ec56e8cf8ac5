//! # Session Repository
//!
//! Persists the most recently generated slip so that save, print, and
//! download can run as separate invocations. The original kept this state on
//! the page between clicks; here it lives under its own key-value entry.

use anyhow::Result;
use log::{debug, warn};
use std::sync::Arc;

use crate::domain::models::CurrentSlip;
use crate::storage::traits::{KeyValueStore, SessionStorage};

/// Key-value entry holding the current slip
pub const CURRENT_SLIP_KEY: &str = "current_slip";

#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl SessionStorage for SessionRepository {
    fn store_current_slip(&self, slip: &CurrentSlip) -> Result<()> {
        let encoded = serde_json::to_string(slip)?;
        self.store.set(CURRENT_SLIP_KEY, &encoded)?;
        debug!("Stored current slip for '{}'", slip.data.name);
        Ok(())
    }

    fn get_current_slip(&self) -> Result<Option<CurrentSlip>> {
        let raw = match self.store.get(CURRENT_SLIP_KEY)? {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match serde_json::from_str(&raw) {
            Ok(slip) => Ok(Some(slip)),
            Err(e) => {
                warn!("Stored current slip is unreadable, treating as absent: {}", e);
                Ok(None)
            }
        }
    }

    fn clear_current_slip(&self) -> Result<()> {
        self.store.remove(CURRENT_SLIP_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::FeeEntry;
    use crate::storage::json::test_utils::TestHelper;

    fn sample_slip() -> CurrentSlip {
        CurrentSlip {
            data: FeeEntry {
                name: "Ali Khan".to_string(),
                roll: "42".to_string(),
                cls: "8-B".to_string(),
                tuition: 5000.0,
                additional: 200.0,
                notes: String::new(),
                facilities: vec![],
            },
            document: "<div>slip</div>".to_string(),
        }
    }

    #[test]
    fn current_slip_round_trips_across_repository_instances() {
        let helper = TestHelper::new().unwrap();
        helper.session_repo.store_current_slip(&sample_slip()).unwrap();

        let reopened = SessionRepository::new(helper.store());
        let loaded = reopened.get_current_slip().unwrap().unwrap();
        assert_eq!(loaded, sample_slip());
    }

    #[test]
    fn absent_slip_is_none() {
        let helper = TestHelper::new().unwrap();
        assert!(helper.session_repo.get_current_slip().unwrap().is_none());
    }

    #[test]
    fn corrupt_slip_is_treated_as_absent() {
        let helper = TestHelper::new().unwrap();
        helper.connection.set(CURRENT_SLIP_KEY, "{broken").unwrap();

        assert!(helper.session_repo.get_current_slip().unwrap().is_none());
    }

    #[test]
    fn clear_drops_the_slip() {
        let helper = TestHelper::new().unwrap();
        helper.session_repo.store_current_slip(&sample_slip()).unwrap();
        helper.session_repo.clear_current_slip().unwrap();

        assert!(helper.session_repo.get_current_slip().unwrap().is_none());
    }
}
