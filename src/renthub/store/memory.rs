use super::DataStore;
use crate::error::{RentHubError, Result};
use crate::model::{LeaseAgreement, Property};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    properties: Vec<Property>,
    leases: Vec<LeaseAgreement>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn save_property(&mut self, property: &Property) -> Result<()> {
        match self.properties.iter_mut().find(|p| p.id == property.id) {
            Some(slot) => *slot = property.clone(),
            None => self.properties.push(property.clone()),
        }
        Ok(())
    }

    fn get_property(&self, id: &str) -> Result<Property> {
        self.properties
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RentHubError::PropertyNotFound(id.to_string()))
    }

    fn list_properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    fn save_lease(&mut self, lease: &LeaseAgreement) -> Result<()> {
        match self.leases.iter_mut().find(|l| l.id == lease.id) {
            Some(slot) => *slot = lease.clone(),
            None => self.leases.push(lease.clone()),
        }
        Ok(())
    }

    fn get_lease(&self, id: &str) -> Result<LeaseAgreement> {
        self.leases
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| RentHubError::LeaseNotFound(id.to_string()))
    }

    fn list_leases(&self) -> Result<Vec<LeaseAgreement>> {
        Ok(self.leases.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::seed;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// The three seeded listings.
        pub fn with_sample_properties(mut self) -> Self {
            for property in seed::sample_properties() {
                self.store.save_property(&property).unwrap();
            }
            self
        }

        /// The seeded pending-approval lease.
        pub fn with_sample_leases(mut self) -> Self {
            for lease in seed::sample_leases() {
                self.store.save_lease(&lease).unwrap();
            }
            self
        }

        pub fn with_lease_in(mut self, status: crate::model::LeaseStatus) -> Self {
            let mut lease = seed::sample_leases().remove(0);
            lease.id = format!("lease-{}", status);
            lease.status = status;
            self.store.save_lease(&lease).unwrap();
            self
        }
    }
}
