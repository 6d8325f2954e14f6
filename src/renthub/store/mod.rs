//! Storage layer.
//!
//! The [`DataStore`] trait keeps the command layer decoupled from
//! persistence. Two implementations ship with the crate:
//!
//! - [`fs::FileStore`]: JSON files under a single data directory
//!   (`listings.json`, `leases.json`), used by the CLI binary.
//! - [`memory::InMemoryStore`]: no persistence, used by the test suites.
//!
//! Both are `Vec`-backed and replace records in place on save, so the order
//! records were seeded or created in is the order they list in. The filter
//! engine relies on that: it returns a stable subsequence of whatever the
//! store yields.

use crate::error::Result;
use crate::model::{LeaseAgreement, Property};

pub mod fs;
pub mod memory;

/// Abstract interface for listing and lease storage.
pub trait DataStore {
    /// Save a property (create or replace by id, preserving position)
    fn save_property(&mut self, property: &Property) -> Result<()>;

    /// Get a property by id
    fn get_property(&self, id: &str) -> Result<Property>;

    /// List all properties in stored order
    fn list_properties(&self) -> Result<Vec<Property>>;

    /// Save a lease (create or replace by id, preserving position)
    fn save_lease(&mut self, lease: &LeaseAgreement) -> Result<()>;

    /// Get a lease by id
    fn get_lease(&self, id: &str) -> Result<LeaseAgreement>;

    /// List all leases in stored order
    fn list_leases(&self) -> Result<Vec<LeaseAgreement>>;
}
