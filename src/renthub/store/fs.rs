use super::DataStore;
use crate::error::{RentHubError, Result};
use crate::model::{LeaseAgreement, Property};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const LISTINGS_FILE: &str = "listings.json";
const LEASES_FILE: &str = "leases.json";

/// File-backed store: one JSON array per record type under a single data
/// directory. Arrays keep records in seed/creation order.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RentHubError::Io)?;
        }
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.root.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path).map_err(RentHubError::Io)?;
        let records = serde_json::from_str(&content).map_err(RentHubError::Serialization)?;
        Ok(records)
    }

    fn save<T: Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        self.ensure_dir()?;
        let path = self.root.join(file);
        let content = serde_json::to_string_pretty(records).map_err(RentHubError::Serialization)?;
        fs::write(path, content).map_err(RentHubError::Io)?;
        Ok(())
    }
}

impl DataStore for FileStore {
    fn save_property(&mut self, property: &Property) -> Result<()> {
        let mut properties: Vec<Property> = self.load(LISTINGS_FILE)?;
        match properties.iter_mut().find(|p| p.id == property.id) {
            Some(slot) => *slot = property.clone(),
            None => properties.push(property.clone()),
        }
        self.save(LISTINGS_FILE, &properties)
    }

    fn get_property(&self, id: &str) -> Result<Property> {
        self.load::<Property>(LISTINGS_FILE)?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| RentHubError::PropertyNotFound(id.to_string()))
    }

    fn list_properties(&self) -> Result<Vec<Property>> {
        self.load(LISTINGS_FILE)
    }

    fn save_lease(&mut self, lease: &LeaseAgreement) -> Result<()> {
        let mut leases: Vec<LeaseAgreement> = self.load(LEASES_FILE)?;
        match leases.iter_mut().find(|l| l.id == lease.id) {
            Some(slot) => *slot = lease.clone(),
            None => leases.push(lease.clone()),
        }
        self.save(LEASES_FILE, &leases)
    }

    fn get_lease(&self, id: &str) -> Result<LeaseAgreement> {
        self.load::<LeaseAgreement>(LEASES_FILE)?
            .into_iter()
            .find(|l| l.id == id)
            .ok_or_else(|| RentHubError::LeaseNotFound(id.to_string()))
    }

    fn list_leases(&self) -> Result<Vec<LeaseAgreement>> {
        self.load(LEASES_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use tempfile::tempdir;

    #[test]
    fn roundtrips_properties_through_disk() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        for property in seed::sample_properties() {
            store.save_property(&property).unwrap();
        }

        let listed = store.list_properties().unwrap();
        assert_eq!(listed.len(), 3);
        assert_eq!(listed[0].title, "Modern Downtown Apartment");

        let fetched = store.get_property("2").unwrap();
        assert_eq!(fetched.location.city, "San Francisco");
    }

    #[test]
    fn missing_files_read_as_empty() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path().join("never-initialized"));
        assert!(store.list_properties().unwrap().is_empty());
        assert!(store.list_leases().unwrap().is_empty());
    }

    #[test]
    fn lease_updates_persist() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut lease = seed::sample_leases().remove(0);
        store.save_lease(&lease).unwrap();

        lease.terms = "Revised terms".into();
        store.save_lease(&lease).unwrap();

        let listed = store.list_leases().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].terms, "Revised terms");
    }
}
