use crate::commands::{CmdMessage, CmdResult, RentHubPaths};
use crate::error::Result;
use crate::seed;
use crate::store::DataStore;
use std::fs;

/// Creates the data directory and seeds the sample fixture when the store is
/// empty. Re-running against a populated store is a no-op.
pub fn run<S: DataStore>(store: &mut S, paths: &RentHubPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data)?;
    let mut result = CmdResult::default();

    if !store.list_properties()?.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Store at {} already initialized.",
            paths.data.display()
        )));
        return Ok(result);
    }

    let properties = seed::sample_properties();
    let leases = seed::sample_leases();
    for property in &properties {
        store.save_property(property)?;
    }
    for lease in &leases {
        store.save_lease(lease)?;
    }

    result.add_message(CmdMessage::success(format!(
        "Initialized renthub store at {} with {} listing(s) and {} lease(s)",
        paths.data.display(),
        properties.len(),
        leases.len()
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use tempfile::tempdir;

    #[test]
    fn seeds_an_empty_store() {
        let dir = tempdir().unwrap();
        let paths = RentHubPaths {
            data: dir.path().join("store"),
        };
        let mut store = InMemoryStore::new();

        run(&mut store, &paths).unwrap();

        assert!(paths.data.exists());
        assert_eq!(store.list_properties().unwrap().len(), 3);
        assert_eq!(store.list_leases().unwrap().len(), 1);
    }

    #[test]
    fn second_init_does_not_duplicate_the_seed() {
        let dir = tempdir().unwrap();
        let paths = RentHubPaths {
            data: dir.path().to_path_buf(),
        };
        let mut store = InMemoryStore::new();

        run(&mut store, &paths).unwrap();
        run(&mut store, &paths).unwrap();

        assert_eq!(store.list_properties().unwrap().len(), 3);
    }
}
