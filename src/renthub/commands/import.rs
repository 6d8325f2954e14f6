use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RentHubError, Result};
use crate::model::{LeaseAgreement, Property};
use crate::store::DataStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Ingests property or lease records from JSON files. Each file may hold a
/// single record or an array; the record kind is sniffed from the payload.
pub fn run<S: DataStore>(store: &mut S, paths: Vec<PathBuf>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut imported_count = 0;

    for path in paths {
        if !path.is_file() {
            result.add_message(CmdMessage::warning(format!(
                "Path not found: {}",
                path.display()
            )));
            continue;
        }

        match import_file(store, &path) {
            Ok(count) => {
                imported_count += count;
                result.add_message(CmdMessage::info(format!("Imported: {}", path.display())));
            }
            Err(_) => {
                result.add_message(CmdMessage::warning(format!(
                    "Failed to import: {}",
                    path.display()
                )));
            }
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Total imported: {}",
        imported_count
    )));
    Ok(result)
}

fn import_file<S: DataStore>(store: &mut S, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path).map_err(RentHubError::Io)?;

    if let Ok(properties) = serde_json::from_str::<Vec<Property>>(&content) {
        let count = properties.len();
        for property in &properties {
            store.save_property(property)?;
        }
        return Ok(count);
    }
    if let Ok(property) = serde_json::from_str::<Property>(&content) {
        store.save_property(&property)?;
        return Ok(1);
    }
    if let Ok(leases) = serde_json::from_str::<Vec<LeaseAgreement>>(&content) {
        let count = leases.len();
        for lease in &leases {
            store.save_lease(lease)?;
        }
        return Ok(count);
    }
    if let Ok(lease) = serde_json::from_str::<LeaseAgreement>(&content) {
        store.save_lease(&lease)?;
        return Ok(1);
    }

    Err(RentHubError::Store(format!(
        "Unrecognized record format: {}",
        path.display()
    )))
}
