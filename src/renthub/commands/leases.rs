use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Lists every lease agreement in stored order.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let leases = store.list_leases()?;
    Ok(CmdResult::default().with_leases(leases))
}

/// Fetches a single lease by id.
pub fn show<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let lease = store.get_lease(id)?;
    Ok(CmdResult::default().with_leases(vec![lease]))
}
