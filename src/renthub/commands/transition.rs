use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lease::{transition, LeaseAction};
use crate::store::DataStore;

/// Applies a lease action through the status machine and persists the result.
/// Off-table actions are rejected before anything is written.
pub fn run<S: DataStore>(store: &mut S, id: &str, action: LeaseAction) -> Result<CmdResult> {
    let mut lease = store.get_lease(id)?;
    transition(&mut lease, action)?;
    store.save_lease(&lease)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Lease {} is now {}",
        lease.id,
        lease.status.label()
    )));
    Ok(result.with_leases(vec![lease]))
}
