use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::lease::ensure_editable;
use crate::store::DataStore;
use chrono::Utc;

/// Replaces the contract body of a draft lease. Content edits outside draft
/// are rejected like any other illegal transition.
pub fn run<S: DataStore>(store: &mut S, id: &str, terms: String) -> Result<CmdResult> {
    let mut lease = store.get_lease(id)?;
    ensure_editable(&lease)?;

    lease.terms = terms;
    lease.updated_at = Utc::now();
    store.save_lease(&lease)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Lease {} updated", lease.id)));
    Ok(result.with_leases(vec![lease]))
}
