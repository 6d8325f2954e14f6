use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Fetches full property records by id. Unknown ids fail the whole call.
pub fn run<S: DataStore, I: AsRef<str>>(store: &S, ids: &[I]) -> Result<CmdResult> {
    let mut properties = Vec::with_capacity(ids.len());
    for id in ids {
        properties.push(store.get_property(id.as_ref())?);
    }
    Ok(CmdResult::default().with_properties(properties))
}
