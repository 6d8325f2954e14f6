use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::{filter_properties, SearchFilters};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &S,
    query: Option<&str>,
    filters: &SearchFilters,
) -> Result<CmdResult> {
    filters.validate()?;

    let properties = store.list_properties()?;
    let matched = filter_properties(properties, query, filters);

    let mut result = CmdResult::default();
    let summary = match query {
        Some(q) if !q.trim().is_empty() => {
            format!("{} properties found for \"{}\"", matched.len(), q.trim())
        }
        _ => format!("{} properties found", matched.len()),
    };
    result.add_message(CmdMessage::info(summary));
    Ok(result.with_properties(matched))
}
