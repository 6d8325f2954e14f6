use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Lists every property in stored order; `featured_only` narrows to listings
/// flagged for promotional placement.
pub fn run<S: DataStore>(store: &S, featured_only: bool) -> Result<CmdResult> {
    let mut properties = store.list_properties()?;
    if featured_only {
        properties.retain(|p| p.featured);
    }
    Ok(CmdResult::default().with_properties(properties))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_properties_in_seed_order() {
        let fixture = StoreFixture::new().with_sample_properties();
        let result = run(&fixture.store, false).unwrap();
        let ids: Vec<_> = result.properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn featured_flag_narrows_to_promoted_listings() {
        let fixture = StoreFixture::new().with_sample_properties();
        let result = run(&fixture.store, true).unwrap();
        assert_eq!(result.properties.len(), 1);
        assert!(result.properties[0].featured);
    }
}
