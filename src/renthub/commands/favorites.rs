use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Favorites;
use crate::store::DataStore;

/// Toggles each id in the viewer's favorites set. Ids must reference existing
/// properties; favoriting a phantom listing is rejected.
pub fn toggle<S: DataStore, I: AsRef<str>>(
    store: &S,
    favorites: &mut Favorites,
    ids: &[I],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let property = store.get_property(id.as_ref())?;
        let added = favorites.toggle(&property.id);
        let verb = if added {
            "Added to favorites"
        } else {
            "Removed from favorites"
        };
        result.add_message(CmdMessage::success(format!(
            "{} ({}): {}",
            verb, property.id, property.title
        )));
    }

    Ok(result.with_favorite_ids(favorites.ids().to_vec()))
}

/// Lists the favorited properties, in store order.
pub fn list<S: DataStore>(store: &S, favorites: &Favorites) -> Result<CmdResult> {
    let properties = store
        .list_properties()?
        .into_iter()
        .filter(|p| favorites.contains(&p.id))
        .collect();
    Ok(CmdResult::default()
        .with_properties(properties)
        .with_favorite_ids(favorites.ids().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RentHubError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn toggle_adds_then_removes() {
        let fixture = StoreFixture::new().with_sample_properties();
        let mut favorites = Favorites::new();

        let result = toggle(&fixture.store, &mut favorites, &["1"]).unwrap();
        assert_eq!(result.favorite_ids, vec!["1".to_string()]);

        let result = toggle(&fixture.store, &mut favorites, &["1"]).unwrap();
        assert!(result.favorite_ids.is_empty());
    }

    #[test]
    fn unknown_property_cannot_be_favorited() {
        let fixture = StoreFixture::new().with_sample_properties();
        let mut favorites = Favorites::new();
        assert!(matches!(
            toggle(&fixture.store, &mut favorites, &["99"]),
            Err(RentHubError::PropertyNotFound(_))
        ));
        assert!(favorites.is_empty());
    }

    #[test]
    fn list_returns_favorited_properties_in_store_order() {
        let fixture = StoreFixture::new().with_sample_properties();
        let mut favorites = Favorites::new();
        toggle(&fixture.store, &mut favorites, &["3", "1"]).unwrap();

        let result = list(&fixture.store, &favorites).unwrap();
        let ids: Vec<_> = result.properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
