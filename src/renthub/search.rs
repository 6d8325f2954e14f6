//! Property filter engine.
//!
//! [`filter_properties`] is a pure function over (listings, free-text query,
//! structured filters). Every constraint is optional and the active ones are
//! ANDed together. The result is a stable subsequence of the input: relative
//! order is preserved and nothing is re-sorted.

use crate::error::{RentHubError, Result};
use crate::model::{Property, PropertyType};
use serde::{Deserialize, Serialize};

/// A transient, user-editable query descriptor. Absent fields mean "no
/// constraint"; empty vecs likewise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    pub location: Option<String>,
    pub min_rent: Option<u32>,
    pub max_rent: Option<u32>,
    pub property_types: Vec<PropertyType>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub amenities: Vec<String>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.location.is_none()
            && self.min_rent.is_none()
            && self.max_rent.is_none()
            && self.property_types.is_empty()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.amenities.is_empty()
    }

    /// Rejects contradictory bounds before any filtering happens.
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_rent, self.max_rent) {
            if min > max {
                return Err(RentHubError::Validation(format!(
                    "min rent ({}) exceeds max rent ({})",
                    min, max
                )));
            }
        }
        Ok(())
    }
}

/// Parses a rent bound supplied as raw user input.
pub fn parse_rent_bound(input: &str) -> Result<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| RentHubError::Validation(format!("'{}' is not a valid rent amount", input)))
}

/// Parses a property type name supplied as raw user input.
pub fn parse_property_type(input: &str) -> Result<PropertyType> {
    input.parse().map_err(RentHubError::Validation)
}

/// Returns the ordered subsequence of `properties` matching the query and
/// every active filter.
pub fn filter_properties(
    properties: Vec<Property>,
    query: Option<&str>,
    filters: &SearchFilters,
) -> Vec<Property> {
    properties
        .into_iter()
        .filter(|p| matches_query(p, query) && matches_filters(p, filters))
        .collect()
}

/// Case-insensitive substring match over title, description, city, state,
/// address, and amenity labels. Empty or whitespace queries match everything.
pub fn matches_query(property: &Property, query: Option<&str>) -> bool {
    let query = match query {
        Some(q) if !q.trim().is_empty() => q.to_lowercase(),
        _ => return true,
    };

    property.title.to_lowercase().contains(&query)
        || property.description.to_lowercase().contains(&query)
        || property.location.city.to_lowercase().contains(&query)
        || property.location.state.to_lowercase().contains(&query)
        || property.location.address.to_lowercase().contains(&query)
        || property
            .amenities
            .iter()
            .any(|a| a.to_lowercase().contains(&query))
}

pub fn matches_filters(property: &Property, filters: &SearchFilters) -> bool {
    if let Some(location) = &filters.location {
        let location = location.to_lowercase();
        let hit = property.location.city.to_lowercase().contains(&location)
            || property.location.state.to_lowercase().contains(&location)
            || property.location.zip.contains(&location);
        if !hit {
            return false;
        }
    }

    if let Some(min) = filters.min_rent {
        if property.rent < min {
            return false;
        }
    }
    if let Some(max) = filters.max_rent {
        if property.rent > max {
            return false;
        }
    }

    if !filters.property_types.is_empty()
        && !filters.property_types.contains(&property.property_type)
    {
        return false;
    }

    // "N+" semantics: a threshold of 0 still matches studios.
    if let Some(bedrooms) = filters.bedrooms {
        if property.bedrooms < bedrooms {
            return false;
        }
    }
    if let Some(bathrooms) = filters.bathrooms {
        if property.bathrooms < bathrooms {
            return false;
        }
    }

    // ALL requested amenities must be present, not ANY.
    filters.amenities.iter().all(|wanted| {
        let wanted = wanted.to_lowercase();
        property
            .amenities
            .iter()
            .any(|have| have.to_lowercase() == wanted)
    })
}
