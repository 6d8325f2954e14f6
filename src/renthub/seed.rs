//! Built-in sample fixture used by `init` and the test suites.

use crate::model::{
    Availability, LandlordContact, LeaseAgreement, LeaseStatus, Location, Property, PropertyType,
    Signature, Signatures,
};
use chrono::{DateTime, NaiveDate, Utc};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid fixture timestamp")
}

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid fixture date")
}

pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".into(),
            title: "Modern Downtown Apartment".into(),
            description: "Beautiful 2-bedroom apartment in the heart of downtown with stunning city views and modern amenities.".into(),
            property_type: PropertyType::Apartment,
            location: Location {
                address: "123 Main Street".into(),
                city: "New York".into(),
                state: "NY".into(),
                zip: "10001".into(),
                coordinates: None,
            },
            rent: 2500,
            deposit: 2500,
            bedrooms: 2,
            bathrooms: 2,
            area: 1200,
            amenities: vec![
                "Air Conditioning".into(),
                "Gym".into(),
                "Pool".into(),
                "Parking".into(),
                "Laundry".into(),
            ],
            images: vec!["/placeholder.svg".into()],
            landlord_id: "1".into(),
            landlord: LandlordContact {
                name: "John Smith".into(),
                email: "john.smith@email.com".into(),
                phone: "+1 (555) 123-4567".into(),
            },
            availability: Availability {
                available: true,
                available_from: date("2024-02-01"),
            },
            featured: true,
            created_at: ts("2024-01-15T10:00:00Z"),
            updated_at: ts("2024-01-15T10:00:00Z"),
        },
        Property {
            id: "2".into(),
            title: "Cozy Studio Apartment".into(),
            description: "Perfect studio apartment for young professionals. Includes all utilities and high-speed internet.".into(),
            property_type: PropertyType::Studio,
            location: Location {
                address: "456 Oak Avenue".into(),
                city: "San Francisco".into(),
                state: "CA".into(),
                zip: "94102".into(),
                coordinates: None,
            },
            rent: 1800,
            deposit: 1800,
            bedrooms: 0,
            bathrooms: 1,
            area: 500,
            amenities: vec![
                "WiFi".into(),
                "Utilities Included".into(),
                "Pet Friendly".into(),
            ],
            images: vec!["/placeholder.svg".into()],
            landlord_id: "3".into(),
            landlord: LandlordContact {
                name: "Mike Davis".into(),
                email: "mike.davis@email.com".into(),
                phone: "+1 (555) 345-6789".into(),
            },
            availability: Availability {
                available: true,
                available_from: date("2024-01-25"),
            },
            featured: false,
            created_at: ts("2024-01-10T14:30:00Z"),
            updated_at: ts("2024-01-10T14:30:00Z"),
        },
        Property {
            id: "3".into(),
            title: "Luxury Family House".into(),
            description: "Spacious 4-bedroom house with garden, perfect for families. Located in a quiet neighborhood.".into(),
            property_type: PropertyType::House,
            location: Location {
                address: "789 Pine Street".into(),
                city: "Austin".into(),
                state: "TX".into(),
                zip: "73301".into(),
                coordinates: None,
            },
            rent: 3200,
            deposit: 3200,
            bedrooms: 4,
            bathrooms: 3,
            area: 2800,
            amenities: vec![
                "Garden".into(),
                "Garage".into(),
                "Air Conditioning".into(),
                "Fireplace".into(),
            ],
            images: vec!["/placeholder.svg".into()],
            landlord_id: "1".into(),
            landlord: LandlordContact {
                name: "John Smith".into(),
                email: "john.smith@email.com".into(),
                phone: "+1 (555) 123-4567".into(),
            },
            availability: Availability {
                available: true,
                available_from: date("2024-03-01"),
            },
            featured: false,
            created_at: ts("2024-01-12T09:15:00Z"),
            updated_at: ts("2024-01-12T09:15:00Z"),
        },
    ]
}

pub fn sample_leases() -> Vec<LeaseAgreement> {
    vec![LeaseAgreement {
        id: "1".into(),
        property_id: "1".into(),
        landlord_id: "1".into(),
        tenant_id: "2".into(),
        start_date: date("2024-02-01"),
        end_date: date("2025-02-01"),
        monthly_rent: 2500,
        security_deposit: 2500,
        terms: "Standard lease agreement terms and conditions...".into(),
        status: LeaseStatus::PendingApproval,
        signatures: Signatures {
            landlord: Some(Signature::default()),
            tenant: Some(Signature::default()),
        },
        created_at: ts("2024-01-20T15:00:00Z"),
        updated_at: ts("2024-01-20T15:00:00Z"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn property_ids_are_unique() {
        let props = sample_properties();
        let ids: HashSet<_> = props.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), props.len());
    }

    #[test]
    fn lease_references_a_seeded_property() {
        let props = sample_properties();
        for lease in sample_leases() {
            assert!(props.iter().any(|p| p.id == lease.property_id));
        }
    }

    #[test]
    fn exactly_one_featured_listing() {
        let featured: Vec<_> = sample_properties().into_iter().filter(|p| p.featured).collect();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "1");
    }
}
