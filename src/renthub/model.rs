use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
    Condo,
    Studio,
    Room,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Condo => "condo",
            PropertyType::Studio => "studio",
            PropertyType::Room => "room",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            "condo" => Ok(PropertyType::Condo),
            "studio" => Ok(PropertyType::Studio),
            "room" => Ok(PropertyType::Room),
            other => Err(format!("Unknown property type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub coordinates: Option<(f64, f64)>,
}

/// Denormalized landlord snapshot carried on each listing. Edits to the
/// landlord's contact details do not propagate here; `doctor` reports drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LandlordContact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Availability {
    pub available: bool,
    pub available_from: NaiveDate,
}

/// A rental listing. The id is an opaque string, unique within the store and
/// immutable for the lifetime of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub description: String,
    pub property_type: PropertyType,
    pub location: Location,
    /// Monthly rent in whole dollars.
    pub rent: u32,
    pub deposit: u32,
    /// 0 bedrooms = studio.
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Square feet.
    pub area: u32,
    /// Display order is insertion order; matching treats this as a set.
    pub amenities: Vec<String>,
    /// First image is the primary one.
    pub images: Vec<String>,
    pub landlord_id: String,
    pub landlord: LandlordContact,
    pub availability: Availability,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    Draft,
    PendingApproval,
    Approved,
    Signed,
    Active,
    Terminated,
}

impl LeaseStatus {
    /// Terminated is the only terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LeaseStatus::Terminated)
    }

    /// Human-readable label for listings and badges.
    pub fn label(&self) -> &'static str {
        match self {
            LeaseStatus::Draft => "Draft",
            LeaseStatus::PendingApproval => "Pending Approval",
            LeaseStatus::Approved => "Approved",
            LeaseStatus::Signed => "Signed",
            LeaseStatus::Active => "Active",
            LeaseStatus::Terminated => "Terminated",
        }
    }
}

impl fmt::Display for LeaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaseStatus::Draft => "draft",
            LeaseStatus::PendingApproval => "pending_approval",
            LeaseStatus::Approved => "approved",
            LeaseStatus::Signed => "signed",
            LeaseStatus::Active => "active",
            LeaseStatus::Terminated => "terminated",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub signed: bool,
    pub signed_at: Option<DateTime<Utc>>,
    /// Opaque signature blob; unused by the fixture but round-tripped.
    pub signature: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Signatures {
    pub landlord: Option<Signature>,
    pub tenant: Option<Signature>,
}

/// A contractual record between one property, one landlord, one tenant.
///
/// `status` and `signatures` must only be mutated through
/// [`crate::lease::transition`]; every other code path treats them as
/// read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaseAgreement {
    pub id: String,
    pub property_id: String,
    pub landlord_id: String,
    pub tenant_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub monthly_rent: u32,
    pub security_deposit: u32,
    pub terms: String,
    pub status: LeaseStatus,
    pub signatures: Signatures,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LeaseAgreement {
    /// New draft lease between the given parties.
    #[allow(clippy::too_many_arguments)]
    pub fn draft(
        property_id: String,
        landlord_id: String,
        tenant_id: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        monthly_rent: u32,
        security_deposit: u32,
        terms: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            property_id,
            landlord_id,
            tenant_id,
            start_date,
            end_date,
            monthly_rent,
            security_deposit,
            terms,
            status: LeaseStatus::Draft,
            signatures: Signatures::default(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// The current viewer's favorited property ids. Session-scoped: one CLI
/// invocation is one session, nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.ids.iter().any(|id| id == property_id)
    }

    /// Toggles the id in the set. Returns true when the id is now favorited.
    pub fn toggle(&mut self, property_id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| id == property_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(property_id.to_string());
            true
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
