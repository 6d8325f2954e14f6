use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::LeaseAgreement;
use crate::store::DataStore;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DraftParams {
    pub property_id: String,
    pub tenant_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Defaults to the property's advertised rent.
    pub monthly_rent: Option<u32>,
    /// Defaults to the property's advertised deposit.
    pub security_deposit: Option<u32>,
    pub terms: String,
}

/// Creates a new draft lease against an existing listing. The landlord is
/// taken from the listing; rent and deposit default to its advertised terms.
pub fn run<S: DataStore>(store: &mut S, params: DraftParams) -> Result<CmdResult> {
    let property = store.get_property(&params.property_id)?;

    let lease = LeaseAgreement::draft(
        property.id.clone(),
        property.landlord_id.clone(),
        params.tenant_id,
        params.start_date,
        params.end_date,
        params.monthly_rent.unwrap_or(property.rent),
        params.security_deposit.unwrap_or(property.deposit),
        params.terms,
    );
    store.save_lease(&lease)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Draft lease {} created for \"{}\"",
        lease.id, property.title
    )));
    Ok(result.with_leases(vec![lease]))
}
