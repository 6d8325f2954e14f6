use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::LeaseStatus;
use crate::store::DataStore;

/// Consistency report over the store. Nothing is repaired automatically; the
/// denormalized landlord snapshot means drift is a judgement call.
#[derive(Debug, Default)]
pub struct DoctorReport {
    /// Leases referencing a property id missing from the store.
    pub dangling_leases: Vec<String>,
    /// Leases whose landlord id disagrees with the listing's landlord.
    pub landlord_mismatches: Vec<String>,
    /// Signed/active leases missing a tenant signature.
    pub unsigned_signed_leases: Vec<String>,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.dangling_leases.is_empty()
            && self.landlord_mismatches.is_empty()
            && self.unsigned_signed_leases.is_empty()
    }
}

pub fn check<S: DataStore>(store: &S) -> Result<DoctorReport> {
    let properties = store.list_properties()?;
    let mut report = DoctorReport::default();

    for lease in store.list_leases()? {
        match properties.iter().find(|p| p.id == lease.property_id) {
            Some(property) => {
                if property.landlord_id != lease.landlord_id {
                    report.landlord_mismatches.push(lease.id.clone());
                }
            }
            None => report.dangling_leases.push(lease.id.clone()),
        }

        let signed_status = matches!(lease.status, LeaseStatus::Signed | LeaseStatus::Active);
        let tenant_signed = lease
            .signatures
            .tenant
            .as_ref()
            .map(|s| s.signed)
            .unwrap_or(false);
        if signed_status && !tenant_signed {
            report.unsigned_signed_leases.push(lease.id.clone());
        }
    }

    Ok(report)
}

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let report = check(store)?;
    let mut result = CmdResult::default();

    if report.is_clean() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        return Ok(result);
    }

    result.add_message(CmdMessage::warning("Inconsistencies found:"));
    for id in &report.dangling_leases {
        result.add_message(CmdMessage::warning(format!(
            "  - Lease {} references a property that no longer exists.",
            id
        )));
    }
    for id in &report.landlord_mismatches {
        result.add_message(CmdMessage::warning(format!(
            "  - Lease {} names a different landlord than its listing.",
            id
        )));
    }
    for id in &report.unsigned_signed_leases {
        result.add_message(CmdMessage::warning(format!(
            "  - Lease {} is {} but carries no tenant signature.",
            id, "signed/active"
        )));
    }

    Ok(result)
}
