use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RentHubError, Result};
use crate::model::{LeaseAgreement, Property, Signature};
use crate::store::DataStore;
use std::fs;
use std::path::PathBuf;

/// Renders a lease document to a text file. Read-only: available in every
/// status and never mutates the record.
pub fn run<S: DataStore>(store: &S, id: &str, out: Option<PathBuf>) -> Result<CmdResult> {
    let lease = store.get_lease(id)?;
    // The listing may have been removed out from under the lease (doctor
    // reports that); render with what we have.
    let property = store.get_property(&lease.property_id).ok();

    let path = out.unwrap_or_else(|| PathBuf::from(format!("lease-{}.txt", lease.id)));
    fs::write(&path, render_document(&lease, property.as_ref())).map_err(RentHubError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Lease {} written to {}",
        lease.id,
        path.display()
    )));
    Ok(result.with_files(vec![path]))
}

fn signature_line(party: &str, signature: Option<&Signature>) -> String {
    match signature {
        Some(s) if s.signed => {
            let when = s
                .signed_at
                .map(|t| t.format(" on %Y-%m-%d").to_string())
                .unwrap_or_default();
            format!("{}: signed{}", party, when)
        }
        _ => format!("{}: pending", party),
    }
}

fn render_document(lease: &LeaseAgreement, property: Option<&Property>) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("LEASE AGREEMENT #{}\n", lease.id));
    doc.push_str(&format!("Status: {}\n\n", lease.status.label()));

    match property {
        Some(p) => {
            doc.push_str(&format!("Property: {} ({})\n", p.title, p.id));
            doc.push_str(&format!(
                "Address: {}, {}, {} {}\n",
                p.location.address, p.location.city, p.location.state, p.location.zip
            ));
            doc.push_str(&format!(
                "Landlord: {} <{}>\n",
                p.landlord.name, p.landlord.email
            ));
        }
        None => {
            doc.push_str(&format!("Property: {} (listing unavailable)\n", lease.property_id));
            doc.push_str(&format!("Landlord: {}\n", lease.landlord_id));
        }
    }
    doc.push_str(&format!("Tenant: {}\n\n", lease.tenant_id));

    doc.push_str(&format!(
        "Term: {} through {}\n",
        lease.start_date, lease.end_date
    ));
    doc.push_str(&format!("Monthly rent: ${}\n", lease.monthly_rent));
    doc.push_str(&format!("Security deposit: ${}\n\n", lease.security_deposit));

    doc.push_str("TERMS\n");
    doc.push_str(&lease.terms);
    doc.push_str("\n\nSIGNATURES\n");
    doc.push_str(&signature_line(
        "Landlord",
        lease.signatures.landlord.as_ref(),
    ));
    doc.push('\n');
    doc.push_str(&signature_line("Tenant", lease.signatures.tenant.as_ref()));
    doc.push('\n');
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lease::{transition, LeaseAction};
    use crate::model::LeaseStatus;
    use crate::store::memory::fixtures::StoreFixture;
    use tempfile::tempdir;

    #[test]
    fn writes_the_rendered_document() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("lease.txt");
        let fixture = StoreFixture::new()
            .with_sample_properties()
            .with_sample_leases();

        run(&fixture.store, "1", Some(out.clone())).unwrap();

        let doc = fs::read_to_string(out).unwrap();
        assert!(doc.contains("LEASE AGREEMENT #1"));
        assert!(doc.contains("Modern Downtown Apartment"));
        assert!(doc.contains("Monthly rent: $2500"));
        assert!(doc.contains("Tenant: pending"));
    }

    #[test]
    fn download_never_mutates_the_lease() {
        let dir = tempdir().unwrap();
        let fixture = StoreFixture::new()
            .with_sample_properties()
            .with_sample_leases();

        run(&fixture.store, "1", Some(dir.path().join("l.txt"))).unwrap();

        let stored = fixture.store.get_lease("1").unwrap();
        assert_eq!(stored.status, LeaseStatus::PendingApproval);
    }

    #[test]
    fn signed_lease_document_shows_signature_date() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("signed.txt");
        let mut fixture = StoreFixture::new()
            .with_sample_properties()
            .with_sample_leases();

        let mut lease = fixture.store.get_lease("1").unwrap();
        transition(&mut lease, LeaseAction::Approve).unwrap();
        transition(&mut lease, LeaseAction::Sign).unwrap();
        fixture.store.save_lease(&lease).unwrap();

        run(&fixture.store, "1", Some(out.clone())).unwrap();
        let doc = fs::read_to_string(out).unwrap();
        assert!(doc.contains("Tenant: signed on"));
    }
}
