//! Lease status machine.
//!
//! Statuses move `draft → pending_approval → approved → signed → active`,
//! with `terminated` reachable from every non-terminal status. All status and
//! signature mutation funnels through [`transition`]; any action not listed
//! for the current status is rejected with
//! [`RentHubError::InvalidTransition`] rather than silently ignored.

use crate::error::{RentHubError, Result};
use crate::model::{LeaseAgreement, LeaseStatus, Signature};
use chrono::Utc;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaseAction {
    /// draft → pending_approval
    Submit,
    /// pending_approval → approved
    Approve,
    /// approved → signed; records the tenant signature
    Sign,
    /// signed → active
    Activate,
    /// any non-terminal → terminated
    Terminate,
}

impl fmt::Display for LeaseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LeaseAction::Submit => "submit",
            LeaseAction::Approve => "approve",
            LeaseAction::Sign => "sign",
            LeaseAction::Activate => "activate",
            LeaseAction::Terminate => "terminate",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for LeaseAction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "submit" => Ok(LeaseAction::Submit),
            "approve" => Ok(LeaseAction::Approve),
            "sign" => Ok(LeaseAction::Sign),
            "activate" => Ok(LeaseAction::Activate),
            "terminate" => Ok(LeaseAction::Terminate),
            other => Err(format!("Unknown lease action: {}", other)),
        }
    }
}

fn next_status(status: LeaseStatus, action: LeaseAction) -> Option<LeaseStatus> {
    use LeaseAction::*;
    use LeaseStatus::*;

    match (status, action) {
        (Draft, Submit) => Some(PendingApproval),
        (PendingApproval, Approve) => Some(Approved),
        (Approved, Sign) => Some(Signed),
        (Signed, Activate) => Some(Active),
        (s, Terminate) if !s.is_terminal() => Some(Terminated),
        _ => None,
    }
}

/// The actions legal from the given status, in table order.
pub fn allowed_actions(status: LeaseStatus) -> Vec<LeaseAction> {
    use LeaseAction::*;
    [Submit, Approve, Sign, Activate, Terminate]
        .into_iter()
        .filter(|a| next_status(status, *a).is_some())
        .collect()
}

/// Applies `action` to the lease, updating status, signatures, and
/// `updated_at` together.
pub fn transition(lease: &mut LeaseAgreement, action: LeaseAction) -> Result<()> {
    let next = next_status(lease.status, action).ok_or_else(|| invalid(lease, action))?;

    let now = Utc::now();
    if action == LeaseAction::Sign {
        lease.signatures.tenant = Some(Signature {
            signed: true,
            signed_at: Some(now),
            signature: None,
        });
    }
    lease.status = next;
    lease.updated_at = now;
    Ok(())
}

/// Checks that the lease content may be edited (draft only). Viewing and
/// downloading are read-only in every status and need no guard.
pub fn ensure_editable(lease: &LeaseAgreement) -> Result<()> {
    if lease.status == LeaseStatus::Draft {
        Ok(())
    } else {
        Err(RentHubError::InvalidTransition {
            action: "edit".to_string(),
            status: lease.status.to_string(),
        })
    }
}

fn invalid(lease: &LeaseAgreement, action: LeaseAction) -> RentHubError {
    RentHubError::InvalidTransition {
        action: action.to_string(),
        status: lease.status.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft_lease() -> LeaseAgreement {
        LeaseAgreement::draft(
            "1".into(),
            "1".into(),
            "2".into(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1).unwrap(),
            2500,
            2500,
            "Standard lease agreement terms and conditions...".into(),
        )
    }

    fn lease_in(status: LeaseStatus) -> LeaseAgreement {
        let mut lease = draft_lease();
        lease.status = status;
        lease
    }

    #[test]
    fn happy_path_runs_draft_to_active() {
        let mut lease = draft_lease();
        transition(&mut lease, LeaseAction::Submit).unwrap();
        assert_eq!(lease.status, LeaseStatus::PendingApproval);
        transition(&mut lease, LeaseAction::Approve).unwrap();
        assert_eq!(lease.status, LeaseStatus::Approved);
        transition(&mut lease, LeaseAction::Sign).unwrap();
        assert_eq!(lease.status, LeaseStatus::Signed);
        transition(&mut lease, LeaseAction::Activate).unwrap();
        assert_eq!(lease.status, LeaseStatus::Active);
    }

    #[test]
    fn approve_from_draft_is_rejected() {
        let mut lease = draft_lease();
        let err = transition(&mut lease, LeaseAction::Approve).unwrap_err();
        assert!(matches!(err, RentHubError::InvalidTransition { .. }));
        // The rejected action must not have touched the record.
        assert_eq!(lease.status, LeaseStatus::Draft);
    }

    #[test]
    fn sign_sets_tenant_signature_with_status() {
        let mut lease = lease_in(LeaseStatus::Approved);
        transition(&mut lease, LeaseAction::Sign).unwrap();

        assert_eq!(lease.status, LeaseStatus::Signed);
        let tenant = lease.signatures.tenant.as_ref().unwrap();
        assert!(tenant.signed);
        assert!(tenant.signed_at.is_some());
        assert!(lease.signatures.landlord.is_none());
    }

    #[test]
    fn terminate_succeeds_from_every_non_terminal_status() {
        for status in [
            LeaseStatus::Draft,
            LeaseStatus::PendingApproval,
            LeaseStatus::Approved,
            LeaseStatus::Signed,
            LeaseStatus::Active,
        ] {
            let mut lease = lease_in(status);
            transition(&mut lease, LeaseAction::Terminate).unwrap();
            assert_eq!(lease.status, LeaseStatus::Terminated);
        }
    }

    #[test]
    fn terminate_from_terminated_is_rejected() {
        let mut lease = lease_in(LeaseStatus::Terminated);
        assert!(transition(&mut lease, LeaseAction::Terminate).is_err());
    }

    #[test]
    fn activate_is_only_legal_from_signed() {
        for status in [
            LeaseStatus::Draft,
            LeaseStatus::PendingApproval,
            LeaseStatus::Approved,
            LeaseStatus::Active,
            LeaseStatus::Terminated,
        ] {
            let mut lease = lease_in(status);
            assert!(transition(&mut lease, LeaseAction::Activate).is_err());
        }
    }

    #[test]
    fn allowed_actions_match_the_table() {
        assert_eq!(
            allowed_actions(LeaseStatus::Draft),
            vec![LeaseAction::Submit, LeaseAction::Terminate]
        );
        assert_eq!(
            allowed_actions(LeaseStatus::Approved),
            vec![LeaseAction::Sign, LeaseAction::Terminate]
        );
        assert!(allowed_actions(LeaseStatus::Terminated).is_empty());
    }

    #[test]
    fn editing_is_draft_only() {
        assert!(ensure_editable(&draft_lease()).is_ok());
        assert!(ensure_editable(&lease_in(LeaseStatus::Signed)).is_err());
    }
}
