//! HR team invitations.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{HrMember, HrRole, MemberId, MembershipStatus, Permission};

/// Role picked in the invite form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteKind {
    #[default]
    Hr,
    Manager,
}

impl InviteKind {
    pub const fn role(self) -> HrRole {
        match self {
            InviteKind::Hr => HrRole::HrCoordinator,
            InviteKind::Manager => HrRole::HrManager,
        }
    }

    pub fn permissions(self) -> Vec<Permission> {
        match self {
            InviteKind::Hr => vec![Permission::ViewCandidates, Permission::ContactCandidates],
            InviteKind::Manager => vec![
                Permission::ViewCandidates,
                Permission::ContactCandidates,
                Permission::ManageJobs,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InviteError {
    #[error("Please enter an email address")]
    MissingEmail,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
}

impl TeamStats {
    pub fn tally(members: &[HrMember]) -> Self {
        let count = |status: MembershipStatus| {
            members
                .iter()
                .filter(|member| member.status == status)
                .count()
        };
        Self {
            total: members.len(),
            active: count(MembershipStatus::Active),
            pending: count(MembershipStatus::Pending),
        }
    }
}

static MEMBER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_member_id() -> MemberId {
    let id = MEMBER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    MemberId(format!("hr-inv-{id:06}"))
}

/// Pending member for `email`, named after the address's local part.
pub fn invitation(email: &str, kind: InviteKind, today: NaiveDate) -> Result<HrMember, InviteError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(InviteError::MissingEmail);
    }
    let name = email.split('@').next().unwrap_or(email).to_string();

    Ok(HrMember {
        id: next_member_id(),
        name,
        email: email.to_string(),
        role: kind.role(),
        joined_on: today,
        status: MembershipStatus::Pending,
        permissions: kind.permissions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 20).expect("valid date")
    }

    #[test]
    fn hr_invite_creates_pending_coordinator() {
        let member = invitation("jane.roe@techcorp.com", InviteKind::Hr, today()).expect("invite");
        assert_eq!(member.name, "jane.roe");
        assert_eq!(member.role, HrRole::HrCoordinator);
        assert_eq!(member.status, MembershipStatus::Pending);
        assert_eq!(
            member.permissions,
            vec![Permission::ViewCandidates, Permission::ContactCandidates]
        );
        assert_eq!(member.joined_on, today());
    }

    #[test]
    fn manager_invite_can_manage_jobs() {
        let member = invitation("lead@techcorp.com", InviteKind::Manager, today()).expect("invite");
        assert_eq!(member.role, HrRole::HrManager);
        assert!(member.permissions.contains(&Permission::ManageJobs));
        assert!(!member.permissions.contains(&Permission::ManageTeam));
    }

    #[test]
    fn blank_email_is_rejected() {
        assert_eq!(
            invitation("   ", InviteKind::Hr, today()),
            Err(InviteError::MissingEmail)
        );
    }

    #[test]
    fn stats_count_by_membership_status() {
        let mut pending = invitation("a@techcorp.com", InviteKind::Hr, today()).expect("invite");
        let mut active = pending.clone();
        active.status = MembershipStatus::Active;
        pending.status = MembershipStatus::Pending;
        let stats = TeamStats::tally(&[active, pending]);
        assert_eq!(
            stats,
            TeamStats {
                total: 2,
                active: 1,
                pending: 1
            }
        );
    }
}
