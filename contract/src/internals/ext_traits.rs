use std::collections::HashSet;

use near_sdk::ext_contract;

use crate::*;

/// Proposal submitted to a governance contract
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct ProposalInput {
    /// Description of this proposal.
    pub description: String,
    /// Kind of proposal with relevant information.
    pub kind: ProposalKind,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum ProposalKind {
    /// Add member to given role in the policy.
    AddMemberToRole { member_id: AccountId, role: String },
    /// Remove member from given role in the policy.
    RemoveMemberFromRole { member_id: AccountId, role: String },
    /// Just a signaling vote, with no execution.
    Vote,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct Policy {
    /// List of roles and permissions for them in the current policy.
    pub roles: Vec<RolePermission>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub struct RolePermission {
    /// Name of the role to display to the user.
    pub name: String,
    /// Kind of the role: defines which users this permissions apply.
    pub kind: RoleKind,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum RoleKind {
    /// Matches everyone, who is not matched by other roles.
    Everyone,
    /// Member greater or equal than given balance.
    Member(U128),
    /// Set of accounts.
    Group(HashSet<AccountId>),
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(crate = "near_sdk::serde")]
pub enum Action {
    /// Action to add proposal. Used internally.
    AddProposal,
    /// Action to remove given proposal.
    RemoveProposal,
    /// Vote to approve given proposal.
    VoteApprove,
    /// Vote to reject given proposal.
    VoteReject,
    /// Vote to remove given proposal (because it's spam).
    VoteRemove,
    /// Finalize proposal.
    Finalize,
}

impl Policy {
    /// Whether an account is listed in the group of a role
    pub fn is_member_of(&self, role: &str, account_id: &AccountId) -> bool {
        self.roles.iter().any(|permission| {
            permission.name == role
                && matches!(&permission.kind, RoleKind::Group(members) if members.contains(account_id))
        })
    }
}

/// Governance contracts that relayed calls typically end up at. Relays decide whether to accept a
/// proposal based on the funder identity injected into their args.
#[ext_contract(ext_dao)]
pub trait GovernanceContract {
    fn add_proposal(&mut self, proposal: ProposalInput) -> u64;
    fn act_proposal(&mut self, id: u64, action: Action, memo: Option<String>);
    fn get_policy(&self) -> Policy;
}
