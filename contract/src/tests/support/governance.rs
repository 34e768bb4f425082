//! In-memory stand-ins for the governance side of a relayed claim: a DAO holding a policy and a bot
//! that turns `new_proposal` calls into approved proposals when the injected funder sits on the council.

use std::collections::HashSet;

use crate::*;

pub const COUNCIL_ROLE: &str = "council";
pub const ONBOARDEE_ROLE: &str = "new-onboardee-role";
/// Deposit a DAO requires to add a proposal
pub const PROPOSAL_DEPOSIT: NearToken = NearToken::from_millinear(100);
pub const AUTO_REGISTRATION_MEMO: &str = "DAO-Bot auto-registration";
pub const ADD_PROPOSAL_GAS: Gas = Gas::from_tgas(50);

/// A DAO with a role based policy. Approved `AddMemberToRole` proposals are executed right away.
pub struct MockDao {
    policy: Policy,
    proposals: Vec<ProposalInput>,
}

impl MockDao {
    pub fn new(council: &[AccountId]) -> Self {
        Self {
            policy: Policy {
                roles: vec![
                    RolePermission {
                        name: COUNCIL_ROLE.to_string(),
                        kind: RoleKind::Group(council.iter().cloned().collect()),
                    },
                    RolePermission {
                        name: ONBOARDEE_ROLE.to_string(),
                        kind: RoleKind::Group(HashSet::new()),
                    },
                ],
            },
            proposals: vec![],
        }
    }

    pub fn add_proposal(&mut self, proposal: ProposalInput) -> u64 {
        self.proposals.push(proposal);
        (self.proposals.len() - 1) as u64
    }

    pub fn act_proposal(&mut self, id: u64, action: Action, _memo: Option<String>) -> Result<(), String> {
        let proposal = self
            .proposals
            .get(id as usize)
            .cloned()
            .ok_or_else(|| format!("no proposal {}", id))?;
        if action != Action::VoteApprove {
            return Ok(());
        }

        if let ProposalKind::AddMemberToRole { member_id, role } = proposal.kind {
            let permission = self
                .policy
                .roles
                .iter_mut()
                .find(|permission| permission.name == role)
                .ok_or_else(|| format!("no role {}", role))?;
            match &mut permission.kind {
                RoleKind::Group(members) => {
                    members.insert(member_id);
                }
                _ => return Err(format!("role {} is not a group", role)),
            }
        }
        Ok(())
    }

    pub fn get_policy(&self) -> Policy {
        self.policy.clone()
    }

    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }
}

/// Args the bot expects from a relayed `new_proposal` call
#[derive(Deserialize)]
#[serde(crate = "near_sdk::serde")]
struct NewProposalArgs {
    keypom_args: KeypomArgs,
    funder: AccountId,
    proposal: ProposalInput,
}

/// The relay receiving calls from claimed keys. It trusts the `funder` field only because the
/// claim contract injects it.
pub struct DaoBot {
    pub claim_contract: AccountId,
    pub dao: MockDao,
}

impl DaoBot {
    pub fn new(claim_contract: AccountId, council: &[AccountId]) -> Self {
        Self {
            claim_contract,
            dao: MockDao::new(council),
        }
    }

    /// Run a relayed call. Returns the ID of the proposal that was added and approved, if any.
    pub fn receive(&mut self, predecessor: &AccountId, call: &OutboundCall) -> Result<Option<u64>, String> {
        if *predecessor != self.claim_contract {
            return Err("claim contract must be the predecessor".to_string());
        }
        if call.method_name != "new_proposal" {
            return Err(format!("unknown method {}", call.method_name));
        }
        if call.attached_deposit < PROPOSAL_DEPOSIT {
            return Err("attach at least 0.1 $NEAR".to_string());
        }

        let args = parse_new_proposal(call)?;
        if args.keypom_args.funder_id_field.as_deref() != Some("funder")
            || args.keypom_args.account_id_field.as_deref()
                != Some("proposal.kind.AddMemberToRole.member_id")
        {
            return Err("funder and member must be injected by the claim contract".to_string());
        }

        if !self.dao.get_policy().is_member_of(COUNCIL_ROLE, &args.funder) {
            return Ok(None);
        }

        let id = self.dao.add_proposal(args.proposal);
        self.dao
            .act_proposal(id, Action::VoteApprove, Some(AUTO_REGISTRATION_MEMO.to_string()))?;
        Ok(Some(id))
    }

    /// The `add_proposal` call a deployed bot sends on to the DAO for a relayed call
    pub fn forward_to_dao(&self, dao: AccountId, call: &OutboundCall) -> Result<Promise, String> {
        let args = parse_new_proposal(call)?;
        Ok(ext_dao::ext(dao)
            .with_attached_deposit(PROPOSAL_DEPOSIT)
            .with_static_gas(ADD_PROPOSAL_GAS)
            .add_proposal(args.proposal))
    }
}

fn parse_new_proposal(call: &OutboundCall) -> Result<NewProposalArgs, String> {
    serde_json::from_str(&call.args).map_err(|e| e.to_string())
}
