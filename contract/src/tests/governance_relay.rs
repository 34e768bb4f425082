use super::support::governance::*;
use super::test_utils::*;
use crate::*;

fn dao_bot() -> AccountId {
    account("daobot.near")
}

fn dao() -> AccountId {
    account("dao.near")
}

/// The `new_proposal` call a funder configures to get claimers added to a role
fn new_proposal(raw_args: Value) -> MethodData {
    MethodData {
        receiver_id: dao_bot(),
        method_name: "new_proposal".to_string(),
        args: raw_args.to_string(),
        attached_deposit: U128(NearToken::from_millinear(1_500).as_yoctonear()),
        attached_gas: Gas::from_tgas(100),
        keypom_args: Some(KeypomArgs {
            account_id_field: Some("proposal.kind.AddMemberToRole.member_id".to_string()),
            funder_id_field: Some("funder".to_string()),
            ..Default::default()
        }),
    }
}

/// Claim the key and hand every dispatched call to the bot
fn claim_and_relay(contract: &mut ClaimRelay, bot: &mut DaoBot, key: &PublicKey, claimer: &AccountId) -> Vec<Option<u64>> {
    claim_as(contract, key, claimer).unwrap();
    dispatched_calls()
        .iter()
        .map(|call| {
            assert_eq!(call.receiver_id, dao_bot());
            bot.receive(&relay(), call).unwrap()
        })
        .collect()
}

#[test]
fn claimer_is_added_to_the_role() {
    let minqi = account("minqi.near");
    let member1 = account("member1.near");
    let mut bot = DaoBot::new(relay(), &[minqi.clone()]);
    let mut contract = setup_contract();

    let method = new_proposal(json!({
        "dao_contract": dao(),
        "proposal": {
            "description": "mooooooooon",
            "kind": {"AddMemberToRole": {"role": ONBOARDEE_ROLE}}
        }
    }));
    create_drop(&mut contract, &minqi, "onboarding", NearToken::from_near(2), 1, vec![vec![method]], vec![pk(1)]).unwrap();

    let outcomes = claim_and_relay(&mut contract, &mut bot, &pk(1), &member1);
    assert_eq!(outcomes, vec![Some(0)]);
    assert!(bot.dao.get_policy().is_member_of(ONBOARDEE_ROLE, &member1));
}

#[test]
fn pre_populated_member_is_overwritten_by_the_claimer() {
    let minqi = account("minqi.near");
    let member1 = account("member1.near");
    let malicious = account("maliciousactor.near");
    let mut bot = DaoBot::new(relay(), &[minqi.clone()]);
    let mut contract = setup_contract();

    let method = new_proposal(json!({
        "dao_contract": dao(),
        "proposal": {
            "description": "let me in",
            "kind": {"AddMemberToRole": {"member_id": malicious, "role": COUNCIL_ROLE}}
        }
    }));
    create_drop(&mut contract, &minqi, "spoofed-member", NearToken::from_near(2), 1, vec![vec![method]], vec![pk(1)]).unwrap();

    claim_and_relay(&mut contract, &mut bot, &pk(1), &member1);

    let policy = bot.dao.get_policy();
    assert!(policy.is_member_of(COUNCIL_ROLE, &member1));
    assert!(!policy.is_member_of(COUNCIL_ROLE, &malicious));
}

#[test]
fn spoofed_funder_is_overwritten_by_the_real_one() {
    let minqi = account("minqi.near");
    let member1 = account("member1.near");
    let malicious = account("maliciousactor.near");
    let mut bot = DaoBot::new(relay(), &[minqi.clone()]);
    let mut contract = setup_contract();

    // The malicious funder claims to be minqi and tries to smuggle in its own keypom_args
    let method = new_proposal(json!({
        "dao_contract": dao(),
        "funder": minqi,
        "keypom_args": {"funder_id_field": "nowhere", "account_id_field": "nowhere"},
        "proposal": {
            "description": "let me in",
            "kind": {"AddMemberToRole": {"member_id": malicious, "role": COUNCIL_ROLE}}
        }
    }));
    create_drop(&mut contract, &malicious, "spoofed-funder", NearToken::from_near(2), 1, vec![vec![method]], vec![pk(1)]).unwrap();

    claim_as(&mut contract, &pk(1), &member1).unwrap();
    let calls = dispatched_calls();
    assert_eq!(calls.len(), 1);

    let args: Value = serde_json::from_str(&calls[0].args).unwrap();
    assert_eq!(args["funder"], json!(malicious));
    assert_eq!(args["proposal"]["kind"]["AddMemberToRole"]["member_id"], json!(member1));
    assert_eq!(args["keypom_args"]["funder_id_field"], json!("funder"));

    // The bot sees the real funder, who isn't on the council
    assert_eq!(bot.receive(&relay(), &calls[0]), Ok(None));
    assert_eq!(bot.dao.proposal_count(), 0);
    let policy = bot.dao.get_policy();
    assert!(!policy.is_member_of(COUNCIL_ROLE, &member1));
    assert!(!policy.is_member_of(COUNCIL_ROLE, &malicious));
}

#[test]
fn bot_only_trusts_the_claim_contract() {
    let minqi = account("minqi.near");
    let mut bot = DaoBot::new(relay(), &[minqi.clone()]);
    let mut contract = setup_contract();

    let method = new_proposal(json!({
        "proposal": {"description": "", "kind": {"AddMemberToRole": {"role": ONBOARDEE_ROLE}}}
    }));
    create_drop(&mut contract, &minqi, "direct", NearToken::from_near(2), 1, vec![vec![method]], vec![pk(1)]).unwrap();
    claim_as(&mut contract, &pk(1), &account("member1.near")).unwrap();

    let calls = dispatched_calls();
    assert!(bot.receive(&account("maliciousactor.near"), &calls[0]).is_err());
    assert_eq!(bot.dao.proposal_count(), 0);
}

#[test]
fn accepted_proposal_is_sent_to_the_dao() {
    let minqi = account("minqi.near");
    let member1 = account("member1.near");
    let bot = DaoBot::new(relay(), &[minqi.clone()]);
    let mut contract = setup_contract();

    let method = new_proposal(json!({
        "proposal": {
            "description": "onboard",
            "kind": {"AddMemberToRole": {"member_id": "maliciousactor.near", "role": ONBOARDEE_ROLE}}
        }
    }));
    create_drop(&mut contract, &minqi, "forwarded", NearToken::from_near(2), 1, vec![vec![method]], vec![pk(1)]).unwrap();
    claim_as(&mut contract, &pk(1), &member1).unwrap();
    let relayed = dispatched_calls();

    // Now running as the bot
    call_as(&dao_bot(), relayed[0].attached_deposit);
    drop(bot.forward_to_dao(dao(), &relayed[0]).unwrap());

    let sent = sent_calls();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].receiver_id, dao());
    assert_eq!(sent[0].method_name, "add_proposal");
    assert_eq!(sent[0].attached_deposit, PROPOSAL_DEPOSIT);
    assert_eq!(sent[0].attached_gas, ADD_PROPOSAL_GAS);

    let args: Value = serde_json::from_str(&sent[0].args).unwrap();
    let proposal: ProposalInput = serde_json::from_value(args["proposal"].clone()).unwrap();
    assert_eq!(
        proposal.kind,
        ProposalKind::AddMemberToRole { member_id: member1, role: ONBOARDEE_ROLE.to_string() }
    );
}
