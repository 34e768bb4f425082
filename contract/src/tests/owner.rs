use super::test_utils::*;
use crate::*;

#[test]
fn only_the_owner_changes_the_config() {
    let mut contract = setup_contract();
    let config = ContractConfig {
        max_keys_per_call: 1,
        ..contract.get_config()
    };

    call_as(&account("stranger.near"), NearToken::from_yoctonear(0));
    assert_eq!(contract.set_config(config.clone()), Err(ClaimError::Unauthorized));

    call_as(&owner(), NearToken::from_yoctonear(0));
    assert!(matches!(
        contract.set_config(ContractConfig {
            max_args_len: 0,
            ..config.clone()
        }),
        Err(ClaimError::InvalidConfig(_))
    ));
    assert_eq!(contract.set_config(config.clone()), Ok(()));
    assert_eq!(contract.get_config(), config);

    // The new limit applies to the next drop
    let result = create_drop(
        &mut contract,
        &account("funder.near"),
        "limited",
        NearToken::from_near(1),
        1,
        vec![vec![simple_method()]],
        vec![pk(1), pk(2)],
    );
    assert!(matches!(result, Err(ClaimError::InvalidConfig(_))));
}

#[test]
fn invalid_initial_config_is_rejected() {
    call_as(&owner(), NearToken::from_yoctonear(0));
    let result = ClaimRelay::new(
        owner(),
        Some(ContractConfig {
            allowance_per_use: U128(0),
            ..Default::default()
        }),
    );
    assert!(matches!(result, Err(ClaimError::InvalidConfig(_))));
}

#[test]
fn freezing_stops_drops_and_claims() {
    let mut contract = setup_contract();
    let funder = account("funder.near");
    create_drop(&mut contract, &funder, "frozen", NearToken::from_near(1), 1, vec![vec![simple_method()]], vec![pk(1)]).unwrap();

    call_as(&account("stranger.near"), NearToken::from_yoctonear(0));
    assert_eq!(contract.freeze_contract(), Err(ClaimError::Unauthorized));

    call_as(&owner(), NearToken::from_yoctonear(0));
    contract.freeze_contract().unwrap();
    assert!(contract.is_frozen());

    assert_eq!(
        claim_as(&mut contract, &pk(1), &account("member1.near")),
        Err(ClaimError::ContractFrozen)
    );
    let result = create_drop(&mut contract, &funder, "other", NearToken::from_near(1), 1, vec![vec![simple_method()]], vec![pk(2)]);
    assert_eq!(result, Err(ClaimError::ContractFrozen));
    call_as(&funder, NearToken::from_near(5));
    assert_eq!(contract.add_keys("frozen".to_string(), vec![pk(3)]), Err(ClaimError::ContractFrozen));

    call_as(&owner(), NearToken::from_yoctonear(0));
    contract.unfreeze_contract().unwrap();
    assert_eq!(claim_as(&mut contract, &pk(1), &account("member1.near")), Ok(true));
}
