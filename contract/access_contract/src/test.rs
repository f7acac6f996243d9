#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env};

fn setup() -> (Env, AccessControlContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AccessControlContract, ());
    let client = AccessControlContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

#[test]
fn test_initialize_once() {
    let (_env, client, admin) = setup();

    assert_eq!(client.get_admin(), admin);
    assert_eq!(
        client.try_initialize(&admin),
        Err(Ok(Error::AlreadyInitialized))
    );
}

#[test]
fn test_admin_is_always_authorized() {
    let (_env, client, admin) = setup();

    assert!(client.is_authorized(&admin, &Permission::ManageCampaigns));
    assert!(client.is_authorized(&admin, &Permission::Settlement));
    assert!(client.is_authorized(&admin, &Permission::TokenConfig));
}

#[test]
fn test_grant_and_revoke_role() {
    let (env, client, _admin) = setup();
    let operator = Address::generate(&env);

    assert!(!client.is_authorized(&operator, &Permission::ManageCampaigns));

    client.grant_role(&operator, &Permission::ManageCampaigns);
    assert!(client.is_authorized(&operator, &Permission::ManageCampaigns));
    // A grant covers exactly one permission kind.
    assert!(!client.is_authorized(&operator, &Permission::Settlement));

    client.revoke_role(&operator, &Permission::ManageCampaigns);
    assert!(!client.is_authorized(&operator, &Permission::ManageCampaigns));
}

#[test]
fn test_revoke_without_grant_is_noop() {
    let (env, client, _admin) = setup();
    let operator = Address::generate(&env);

    client.revoke_role(&operator, &Permission::Settlement);
    assert!(!client.is_authorized(&operator, &Permission::Settlement));
}

#[test]
fn test_queries_before_initialize() {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AccessControlContract, ());
    let client = AccessControlContractClient::new(&env, &contract_id);
    let someone = Address::generate(&env);

    assert_eq!(client.try_get_admin(), Err(Ok(Error::NotInitialized)));
    // Nobody is authorized while no admin is configured.
    assert!(!client.is_authorized(&someone, &Permission::ManageCampaigns));
}
