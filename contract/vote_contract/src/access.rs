use soroban_sdk::{contractclient, Address, Env};

use crate::storage_types::{DataKey, Error, Permission};

// Interface of the external access-control contract. The core never looks
// at how roles are stored; it only asks yes/no questions.
#[contractclient(name = "AccessControlClient")]
pub trait AccessControl {
    fn is_authorized(env: Env, who: Address, permission: Permission) -> bool;
}

pub fn admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

/// Gate for privileged operations: the admin passes outright, anyone else
/// must hold the permission in the access-control contract.
pub fn require_permission(env: &Env, caller: &Address, permission: Permission) -> Result<(), Error> {
    if *caller == admin(env)? {
        return Ok(());
    }
    let gate: Address = env
        .storage()
        .instance()
        .get(&DataKey::AccessControl)
        .ok_or(Error::NotInitialized)?;
    if AccessControlClient::new(env, &gate).is_authorized(caller, &permission) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}
