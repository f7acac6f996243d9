#![no_std]

mod storage;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

use crate::storage::DataKey;

pub use crate::storage::{Error, Permission};

#[contract]
pub struct AccessControlContract;

#[contractimpl]
impl AccessControlContract {
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        Ok(())
    }

    /// Grant a permission to an address. Admin only.
    pub fn grant_role(env: Env, who: Address, permission: Permission) -> Result<(), Error> {
        let admin = read_admin(&env)?;
        admin.require_auth();

        env.storage()
            .persistent()
            .set(&DataKey::Role(who.clone(), permission), &true);

        env.events().publish(
            (Symbol::new(&env, "role_granted"),),
            (who, permission),
        );
        Ok(())
    }

    /// Revoke a previously granted permission. Admin only; revoking a
    /// permission that was never granted is a no-op.
    pub fn revoke_role(env: Env, who: Address, permission: Permission) -> Result<(), Error> {
        let admin = read_admin(&env)?;
        admin.require_auth();

        env.storage()
            .persistent()
            .remove(&DataKey::Role(who.clone(), permission));

        env.events().publish(
            (Symbol::new(&env, "role_revoked"),),
            (who, permission),
        );
        Ok(())
    }

    /// The admin is always authorized; everyone else needs a granted role.
    pub fn is_authorized(env: Env, who: Address, permission: Permission) -> bool {
        if let Some(admin) = env.storage().instance().get::<_, Address>(&DataKey::Admin) {
            if who == admin {
                return true;
            }
        }
        env.storage()
            .persistent()
            .get(&DataKey::Role(who, permission))
            .unwrap_or(false)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        read_admin(&env)
    }
}

fn read_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}
