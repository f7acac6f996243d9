use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::storage_types::EntryId;

// Interface of the collection contract holding the entries. Each campaign
// is keyed by such a contract's address; the core only verifies ownership
// and moves custody in bulk through it.
#[contractclient(name = "EntryRegistryClient")]
pub trait EntryRegistry {
    fn owner_of(env: Env, id: EntryId) -> Address;

    fn transfer_many(env: Env, from: Address, ids: Vec<EntryId>, recipients: Vec<Address>);
}
