use soroban_sdk::{contracterror, contracttype, Address};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Role(Address, Permission),
}

// Permission kinds shared with the contracts consulting this registry.
// Encoded as u32 on the wire; the codes are the contract between them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Permission {
    ManageCampaigns = 1,
    Settlement = 2,
    TokenConfig = 3,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}
