use soroban_sdk::{contracterror, contracttype, Address, Map, Vec};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    AccessControl,
    VoteToken,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(Address),
    Entry(Address, EntryId),
    Contestant(Address, EntryId),
}

pub type EntryId = u64;

// Permission kinds understood by the access-control contract. Encoded as
// u32 on the wire, so the two contracts only have to agree on the codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Permission {
    ManageCampaigns = 1,
    Settlement = 2,
    TokenConfig = 3,
}

// One voting campaign per collection address.
#[derive(Clone)]
#[contracttype]
pub struct Campaign {
    pub voting_fee: i128,
    pub toggle_votes: bool,    // repeat vote by same voter cancels the prior one
    pub prize_pool: i128,
    pub winner_count: u32,     // top-N entries share the prize pool
    pub end_time: u64,
    pub is_active: bool,
    pub commission_bps: u32,   // platform cut of each winner share
    pub dispensable: bool,     // sweep leftover escrow to admin at settlement
    pub entries: Vec<EntryId>, // insertion order decides ties
    pub total_escrowed: i128,  // cumulative fee revenue, never decremented
    pub escrow_balance: i128,  // value currently held for this campaign
    pub settled: bool,
}

// Vote state for one entry. `voters` holds one element per active vote;
// with toggling enabled it stays duplicate-free, with toggling disabled a
// repeat voter appears once per vote. score == voters.len() at all times.
#[derive(Clone)]
#[contracttype]
pub struct VoteEntry {
    pub score: u32,
    pub voters: Vec<Address>,
    pub has_voted: Map<Address, bool>,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    InvalidFee = 4,
    InvalidPrizePool = 5,
    InvalidWinnerCount = 6,
    InvalidCommission = 7,
    InvalidEndTime = 8,
    CampaignNotFound = 9,
    CampaignInProgress = 10,
    CampaignNotRunning = 11,
    CampaignOver = 12,
    CampaignStillRunning = 13,
    AlreadySettled = 14,
    DuplicateEntry = 15,
    EntryNotInCampaign = 16,
    SelfVoteForbidden = 17,
    InsufficientBalance = 18,
    LengthMismatch = 19,
    OwnerNotAssigned = 20,
    NothingToWithdraw = 21,
}

// Constants
pub const BASIS_POINTS: u32 = 10000; // 100% in basis points
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
