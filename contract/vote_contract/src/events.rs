use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};

use crate::ledger::VoteDirection;
use crate::storage_types::EntryId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignStartedEvent {
    pub collection: Address,
    pub voting_fee: i128,
    pub prize_pool: i128,
    pub winner_count: u32,
    pub end_time: u64,
    pub entry_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct EntriesAddedEvent {
    pub collection: Address,
    pub entry_ids: Vec<EntryId>,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignEditedEvent {
    pub collection: Address,
    pub prize_pool: i128,
    pub winner_count: u32,
    pub end_time: u64,
    pub is_active: bool,
}

#[contracttype]
#[derive(Clone)]
pub struct VoteCastEvent {
    pub collection: Address,
    pub entry_id: EntryId,
    pub voter: Address,
    pub direction: VoteDirection,
    pub score: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct ContestantsAssignedEvent {
    pub collection: Address,
    pub entry_ids: Vec<EntryId>,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignSettledEvent {
    pub collection: Address,
    pub winners: Vec<EntryId>,
    pub prize_paid: i128,
    pub fees_refunded: i128,
    pub swept: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct EscrowWithdrawnEvent {
    pub collection: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_campaign_started(env: &Env, event: CampaignStartedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_started"),), event);
}

pub fn emit_entries_added(env: &Env, event: EntriesAddedEvent) {
    env.events()
        .publish((Symbol::new(env, "entries_added"),), event);
}

pub fn emit_campaign_edited(env: &Env, event: CampaignEditedEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_edited"),), event);
}

pub fn emit_vote_cast(env: &Env, event: VoteCastEvent) {
    env.events().publish((Symbol::new(env, "vote_cast"),), event);
}

pub fn emit_contestants_assigned(env: &Env, event: ContestantsAssignedEvent) {
    env.events()
        .publish((Symbol::new(env, "contestants_assigned"),), event);
}

pub fn emit_campaign_settled(env: &Env, event: CampaignSettledEvent) {
    env.events()
        .publish((Symbol::new(env, "campaign_settled"),), event);
}

pub fn emit_escrow_withdrawn(env: &Env, event: EscrowWithdrawnEvent) {
    env.events()
        .publish((Symbol::new(env, "escrow_withdrawn"),), event);
}

pub fn emit_vote_token_set(env: &Env, token: Address) {
    env.events()
        .publish((Symbol::new(env, "vote_token_set"),), token);
}
