#![no_std]


mod access;
mod events;
mod ledger;
mod registry;
mod settlement;
mod storage_types;
mod utils;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use crate::events::{
    CampaignEditedEvent, CampaignStartedEvent, ContestantsAssignedEvent, EntriesAddedEvent,
    EscrowWithdrawnEvent, VoteCastEvent,
};
use crate::registry::EntryRegistryClient;
use crate::storage_types::{DataKey, PersistentKey, VoteEntry, BASIS_POINTS};
use crate::utils::{extend_instance, extend_persistent};

pub use crate::ledger::VoteDirection;
pub use crate::storage_types::{Campaign, EntryId, Error, Permission};

#[contract]
pub struct VoteContract;

#[contractimpl]
impl VoteContract {
    /// One-shot configuration: admin, the access-control contract used to
    /// gate privileged calls, and the token all fees and prizes move in.
    pub fn initialize(
        env: Env,
        admin: Address,
        access_control: Address,
        vote_token: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage()
            .instance()
            .set(&DataKey::AccessControl, &access_control);
        env.storage().instance().set(&DataKey::VoteToken, &vote_token);
        extend_instance(&env);
        Ok(())
    }

    pub fn set_vote_token(env: Env, caller: Address, vote_token: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_permission(&env, &caller, Permission::TokenConfig)?;
        env.storage().instance().set(&DataKey::VoteToken, &vote_token);
        extend_instance(&env);
        events::emit_vote_token_set(&env, vote_token);
        Ok(())
    }

    /// Open a voting campaign for a collection and pull its prize pool from
    /// the caller into contract custody. Only one campaign may be running
    /// per collection; a settled, cancelled or expired record is replaced.
    pub fn start_campaign(
        env: Env,
        caller: Address,
        collection: Address,
        voting_fee: i128,
        toggle_votes: bool,
        prize_pool: i128,
        winner_count: u32,
        end_time: u64,
        entry_ids: Vec<EntryId>,
        commission_bps: u32,
        dispensable: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_permission(&env, &caller, Permission::ManageCampaigns)?;

        if voting_fee <= 0 {
            return Err(Error::InvalidFee);
        }
        if prize_pool < 0 {
            return Err(Error::InvalidPrizePool);
        }
        if winner_count == 0 {
            return Err(Error::InvalidWinnerCount);
        }
        if commission_bps > BASIS_POINTS {
            return Err(Error::InvalidCommission);
        }
        if end_time <= env.ledger().timestamp() {
            return Err(Error::InvalidEndTime);
        }

        let key = PersistentKey::Campaign(collection.clone());
        if let Some(existing) = env.storage().persistent().get::<_, Campaign>(&key) {
            if existing.is_active && env.ledger().timestamp() < existing.end_time {
                return Err(Error::CampaignInProgress);
            }
        }

        let mut entries: Vec<EntryId> = Vec::new(&env);
        for entry_id in entry_ids.iter() {
            if entries.contains(entry_id) {
                return Err(Error::DuplicateEntry);
            }
            entries.push_back(entry_id);
        }

        if prize_pool > 0 {
            let token = token::Client::new(&env, &vote_token(&env)?);
            token.transfer(&caller, &env.current_contract_address(), &prize_pool);
        }

        let campaign = Campaign {
            voting_fee,
            toggle_votes,
            prize_pool,
            winner_count,
            end_time,
            is_active: true,
            commission_bps,
            dispensable,
            entries: entries.clone(),
            total_escrowed: 0,
            escrow_balance: prize_pool,
            settled: false,
        };
        env.storage().persistent().set(&key, &campaign);
        extend_persistent(&env, &key);

        // Fresh vote state per entry, overwriting anything a previous
        // campaign on this collection left behind.
        for entry_id in entries.iter() {
            let entry_key = PersistentKey::Entry(collection.clone(), entry_id);
            env.storage()
                .persistent()
                .set(&entry_key, &ledger::blank_entry(&env));
            extend_persistent(&env, &entry_key);
        }
        extend_instance(&env);

        events::emit_campaign_started(
            &env,
            CampaignStartedEvent {
                collection,
                voting_fee,
                prize_pool,
                winner_count,
                end_time,
                entry_count: entries.len(),
            },
        );
        Ok(())
    }

    /// Append entries to a running campaign. Empty input is a no-op.
    pub fn add_entries(
        env: Env,
        caller: Address,
        collection: Address,
        entry_ids: Vec<EntryId>,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_permission(&env, &caller, Permission::ManageCampaigns)?;

        if entry_ids.is_empty() {
            return Ok(());
        }

        let key = PersistentKey::Campaign(collection.clone());
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::CampaignNotFound)?;
        if !campaign.is_active || campaign.settled {
            return Err(Error::CampaignNotRunning);
        }

        for entry_id in entry_ids.iter() {
            if campaign.entries.contains(entry_id) {
                return Err(Error::DuplicateEntry);
            }
            campaign.entries.push_back(entry_id);
            let entry_key = PersistentKey::Entry(collection.clone(), entry_id);
            env.storage()
                .persistent()
                .set(&entry_key, &ledger::blank_entry(&env));
            extend_persistent(&env, &entry_key);
        }

        env.storage().persistent().set(&key, &campaign);
        extend_persistent(&env, &key);

        events::emit_entries_added(&env, EntriesAddedEvent {
            collection,
            entry_ids,
        });
        Ok(())
    }

    /// Update the mutable campaign fields in place. The prize-pool delta is
    /// settled against the caller: an increase is pulled in, a decrease is
    /// returned. Passing `is_active = false` cancels the campaign; it then
    /// never settles and its escrow is released via `withdraw_escrow`.
    pub fn edit_campaign(
        env: Env,
        caller: Address,
        collection: Address,
        prize_pool: i128,
        winner_count: u32,
        end_time: u64,
        is_active: bool,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_permission(&env, &caller, Permission::ManageCampaigns)?;

        if prize_pool < 0 {
            return Err(Error::InvalidPrizePool);
        }
        if winner_count == 0 {
            return Err(Error::InvalidWinnerCount);
        }

        let key = PersistentKey::Campaign(collection.clone());
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::CampaignNotFound)?;
        if campaign.settled {
            return Err(Error::AlreadySettled);
        }
        if !campaign.is_active {
            return Err(Error::CampaignNotRunning);
        }

        let delta = prize_pool - campaign.prize_pool;
        if delta != 0 {
            let token = token::Client::new(&env, &vote_token(&env)?);
            if delta > 0 {
                token.transfer(&caller, &env.current_contract_address(), &delta);
            } else {
                token.transfer(&env.current_contract_address(), &caller, &(-delta));
            }
        }

        campaign.prize_pool = prize_pool;
        campaign.escrow_balance += delta;
        campaign.winner_count = winner_count;
        campaign.end_time = end_time;
        campaign.is_active = is_active;
        env.storage().persistent().set(&key, &campaign);
        extend_persistent(&env, &key);

        events::emit_campaign_edited(
            &env,
            CampaignEditedEvent {
                collection,
                prize_pool,
                winner_count,
                end_time,
                is_active,
            },
        );
        Ok(())
    }

    /// Cast one paid vote on an entry. The fee is charged on every call,
    /// up or down; taking a vote back does not return it.
    pub fn vote(
        env: Env,
        voter: Address,
        collection: Address,
        entry_id: EntryId,
    ) -> Result<u32, Error> {
        voter.require_auth();

        let key = PersistentKey::Campaign(collection.clone());
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::CampaignNotFound)?;
        if !campaign.is_active || campaign.settled {
            return Err(Error::CampaignNotRunning);
        }
        if env.ledger().timestamp() >= campaign.end_time {
            return Err(Error::CampaignOver);
        }
        if !campaign.entries.contains(entry_id) {
            return Err(Error::EntryNotInCampaign);
        }
        if EntryRegistryClient::new(&env, &collection).owner_of(&entry_id) == voter {
            return Err(Error::SelfVoteForbidden);
        }

        let token = token::Client::new(&env, &vote_token(&env)?);
        if token.balance(&voter) < campaign.voting_fee {
            return Err(Error::InsufficientBalance);
        }
        token.transfer(&voter, &env.current_contract_address(), &campaign.voting_fee);

        let entry_key = PersistentKey::Entry(collection.clone(), entry_id);
        let mut entry: VoteEntry = env
            .storage()
            .persistent()
            .get(&entry_key)
            .ok_or(Error::EntryNotInCampaign)?;
        let direction = ledger::record_vote(&mut entry, &voter, campaign.toggle_votes);
        let score = entry.score;
        env.storage().persistent().set(&entry_key, &entry);
        extend_persistent(&env, &entry_key);

        campaign.total_escrowed += campaign.voting_fee;
        campaign.escrow_balance += campaign.voting_fee;
        env.storage().persistent().set(&key, &campaign);
        extend_persistent(&env, &key);

        events::emit_vote_cast(
            &env,
            VoteCastEvent {
                collection,
                entry_id,
                voter,
                direction,
                score,
            },
        );
        Ok(score)
    }

    /// Record which contestant owns each entry and move custody to them
    /// through the collection contract. Must cover every entry expected to
    /// receive a payout before `settle` runs.
    pub fn assign_contestants(
        env: Env,
        caller: Address,
        collection: Address,
        entry_ids: Vec<EntryId>,
        owners: Vec<Address>,
    ) -> Result<(), Error> {
        caller.require_auth();
        access::require_permission(&env, &caller, Permission::ManageCampaigns)?;

        if entry_ids.len() != owners.len() {
            return Err(Error::LengthMismatch);
        }
        if !env
            .storage()
            .persistent()
            .has(&PersistentKey::Campaign(collection.clone()))
        {
            return Err(Error::CampaignNotFound);
        }
        if entry_ids.is_empty() {
            return Ok(());
        }

        for index in 0..entry_ids.len() {
            let entry_id = entry_ids.get_unchecked(index);
            let owner = owners.get_unchecked(index);
            let contestant_key = PersistentKey::Contestant(collection.clone(), entry_id);
            env.storage().persistent().set(&contestant_key, &owner);
            extend_persistent(&env, &contestant_key);
        }

        EntryRegistryClient::new(&env, &collection).transfer_many(&caller, &entry_ids, &owners);

        events::emit_contestants_assigned(&env, ContestantsAssignedEvent {
            collection,
            entry_ids,
        });
        Ok(())
    }

    /// Terminal payout for an ended campaign. All transfers and the flip to
    /// settled happen in this one invocation or not at all.
    pub fn settle(env: Env, caller: Address, collection: Address) -> Result<(), Error> {
        caller.require_auth();
        access::require_permission(&env, &caller, Permission::Settlement)?;

        let key = PersistentKey::Campaign(collection.clone());
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::CampaignNotFound)?;
        if campaign.settled {
            return Err(Error::AlreadySettled);
        }
        if !campaign.is_active {
            return Err(Error::CampaignNotRunning);
        }
        if env.ledger().timestamp() < campaign.end_time {
            return Err(Error::CampaignStillRunning);
        }

        let settled = settlement::run(&env, &collection, &mut campaign)?;
        env.storage().persistent().set(&key, &campaign);
        extend_persistent(&env, &key);

        events::emit_campaign_settled(&env, settled);
        Ok(())
    }

    /// Release escrow that settlement left behind (`dispensable = false`)
    /// or that a cancelled campaign still holds.
    pub fn withdraw_escrow(
        env: Env,
        caller: Address,
        collection: Address,
        to: Address,
    ) -> Result<i128, Error> {
        caller.require_auth();
        access::require_permission(&env, &caller, Permission::Settlement)?;

        let key = PersistentKey::Campaign(collection.clone());
        let mut campaign: Campaign = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(Error::CampaignNotFound)?;
        if campaign.is_active && !campaign.settled {
            return Err(Error::CampaignStillRunning);
        }
        if campaign.escrow_balance <= 0 {
            return Err(Error::NothingToWithdraw);
        }

        let amount = campaign.escrow_balance;
        let token = token::Client::new(&env, &vote_token(&env)?);
        token.transfer(&env.current_contract_address(), &to, &amount);
        campaign.escrow_balance = 0;
        env.storage().persistent().set(&key, &campaign);
        extend_persistent(&env, &key);

        events::emit_escrow_withdrawn(&env, EscrowWithdrawnEvent {
            collection,
            to,
            amount,
        });
        Ok(amount)
    }

    // View functions

    pub fn get_campaign(env: Env, collection: Address) -> Result<Campaign, Error> {
        load_campaign(&env, &collection)
    }

    pub fn get_entries(env: Env, collection: Address) -> Result<Vec<EntryId>, Error> {
        Ok(load_campaign(&env, &collection)?.entries)
    }

    pub fn get_vote_count(env: Env, collection: Address, entry_id: EntryId) -> Result<u32, Error> {
        Ok(load_entry(&env, &collection, entry_id)?.score)
    }

    pub fn get_voters(
        env: Env,
        collection: Address,
        entry_id: EntryId,
    ) -> Result<Vec<Address>, Error> {
        Ok(load_entry(&env, &collection, entry_id)?.voters)
    }

    pub fn has_active_vote(
        env: Env,
        collection: Address,
        entry_id: EntryId,
        voter: Address,
    ) -> Result<bool, Error> {
        Ok(load_entry(&env, &collection, entry_id)?
            .has_voted
            .get(voter)
            .unwrap_or(false))
    }

    pub fn get_contestant(env: Env, collection: Address, entry_id: EntryId) -> Option<Address> {
        env.storage()
            .persistent()
            .get(&PersistentKey::Contestant(collection, entry_id))
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        access::admin(&env)
    }

    pub fn get_access_control(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::AccessControl)
            .ok_or(Error::NotInitialized)
    }

    pub fn get_vote_token(env: Env) -> Result<Address, Error> {
        vote_token(&env)
    }
}

// Helper functions

fn vote_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::VoteToken)
        .ok_or(Error::NotInitialized)
}

fn load_campaign(env: &Env, collection: &Address) -> Result<Campaign, Error> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(collection.clone()))
        .ok_or(Error::CampaignNotFound)
}

fn load_entry(env: &Env, collection: &Address, entry_id: EntryId) -> Result<VoteEntry, Error> {
    let campaign = load_campaign(env, collection)?;
    if !campaign.entries.contains(entry_id) {
        return Err(Error::EntryNotInCampaign);
    }
    env.storage()
        .persistent()
        .get(&PersistentKey::Entry(collection.clone(), entry_id))
        .ok_or(Error::EntryNotInCampaign)
}
