use soroban_sdk::{token, Address, Env, Vec};

use crate::access;
use crate::events::CampaignSettledEvent;
use crate::storage_types::{Campaign, DataKey, EntryId, Error, PersistentKey, VoteEntry};
use crate::utils::calculate_share;

/// Run the terminal payout for an ended campaign.
///
/// Ranks entries, pays each winner's contestant its net share, refunds the
/// fee of every vote still active on a winning entry, and disposes of
/// whatever escrow is left. The caller persists the mutated campaign and
/// publishes the returned event; any failing transfer aborts the whole
/// invocation, so the campaign only ever flips to settled together with
/// all of its payouts.
pub fn run(
    env: &Env,
    collection: &Address,
    campaign: &mut Campaign,
) -> Result<CampaignSettledEvent, Error> {
    let admin = access::admin(env)?;
    let token_addr: Address = env
        .storage()
        .instance()
        .get(&DataKey::VoteToken)
        .ok_or(Error::NotInitialized)?;
    let token = token::Client::new(env, &token_addr);
    let this = env.current_contract_address();

    let winners = select_winners(env, collection, campaign);

    // Each winner takes prize_pool / winner_count; the division remainder
    // goes to the first-ranked winner. Shares left unclaimed because fewer
    // entries exist than winner_count stay in escrow.
    let share = campaign.prize_pool / campaign.winner_count as i128;
    let remainder = campaign.prize_pool - share * campaign.winner_count as i128;

    let mut prize_paid: i128 = 0;
    let mut fees_refunded: i128 = 0;

    for (rank, entry_id) in winners.iter().enumerate() {
        let gross = if rank == 0 { share + remainder } else { share };
        let owner: Address = env
            .storage()
            .persistent()
            .get(&PersistentKey::Contestant(collection.clone(), entry_id))
            .ok_or(Error::OwnerNotAssigned)?;

        let commission = calculate_share(gross, campaign.commission_bps);
        let net = gross - commission;
        if net > 0 {
            token.transfer(&this, &owner, &net);
        }
        if commission > 0 {
            token.transfer(&this, &admin, &commission);
        }
        prize_paid += gross;

        // One refund per vote still active on the winning entry. Votes
        // toggled off before the deadline were never counted and stay paid.
        if let Some(entry) = env
            .storage()
            .persistent()
            .get::<_, VoteEntry>(&PersistentKey::Entry(collection.clone(), entry_id))
        {
            for voter in entry.voters.iter() {
                token.transfer(&this, &voter, &campaign.voting_fee);
                fees_refunded += campaign.voting_fee;
            }
        }
    }

    campaign.escrow_balance -= prize_paid + fees_refunded;

    // Forfeited fees from losing entries and unclaimed shares remain.
    let mut swept: i128 = 0;
    if campaign.dispensable && campaign.escrow_balance > 0 {
        swept = campaign.escrow_balance;
        token.transfer(&this, &admin, &swept);
        campaign.escrow_balance = 0;
    }

    campaign.settled = true;
    campaign.is_active = false;

    Ok(CampaignSettledEvent {
        collection: collection.clone(),
        winners,
        prize_paid,
        fees_refunded,
        swept,
    })
}

/// Top `winner_count` entries by score, at most one slot per entry. The
/// selection is stable over the campaign's insertion-ordered entry list,
/// so on a tied score the earliest-added entry wins.
fn select_winners(env: &Env, collection: &Address, campaign: &Campaign) -> Vec<EntryId> {
    let mut scores: Vec<u32> = Vec::new(env);
    for entry_id in campaign.entries.iter() {
        let score = env
            .storage()
            .persistent()
            .get::<_, VoteEntry>(&PersistentKey::Entry(collection.clone(), entry_id))
            .map(|entry| entry.score)
            .unwrap_or(0);
        scores.push_back(score);
    }

    let slots = campaign.winner_count.min(campaign.entries.len());
    let mut winners: Vec<EntryId> = Vec::new(env);
    let mut taken: Vec<u32> = Vec::new(env);
    while winners.len() < slots {
        let mut best: Option<(u32, u32)> = None;
        for index in 0..campaign.entries.len() {
            if taken.contains(index) {
                continue;
            }
            let score = scores.get_unchecked(index);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((index, score)),
            }
        }
        let (index, _) = best.unwrap();
        winners.push_back(campaign.entries.get_unchecked(index));
        taken.push_back(index);
    }
    winners
}
