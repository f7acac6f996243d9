use soroban_sdk::{contracttype, Address, Env, Map, Vec};

use crate::storage_types::VoteEntry;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum VoteDirection {
    Up = 0,
    Down = 1,
}

pub fn blank_entry(env: &Env) -> VoteEntry {
    VoteEntry {
        score: 0,
        voters: Vec::new(env),
        has_voted: Map::new(env),
    }
}

/// Apply one paid vote action to an entry.
///
/// With toggling enabled, a voter whose previous vote is still active takes
/// it back (down); everything else is an up action. With toggling disabled
/// every call is an up action and a repeat voter occupies one `voters` slot
/// per vote, so refunds at settlement are counted per vote, not per voter.
pub fn record_vote(entry: &mut VoteEntry, voter: &Address, toggle_votes: bool) -> VoteDirection {
    let active = entry.has_voted.get(voter.clone()).unwrap_or(false);
    if toggle_votes && active {
        if let Some(index) = entry.voters.first_index_of(voter.clone()) {
            entry.voters.remove(index);
        }
        entry.score -= 1;
        entry.has_voted.set(voter.clone(), false);
        VoteDirection::Down
    } else {
        entry.voters.push_back(voter.clone());
        entry.score += 1;
        entry.has_voted.set(voter.clone(), true);
        VoteDirection::Up
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, Env};

    #[test]
    fn toggle_returns_entry_to_blank_state() {
        let env = Env::default();
        let voter = Address::generate(&env);
        let mut entry = blank_entry(&env);

        assert_eq!(record_vote(&mut entry, &voter, true), VoteDirection::Up);
        assert_eq!(entry.score, 1);
        assert_eq!(record_vote(&mut entry, &voter, true), VoteDirection::Down);
        assert_eq!(entry.score, 0);
        assert_eq!(entry.voters.len(), 0);
        assert_eq!(entry.has_voted.get(voter), Some(false));
    }

    #[test]
    fn repeat_votes_accumulate_when_toggling_is_off() {
        let env = Env::default();
        let voter = Address::generate(&env);
        let mut entry = blank_entry(&env);

        for _ in 0..3 {
            assert_eq!(record_vote(&mut entry, &voter, false), VoteDirection::Up);
        }
        assert_eq!(entry.score, 3);
        assert_eq!(entry.voters.len(), 3);
    }

    #[test]
    fn score_tracks_voter_list_across_mixed_voters() {
        let env = Env::default();
        let a = Address::generate(&env);
        let b = Address::generate(&env);
        let mut entry = blank_entry(&env);

        record_vote(&mut entry, &a, true);
        record_vote(&mut entry, &b, true);
        record_vote(&mut entry, &a, true); // a takes the vote back
        assert_eq!(entry.score, 1);
        assert_eq!(entry.voters.len(), 1);
        assert_eq!(entry.voters.get(0), Some(b));
    }
}
