use soroban_sdk::Env;

use crate::storage_types::{PersistentKey, BASIS_POINTS, TTL_INSTANCE, TTL_PERSISTENT};

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Basis-point share of an amount, rounded down.
pub fn calculate_share(amount: i128, bps: u32) -> i128 {
    (amount * bps as i128) / BASIS_POINTS as i128
}

#[cfg(test)]
mod tests {
    use super::calculate_share;

    #[test]
    fn share_rounds_down() {
        assert_eq!(calculate_share(100, 1000), 10);
        assert_eq!(calculate_share(99, 1000), 9);
        assert_eq!(calculate_share(50, 0), 0);
        assert_eq!(calculate_share(50, 10000), 50);
    }
}
