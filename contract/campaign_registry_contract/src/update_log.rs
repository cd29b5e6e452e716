use soroban_sdk::{Env, String};

use crate::storage_types::*;

/// Overwrite the last-update record of `id`
pub fn record(env: &Env, id: &String, update: &CampaignUpdate) {
    let key = PersistentKey::CampaignUpdate(id.clone());
    env.storage().persistent().set(&key, update);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn get(env: &Env, id: &String) -> Option<CampaignUpdate> {
    env.storage()
        .persistent()
        .get(&PersistentKey::CampaignUpdate(id.clone()))
}
