//! Campaign ids grouped by region, in placement order.
//!
//! Each region bucket is one persistent entry holding a `Vec<String>`.
//! Buckets are created on first append and are never deleted; an emptied
//! bucket stays behind as an empty vector.

use soroban_sdk::{Env, String, Vec};

use crate::storage_types::*;

fn bucket_key(region: &String) -> PersistentKey {
    PersistentKey::RegionBucket(region.clone())
}

/// Ids placed in `region`, empty when the region was never used
pub fn get(env: &Env, region: &String) -> Vec<String> {
    env.storage()
        .persistent()
        .get(&bucket_key(region))
        .unwrap_or_else(|| Vec::new(env))
}

pub fn len(env: &Env, region: &String) -> u32 {
    get(env, region).len()
}

pub fn has_capacity(env: &Env, region: &String) -> bool {
    len(env, region) < MAX_CAMPAIGNS_PER_REGION
}

/// Append `id` to the end of the bucket. Duplicates are not checked.
pub fn append(env: &Env, region: &String, id: &String) -> Result<(), RegistryError> {
    let mut ids = get(env, region);
    if ids.len() >= MAX_CAMPAIGNS_PER_REGION {
        return Err(RegistryError::MaxCampaignsExceeded);
    }
    ids.push_back(id.clone());
    store(env, region, &ids);
    Ok(())
}

/// Drop the first occurrence of `id`; no-op when absent.
pub fn remove(env: &Env, region: &String, id: &String) {
    let mut ids = get(env, region);
    if let Some(index) = ids.first_index_of(id.clone()) {
        ids.remove(index);
        store(env, region, &ids);
    }
}

fn store(env: &Env, region: &String, ids: &Vec<String>) {
    let key = bucket_key(region);
    env.storage().persistent().set(&key, ids);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}
