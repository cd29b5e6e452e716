use soroban_sdk::{log, Address, Env, String};

use crate::storage_types::*;
use crate::{authority, events, fee, region_index, update_log, utils};

/// Load registry settings, failing before `initialize` has run
pub fn load_config(env: &Env) -> Result<RegistryConfig, RegistryError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RegistryError::NotInitialized)
}

pub fn save_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn get_campaign(env: &Env, id: &String) -> Option<Campaign> {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(id.clone()))
}

pub fn has_campaign(env: &Env, id: &String) -> bool {
    env.storage()
        .persistent()
        .has(&PersistentKey::Campaign(id.clone()))
}

fn put_campaign(env: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id.clone());
    env.storage().persistent().set(&key, campaign);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Field checks of a new campaign, in the order their errors take precedence
pub fn validate_registration(
    config: &RegistryConfig,
    id: &String,
    region: &String,
    vaccine_type: &String,
    target_population: u64,
    metadata: &String,
) -> Result<(), RegistryError> {
    if config.next_campaign_id >= config.max_campaigns {
        return Err(RegistryError::MaxCampaignsExceeded);
    }
    utils::validate_campaign_id(id)?;
    utils::validate_region(region)?;
    utils::validate_vaccine_type(vaccine_type)?;
    utils::validate_population(target_population)?;
    utils::validate_metadata(metadata)?;
    Ok(())
}

/// Register a campaign on behalf of `caller`.
///
/// Every check runs before the fee transfer, so a rejected call leaves
/// storage and balances as they were.
pub fn register(
    env: &Env,
    config: &mut RegistryConfig,
    id: String,
    region: String,
    vaccine_type: String,
    target_population: u64,
    metadata: String,
    caller: Address,
) -> Result<String, RegistryError> {
    validate_registration(config, &id, &region, &vaccine_type, target_population, &metadata)?;
    authority::require_verified_authority(env, config, &caller)?;

    if has_campaign(env, &id) {
        return Err(RegistryError::CampaignExists);
    }
    if config.beneficiary.is_none() {
        return Err(RegistryError::AuthorityNotVerified);
    }
    if !region_index::has_capacity(env, &region) {
        log!(env, "region bucket full", region);
        return Err(RegistryError::MaxCampaignsExceeded);
    }

    fee::charge_creation_fee(env, config, &caller)?;

    let campaign = Campaign {
        id: id.clone(),
        region: region.clone(),
        vaccine_type,
        target_population,
        creator: caller.clone(),
        created_at: utils::current_ledger(env),
        status: true,
        metadata,
    };
    put_campaign(env, &campaign);
    region_index::append(env, &region, &id)?;
    config.next_campaign_id += 1;

    events::emit_campaign_registered(
        env,
        events::CampaignRegisteredEvent {
            campaign_id: id.clone(),
            creator: caller,
            region,
        },
    );

    Ok(id)
}

/// Apply a creator's change of region, vaccine type and target population.
///
/// The id is always removed from its old bucket and appended to the new one,
/// so an update within the same region moves it to the end of that bucket.
pub fn update(
    env: &Env,
    id: String,
    new_region: String,
    new_vaccine_type: String,
    new_target_population: u64,
    caller: Address,
) -> Result<bool, RegistryError> {
    let mut campaign = match get_campaign(env, &id) {
        Some(campaign) if campaign.creator == caller => campaign,
        _ => return Err(RegistryError::CampaignNotFoundOrNotCreator),
    };

    utils::validate_region(&new_region)?;
    utils::validate_vaccine_type(&new_vaccine_type)?;
    utils::validate_population(new_target_population)?;

    let old_region = campaign.region.clone();
    // Leaving the old bucket frees a slot only when it is also the destination
    if old_region != new_region && !region_index::has_capacity(env, &new_region) {
        log!(env, "region bucket full", new_region);
        return Err(RegistryError::MaxCampaignsExceeded);
    }

    let now = utils::current_ledger(env);
    campaign.region = new_region.clone();
    campaign.vaccine_type = new_vaccine_type.clone();
    campaign.target_population = new_target_population;
    campaign.created_at = now;
    put_campaign(env, &campaign);

    region_index::remove(env, &old_region, &id);
    region_index::append(env, &new_region, &id)?;

    update_log::record(
        env,
        &id,
        &CampaignUpdate {
            update_region: new_region.clone(),
            update_vaccine_type: new_vaccine_type,
            update_target_population: new_target_population,
            update_timestamp: now,
            updater: caller.clone(),
        },
    );

    events::emit_campaign_updated(
        env,
        events::CampaignUpdatedEvent {
            campaign_id: id,
            updater: caller,
            old_region,
            new_region,
        },
    );

    Ok(true)
}
