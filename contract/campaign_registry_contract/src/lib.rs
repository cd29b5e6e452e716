#![no_std]

mod authority;
mod campaign;
mod events;
mod fee;
mod region_index;
mod storage_types;
mod update_log;
mod utils;


use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use authority::{AuthorityOracle, AuthorityOracleClient};
pub use storage_types::*;
pub use utils::*;

#[contract]
pub struct CampaignRegistryContract;

#[contractimpl]
impl CampaignRegistryContract {
    /// Initialize the registry with its authority oracle and fee token.
    /// `max_campaigns` defaults to `DEFAULT_MAX_CAMPAIGNS`.
    pub fn initialize(
        env: Env,
        authority_oracle: Address,
        fee_token: Address,
        max_campaigns: Option<u32>,
    ) -> Result<(), RegistryError> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(RegistryError::AlreadyInitialized);
        }

        let config = RegistryConfig {
            next_campaign_id: 0,
            max_campaigns: max_campaigns.unwrap_or(DEFAULT_MAX_CAMPAIGNS),
            creation_fee: DEFAULT_CREATION_FEE,
            beneficiary: None,
            authority_oracle,
            fee_token,
        };
        campaign::save_config(&env, &config);
        Ok(())
    }

    /// One-time choice of the address that receives creation fees
    pub fn set_beneficiary(env: Env, beneficiary: Address) -> Result<bool, RegistryError> {
        let mut config = campaign::load_config(&env)?;

        let burn = Address::from_string(&String::from_str(&env, BURN_ADDRESS));
        if beneficiary == burn {
            return Err(RegistryError::InvalidBeneficiary);
        }
        if config.beneficiary.is_some() {
            return Err(RegistryError::BeneficiaryAlreadySet);
        }

        config.beneficiary = Some(beneficiary.clone());
        campaign::save_config(&env, &config);

        events::emit_beneficiary_set(&env, beneficiary);
        Ok(true)
    }

    /// Replace the creation fee. Allowed once a beneficiary exists.
    pub fn set_creation_fee(env: Env, new_fee: i128) -> Result<bool, RegistryError> {
        let mut config = campaign::load_config(&env)?;

        if config.beneficiary.is_none() {
            return Err(RegistryError::BeneficiaryNotSet);
        }
        utils::validate_fee(new_fee)?;

        let old_fee = config.creation_fee;
        config.creation_fee = new_fee;
        campaign::save_config(&env, &config);

        events::emit_creation_fee_set(&env, events::CreationFeeSetEvent { old_fee, new_fee });
        Ok(true)
    }

    /// Register a new campaign. The caller pays the creation fee.
    pub fn register_campaign(
        env: Env,
        caller: Address,
        campaign_id: String,
        region: String,
        vaccine_type: String,
        target_population: u64,
        metadata: String,
    ) -> Result<String, RegistryError> {
        caller.require_auth();

        let mut config = campaign::load_config(&env)?;
        let id = campaign::register(
            &env,
            &mut config,
            campaign_id,
            region,
            vaccine_type,
            target_population,
            metadata,
            caller,
        )?;
        campaign::save_config(&env, &config);

        Ok(id)
    }

    /// Change region, vaccine type and target population of a campaign.
    /// Only its creator may do so.
    pub fn update_campaign(
        env: Env,
        caller: Address,
        campaign_id: String,
        region: String,
        vaccine_type: String,
        target_population: u64,
    ) -> Result<bool, RegistryError> {
        caller.require_auth();

        campaign::load_config(&env)?;
        campaign::update(&env, campaign_id, region, vaccine_type, target_population, caller)
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: String) -> Option<Campaign> {
        campaign::get_campaign(&env, &campaign_id)
    }

    pub fn get_campaign_update(env: Env, campaign_id: String) -> Option<CampaignUpdate> {
        update_log::get(&env, &campaign_id)
    }

    pub fn get_campaign_count(env: Env) -> Result<u32, RegistryError> {
        Ok(campaign::load_config(&env)?.next_campaign_id)
    }

    pub fn get_campaigns_by_region(env: Env, region: String) -> Vec<String> {
        region_index::get(&env, &region)
    }

    pub fn is_campaign_registered(env: Env, campaign_id: String) -> bool {
        campaign::has_campaign(&env, &campaign_id)
    }

    pub fn get_config(env: Env) -> Result<RegistryConfig, RegistryError> {
        campaign::load_config(&env)
    }

    pub fn get_creation_fee(env: Env) -> Result<i128, RegistryError> {
        Ok(campaign::load_config(&env)?.creation_fee)
    }

    pub fn get_beneficiary(env: Env) -> Result<Option<Address>, RegistryError> {
        Ok(campaign::load_config(&env)?.beneficiary)
    }
}
