use soroban_sdk::{contractclient, Address, Env};

use crate::storage_types::*;

/// Interface of the contract that attests verified health authorities.
#[contractclient(name = "AuthorityOracleClient")]
pub trait AuthorityOracle {
    fn is_verified_authority(env: Env, principal: Address) -> bool;
}

/// Ask the configured oracle whether `principal` may register campaigns
pub fn is_verified_authority(env: &Env, config: &RegistryConfig, principal: &Address) -> bool {
    let oracle = AuthorityOracleClient::new(env, &config.authority_oracle);
    oracle.is_verified_authority(principal)
}

pub fn require_verified_authority(
    env: &Env,
    config: &RegistryConfig,
    principal: &Address,
) -> Result<(), RegistryError> {
    if !is_verified_authority(env, config, principal) {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}
