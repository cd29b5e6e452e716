use soroban_sdk::{token, Address, Env};

use crate::events;
use crate::storage_types::*;

/// Charge the creation fee from `payer` to the beneficiary using the fee token
pub fn charge_creation_fee(
    env: &Env,
    config: &RegistryConfig,
    payer: &Address,
) -> Result<(), RegistryError> {
    let beneficiary = config
        .beneficiary
        .as_ref()
        .ok_or(RegistryError::AuthorityNotVerified)?;

    let token_client = token::TokenClient::new(env, &config.fee_token);
    token_client.transfer(payer, beneficiary, &config.creation_fee);

    events::emit_fee_paid(
        env,
        events::FeePaidEvent {
            from: payer.clone(),
            to: beneficiary.clone(),
            amount: config.creation_fee,
        },
    );

    Ok(())
}
