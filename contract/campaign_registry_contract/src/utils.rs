use soroban_sdk::{Env, String};

use crate::storage_types::*;

// Metadata has the widest limit of all fields
const FIELD_BUF_LEN: usize = MAX_METADATA_LEN as usize;

/// True when `value` is at most `max_len` bytes, all of them ASCII
pub fn is_ascii_within(value: &String, max_len: u32) -> bool {
    let len = value.len();
    if len > max_len || len as usize > FIELD_BUF_LEN {
        return false;
    }
    let mut buf = [0u8; FIELD_BUF_LEN];
    let bytes = &mut buf[..len as usize];
    value.copy_into_slice(bytes);
    bytes.is_ascii()
}

/// True when `value` is non-empty ASCII of at most `max_len` bytes
pub fn is_bounded_non_empty(value: &String, max_len: u32) -> bool {
    !value.is_empty() && is_ascii_within(value, max_len)
}

pub fn validate_campaign_id(id: &String) -> Result<(), RegistryError> {
    if !is_bounded_non_empty(id, MAX_ID_LEN) {
        return Err(RegistryError::InvalidId);
    }
    Ok(())
}

pub fn validate_region(region: &String) -> Result<(), RegistryError> {
    if !is_bounded_non_empty(region, MAX_REGION_LEN) {
        return Err(RegistryError::InvalidRegion);
    }
    Ok(())
}

pub fn validate_vaccine_type(vaccine_type: &String) -> Result<(), RegistryError> {
    if !is_bounded_non_empty(vaccine_type, MAX_VACCINE_TYPE_LEN) {
        return Err(RegistryError::InvalidVaccineType);
    }
    Ok(())
}

pub fn validate_population(target_population: u64) -> Result<(), RegistryError> {
    if target_population == 0 {
        return Err(RegistryError::InvalidPopulation);
    }
    Ok(())
}

/// Metadata may be empty
pub fn validate_metadata(metadata: &String) -> Result<(), RegistryError> {
    if !is_ascii_within(metadata, MAX_METADATA_LEN) {
        return Err(RegistryError::InvalidMetadata);
    }
    Ok(())
}

pub fn validate_fee(fee: i128) -> Result<(), RegistryError> {
    if fee < 0 {
        return Err(RegistryError::InvalidFee);
    }
    Ok(())
}

/// Get current logical timestamp
pub fn current_ledger(env: &Env) -> u32 {
    env.ledger().sequence()
}
