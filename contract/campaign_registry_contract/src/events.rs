use soroban_sdk::{contracttype, Address, String, Symbol};

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignRegisteredEvent {
    pub campaign_id: String,
    pub creator: Address,
    pub region: String,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignUpdatedEvent {
    pub campaign_id: String,
    pub updater: Address,
    pub old_region: String,
    pub new_region: String,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct FeePaidEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CreationFeeSetEvent {
    pub old_fee: i128,
    pub new_fee: i128,
}

pub fn emit_campaign_registered(
    env: &soroban_sdk::Env,
    event: CampaignRegisteredEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_registered"),),
        event,
    );
}

pub fn emit_campaign_updated(
    env: &soroban_sdk::Env,
    event: CampaignUpdatedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_updated"),),
        event,
    );
}

pub fn emit_fee_paid(
    env: &soroban_sdk::Env,
    event: FeePaidEvent,
) {
    env.events().publish(
        (Symbol::new(env, "fee_paid"),),
        event,
    );
}

pub fn emit_beneficiary_set(
    env: &soroban_sdk::Env,
    beneficiary: Address,
) {
    env.events().publish(
        (Symbol::new(env, "beneficiary_set"),),
        beneficiary,
    );
}

pub fn emit_creation_fee_set(
    env: &soroban_sdk::Env,
    event: CreationFeeSetEvent,
) {
    env.events().publish(
        (Symbol::new(env, "creation_fee_set"),),
        event,
    );
}
