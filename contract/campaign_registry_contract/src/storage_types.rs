use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(String),
    RegionBucket(String),
    CampaignUpdate(String),
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: String,
    pub region: String,
    pub vaccine_type: String,
    pub target_population: u64,
    pub creator: Address,
    pub created_at: u32,               // Ledger sequence of the last write
    pub status: bool,
    pub metadata: String,
}

/// Most recent modification of a campaign. Overwritten on every update.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct CampaignUpdate {
    pub update_region: String,
    pub update_vaccine_type: String,
    pub update_target_population: u64,
    pub update_timestamp: u32,
    pub updater: Address,
}

/// Registry-wide settings and the id counter.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct RegistryConfig {
    pub next_campaign_id: u32,         // Count of successful registrations
    pub max_campaigns: u32,
    pub creation_fee: i128,
    pub beneficiary: Option<Address>,  // Set once, never changed
    pub authority_oracle: Address,
    pub fee_token: Address,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    CampaignExists = 100,
    Unauthorized = 101,
    InvalidId = 102,
    InvalidRegion = 103,
    InvalidVaccineType = 104,
    InvalidPopulation = 105,
    AuthorityNotVerified = 107,
    MaxCampaignsExceeded = 109,
    InvalidMetadata = 110,
    CampaignNotFoundOrNotCreator = 111,
    InvalidBeneficiary = 112,
    BeneficiaryAlreadySet = 113,
    BeneficiaryNotSet = 114,
    InvalidFee = 115,
    AlreadyInitialized = 116,
    NotInitialized = 117,
}

// Field limits, in bytes. Fields are ASCII only, so bytes equal characters.
pub const MAX_ID_LEN: u32 = 64;
pub const MAX_REGION_LEN: u32 = 100;
pub const MAX_VACCINE_TYPE_LEN: u32 = 50;
pub const MAX_METADATA_LEN: u32 = 256;

pub const MAX_CAMPAIGNS_PER_REGION: u32 = 100;
pub const DEFAULT_MAX_CAMPAIGNS: u32 = 1000;
pub const DEFAULT_CREATION_FEE: i128 = 1000;

// All-zero ed25519 account, nobody holds its key
pub const BURN_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
