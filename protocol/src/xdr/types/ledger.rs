//! Ledger keys. Used by sponsorship revocation and by Soroban footprints.

use super::basic::{AccountId, ClaimableBalanceId, Hash, PoolId, String64, TrustLineAsset};
use super::contract::{ScAddress, ScVal};
use crate::xdr::VecM;

xdr_enum! {
    pub enum LedgerEntryType {
        Account = 0,
        Trustline = 1,
        Offer = 2,
        Data = 3,
        ClaimableBalance = 4,
        LiquidityPool = 5,
        ContractData = 6,
        ContractCode = 7,
        ConfigSetting = 8,
        Ttl = 9,
    }
}

xdr_enum! {
    pub enum ContractDataDurability {
        Temporary = 0,
        Persistent = 1,
    }
}

xdr_enum! {
    pub enum ConfigSettingId {
        ContractMaxSizeBytes = 0,
        ContractComputeV0 = 1,
        ContractLedgerCostV0 = 2,
        ContractHistoricalDataV0 = 3,
        ContractEventsV0 = 4,
        ContractBandwidthV0 = 5,
        ContractCostParamsCpuInstructions = 6,
        ContractCostParamsMemoryBytes = 7,
        ContractDataKeySizeBytes = 8,
        ContractDataEntrySizeBytes = 9,
        StateArchival = 10,
        ContractExecutionLanes = 11,
        BucketlistSizeWindow = 12,
        EvictionIterator = 13,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyAccount {
        pub account_id: AccountId,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyTrustLine {
        pub account_id: AccountId,
        pub asset: TrustLineAsset,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyOffer {
        pub seller_id: AccountId,
        pub offer_id: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyData {
        pub account_id: AccountId,
        pub data_name: String64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyClaimableBalance {
        pub balance_id: ClaimableBalanceId,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyLiquidityPool {
        pub liquidity_pool_id: PoolId,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyContractData {
        pub contract: ScAddress,
        pub key: ScVal,
        pub durability: ContractDataDurability,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyContractCode {
        pub hash: Hash,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyConfigSetting {
        pub config_setting_id: ConfigSettingId,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LedgerKeyTtl {
        pub key_hash: Hash,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LedgerKey switch (LedgerEntryType) {
        Account(LedgerKeyAccount) = LedgerEntryType::Account,
        Trustline(LedgerKeyTrustLine) = LedgerEntryType::Trustline,
        Offer(LedgerKeyOffer) = LedgerEntryType::Offer,
        Data(LedgerKeyData) = LedgerEntryType::Data,
        ClaimableBalance(LedgerKeyClaimableBalance) = LedgerEntryType::ClaimableBalance,
        LiquidityPool(LedgerKeyLiquidityPool) = LedgerEntryType::LiquidityPool,
        ContractData(LedgerKeyContractData) = LedgerEntryType::ContractData,
        ContractCode(LedgerKeyContractCode) = LedgerEntryType::ContractCode,
        ConfigSetting(LedgerKeyConfigSetting) = LedgerEntryType::ConfigSetting,
        Ttl(LedgerKeyTtl) = LedgerEntryType::Ttl,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct LedgerFootprint {
        pub read_only: VecM<LedgerKey>,
        pub read_write: VecM<LedgerKey>,
    }
}
