//! Operations: the 27 things a transaction can ask the ledger to do.

use super::basic::{
    AccountId, Asset, AssetCode, ChangeTrustAsset, ClaimableBalanceId, DataValue, MuxedAccount,
    PoolId, Price, SequenceNumber, Signer, SignerKey, String32, String64,
};
use super::ledger::LedgerKey;
use super::soroban::{ExtendFootprintTtlOp, InvokeHostFunctionOp, RestoreFootprintOp};
use crate::xdr::VecM;

xdr_enum! {
    pub enum OperationType {
        CreateAccount = 0,
        Payment = 1,
        PathPaymentStrictReceive = 2,
        ManageSellOffer = 3,
        CreatePassiveSellOffer = 4,
        SetOptions = 5,
        ChangeTrust = 6,
        AllowTrust = 7,
        AccountMerge = 8,
        Inflation = 9,
        ManageData = 10,
        BumpSequence = 11,
        ManageBuyOffer = 12,
        PathPaymentStrictSend = 13,
        CreateClaimableBalance = 14,
        ClaimClaimableBalance = 15,
        BeginSponsoringFutureReserves = 16,
        EndSponsoringFutureReserves = 17,
        RevokeSponsorship = 18,
        Clawback = 19,
        ClawbackClaimableBalance = 20,
        SetTrustLineFlags = 21,
        LiquidityPoolDeposit = 22,
        LiquidityPoolWithdraw = 23,
        InvokeHostFunction = 24,
        ExtendFootprintTtl = 25,
        RestoreFootprint = 26,
    }
}

// ---------------------------------------------------------------------------
// Classic operation bodies
// ---------------------------------------------------------------------------

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateAccountOp {
        pub destination: AccountId,
        pub starting_balance: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PaymentOp {
        pub destination: MuxedAccount,
        pub asset: Asset,
        pub amount: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PathPaymentStrictReceiveOp {
        pub send_asset: Asset,
        pub send_max: i64,
        pub destination: MuxedAccount,
        pub dest_asset: Asset,
        pub dest_amount: i64,
        pub path: VecM<Asset, 5>,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PathPaymentStrictSendOp {
        pub send_asset: Asset,
        pub send_amount: i64,
        pub destination: MuxedAccount,
        pub dest_asset: Asset,
        pub dest_min: i64,
        pub path: VecM<Asset, 5>,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ManageSellOfferOp {
        pub selling: Asset,
        pub buying: Asset,
        pub amount: i64,
        pub price: Price,
        pub offer_id: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ManageBuyOfferOp {
        pub selling: Asset,
        pub buying: Asset,
        pub buy_amount: i64,
        pub price: Price,
        pub offer_id: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreatePassiveSellOfferOp {
        pub selling: Asset,
        pub buying: Asset,
        pub amount: i64,
        pub price: Price,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct SetOptionsOp {
        pub inflation_dest: Option<AccountId>,
        pub clear_flags: Option<u32>,
        pub set_flags: Option<u32>,
        pub master_weight: Option<u32>,
        pub low_threshold: Option<u32>,
        pub med_threshold: Option<u32>,
        pub high_threshold: Option<u32>,
        pub home_domain: Option<String32>,
        pub signer: Option<Signer>,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ChangeTrustOp {
        pub line: ChangeTrustAsset,
        pub limit: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AllowTrustOp {
        pub trustor: AccountId,
        pub asset: AssetCode,
        pub authorize: u32,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ManageDataOp {
        pub data_name: String64,
        pub data_value: Option<DataValue>,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BumpSequenceOp {
        pub bump_to: SequenceNumber,
    }
}

// ---------------------------------------------------------------------------
// Claimable balances and sponsorship
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum ClaimPredicateType {
        Unconditional = 0,
        And = 1,
        Or = 2,
        Not = 3,
        BeforeAbsoluteTime = 4,
        BeforeRelativeTime = 5,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ClaimPredicate switch (ClaimPredicateType) {
        Unconditional = ClaimPredicateType::Unconditional,
        And(VecM<ClaimPredicate, 2>) = ClaimPredicateType::And,
        Or(VecM<ClaimPredicate, 2>) = ClaimPredicateType::Or,
        Not(Option<Box<ClaimPredicate>>) = ClaimPredicateType::Not,
        BeforeAbsoluteTime(i64) = ClaimPredicateType::BeforeAbsoluteTime,
        BeforeRelativeTime(i64) = ClaimPredicateType::BeforeRelativeTime,
    }
}

xdr_enum! {
    pub enum ClaimantType {
        ClaimantTypeV0 = 0,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClaimantV0 {
        pub destination: AccountId,
        pub predicate: ClaimPredicate,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Claimant switch (ClaimantType) {
        ClaimantTypeV0(ClaimantV0) = ClaimantType::ClaimantTypeV0,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateClaimableBalanceOp {
        pub asset: Asset,
        pub amount: i64,
        pub claimants: VecM<Claimant, 10>,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClaimClaimableBalanceOp {
        pub balance_id: ClaimableBalanceId,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BeginSponsoringFutureReservesOp {
        pub sponsored_id: AccountId,
    }
}

xdr_enum! {
    pub enum RevokeSponsorshipType {
        LedgerEntry = 0,
        Signer = 1,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RevokeSponsorshipOpSigner {
        pub account_id: AccountId,
        pub signer_key: SignerKey,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RevokeSponsorshipOp switch (RevokeSponsorshipType) {
        LedgerEntry(LedgerKey) = RevokeSponsorshipType::LedgerEntry,
        Signer(RevokeSponsorshipOpSigner) = RevokeSponsorshipType::Signer,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClawbackOp {
        pub asset: Asset,
        pub from: MuxedAccount,
        pub amount: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClawbackClaimableBalanceOp {
        pub balance_id: ClaimableBalanceId,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SetTrustLineFlagsOp {
        pub trustor: AccountId,
        pub asset: Asset,
        pub clear_flags: u32,
        pub set_flags: u32,
    }
}

// ---------------------------------------------------------------------------
// Liquidity pools
// ---------------------------------------------------------------------------

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LiquidityPoolDepositOp {
        pub liquidity_pool_id: PoolId,
        pub max_amount_a: i64,
        pub max_amount_b: i64,
        pub min_price: Price,
        pub max_price: Price,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct LiquidityPoolWithdrawOp {
        pub liquidity_pool_id: PoolId,
        pub amount: i64,
        pub min_amount_a: i64,
        pub min_amount_b: i64,
    }
}

// ---------------------------------------------------------------------------
// Operation
// ---------------------------------------------------------------------------

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum OperationBody switch (OperationType) {
        CreateAccount(CreateAccountOp) = OperationType::CreateAccount,
        Payment(PaymentOp) = OperationType::Payment,
        PathPaymentStrictReceive(PathPaymentStrictReceiveOp) = OperationType::PathPaymentStrictReceive,
        ManageSellOffer(ManageSellOfferOp) = OperationType::ManageSellOffer,
        CreatePassiveSellOffer(CreatePassiveSellOfferOp) = OperationType::CreatePassiveSellOffer,
        SetOptions(SetOptionsOp) = OperationType::SetOptions,
        ChangeTrust(ChangeTrustOp) = OperationType::ChangeTrust,
        AllowTrust(AllowTrustOp) = OperationType::AllowTrust,
        AccountMerge(MuxedAccount) = OperationType::AccountMerge,
        Inflation = OperationType::Inflation,
        ManageData(ManageDataOp) = OperationType::ManageData,
        BumpSequence(BumpSequenceOp) = OperationType::BumpSequence,
        ManageBuyOffer(ManageBuyOfferOp) = OperationType::ManageBuyOffer,
        PathPaymentStrictSend(PathPaymentStrictSendOp) = OperationType::PathPaymentStrictSend,
        CreateClaimableBalance(CreateClaimableBalanceOp) = OperationType::CreateClaimableBalance,
        ClaimClaimableBalance(ClaimClaimableBalanceOp) = OperationType::ClaimClaimableBalance,
        BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp) =
            OperationType::BeginSponsoringFutureReserves,
        EndSponsoringFutureReserves = OperationType::EndSponsoringFutureReserves,
        RevokeSponsorship(RevokeSponsorshipOp) = OperationType::RevokeSponsorship,
        Clawback(ClawbackOp) = OperationType::Clawback,
        ClawbackClaimableBalance(ClawbackClaimableBalanceOp) = OperationType::ClawbackClaimableBalance,
        SetTrustLineFlags(SetTrustLineFlagsOp) = OperationType::SetTrustLineFlags,
        LiquidityPoolDeposit(LiquidityPoolDepositOp) = OperationType::LiquidityPoolDeposit,
        LiquidityPoolWithdraw(LiquidityPoolWithdrawOp) = OperationType::LiquidityPoolWithdraw,
        InvokeHostFunction(InvokeHostFunctionOp) = OperationType::InvokeHostFunction,
        ExtendFootprintTtl(ExtendFootprintTtlOp) = OperationType::ExtendFootprintTtl,
        RestoreFootprint(RestoreFootprintOp) = OperationType::RestoreFootprint,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Operation {
        /// Overrides the transaction's source account for this operation.
        pub source_account: Option<MuxedAccount>,
        pub body: OperationBody,
    }
}

impl Operation {
    /// `true` for the operations that run contract code and therefore need
    /// Soroban transaction data.
    pub fn is_soroban(&self) -> bool {
        matches!(
            self.body,
            OperationBody::InvokeHostFunction(_)
                | OperationBody::ExtendFootprintTtl(_)
                | OperationBody::RestoreFootprint(_)
        )
    }
}
