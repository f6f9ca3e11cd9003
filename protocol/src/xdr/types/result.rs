//! Transaction and operation results.
//!
//! Every operation type has its result union here, so the result of any
//! transaction this crate can build also decodes. Passive sell offers reuse
//! the sell-offer result.

use super::basic::{AccountId, Asset, ClaimableBalanceId, Hash, PoolId, Price, Uint256};
use super::operation::OperationType;
use crate::xdr::VecM;

// ---------------------------------------------------------------------------
// Per-operation results
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum CreateAccountResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        LowReserve = -3,
        AlreadyExist = -4,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum CreateAccountResult switch (CreateAccountResultCode) {
        Success = CreateAccountResultCode::Success,
        Malformed = CreateAccountResultCode::Malformed,
        Underfunded = CreateAccountResultCode::Underfunded,
        LowReserve = CreateAccountResultCode::LowReserve,
        AlreadyExist = CreateAccountResultCode::AlreadyExist,
    }
}

xdr_enum! {
    pub enum PaymentResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PaymentResult switch (PaymentResultCode) {
        Success = PaymentResultCode::Success,
        Malformed = PaymentResultCode::Malformed,
        Underfunded = PaymentResultCode::Underfunded,
        SrcNoTrust = PaymentResultCode::SrcNoTrust,
        SrcNotAuthorized = PaymentResultCode::SrcNotAuthorized,
        NoDestination = PaymentResultCode::NoDestination,
        NoTrust = PaymentResultCode::NoTrust,
        NotAuthorized = PaymentResultCode::NotAuthorized,
        LineFull = PaymentResultCode::LineFull,
        NoIssuer = PaymentResultCode::NoIssuer,
    }
}

xdr_enum! {
    pub enum ChangeTrustResultCode {
        Success = 0,
        Malformed = -1,
        NoIssuer = -2,
        InvalidLimit = -3,
        LowReserve = -4,
        SelfNotAllowed = -5,
        TrustLineMissing = -6,
        CannotDelete = -7,
        NotAuthMaintainLiabilities = -8,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ChangeTrustResult switch (ChangeTrustResultCode) {
        Success = ChangeTrustResultCode::Success,
        Malformed = ChangeTrustResultCode::Malformed,
        NoIssuer = ChangeTrustResultCode::NoIssuer,
        InvalidLimit = ChangeTrustResultCode::InvalidLimit,
        LowReserve = ChangeTrustResultCode::LowReserve,
        SelfNotAllowed = ChangeTrustResultCode::SelfNotAllowed,
        TrustLineMissing = ChangeTrustResultCode::TrustLineMissing,
        CannotDelete = ChangeTrustResultCode::CannotDelete,
        NotAuthMaintainLiabilities = ChangeTrustResultCode::NotAuthMaintainLiabilities,
    }
}

xdr_enum! {
    pub enum AccountMergeResultCode {
        Success = 0,
        Malformed = -1,
        NoAccount = -2,
        ImmutableSet = -3,
        HasSubEntries = -4,
        SeqnumTooFar = -5,
        DestFull = -6,
        IsSponsor = -7,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AccountMergeResult switch (AccountMergeResultCode) {
        /// Carries the balance of the merged source account.
        Success(i64) = AccountMergeResultCode::Success,
        Malformed = AccountMergeResultCode::Malformed,
        NoAccount = AccountMergeResultCode::NoAccount,
        ImmutableSet = AccountMergeResultCode::ImmutableSet,
        HasSubEntries = AccountMergeResultCode::HasSubEntries,
        SeqnumTooFar = AccountMergeResultCode::SeqnumTooFar,
        DestFull = AccountMergeResultCode::DestFull,
        IsSponsor = AccountMergeResultCode::IsSponsor,
    }
}

xdr_enum! {
    pub enum ManageDataResultCode {
        Success = 0,
        NotSupportedYet = -1,
        NameNotFound = -2,
        LowReserve = -3,
        InvalidName = -4,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ManageDataResult switch (ManageDataResultCode) {
        Success = ManageDataResultCode::Success,
        NotSupportedYet = ManageDataResultCode::NotSupportedYet,
        NameNotFound = ManageDataResultCode::NameNotFound,
        LowReserve = ManageDataResultCode::LowReserve,
        InvalidName = ManageDataResultCode::InvalidName,
    }
}

xdr_enum! {
    pub enum BumpSequenceResultCode {
        Success = 0,
        BadSeq = -1,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BumpSequenceResult switch (BumpSequenceResultCode) {
        Success = BumpSequenceResultCode::Success,
        BadSeq = BumpSequenceResultCode::BadSeq,
    }
}

xdr_enum! {
    pub enum InvokeHostFunctionResultCode {
        Success = 0,
        Malformed = -1,
        Trapped = -2,
        ResourceLimitExceeded = -3,
        EntryArchived = -4,
        InsufficientRefundableFee = -5,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InvokeHostFunctionResult switch (InvokeHostFunctionResultCode) {
        /// Hash of the invocation's return value and events.
        Success(Hash) = InvokeHostFunctionResultCode::Success,
        Malformed = InvokeHostFunctionResultCode::Malformed,
        Trapped = InvokeHostFunctionResultCode::Trapped,
        ResourceLimitExceeded = InvokeHostFunctionResultCode::ResourceLimitExceeded,
        EntryArchived = InvokeHostFunctionResultCode::EntryArchived,
        InsufficientRefundableFee = InvokeHostFunctionResultCode::InsufficientRefundableFee,
    }
}

xdr_enum! {
    pub enum ExtendFootprintTtlResultCode {
        Success = 0,
        Malformed = -1,
        ResourceLimitExceeded = -2,
        InsufficientRefundableFee = -3,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ExtendFootprintTtlResult switch (ExtendFootprintTtlResultCode) {
        Success = ExtendFootprintTtlResultCode::Success,
        Malformed = ExtendFootprintTtlResultCode::Malformed,
        ResourceLimitExceeded = ExtendFootprintTtlResultCode::ResourceLimitExceeded,
        InsufficientRefundableFee = ExtendFootprintTtlResultCode::InsufficientRefundableFee,
    }
}

xdr_enum! {
    pub enum RestoreFootprintResultCode {
        Success = 0,
        Malformed = -1,
        ResourceLimitExceeded = -2,
        InsufficientRefundableFee = -3,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RestoreFootprintResult switch (RestoreFootprintResultCode) {
        Success = RestoreFootprintResultCode::Success,
        Malformed = RestoreFootprintResultCode::Malformed,
        ResourceLimitExceeded = RestoreFootprintResultCode::ResourceLimitExceeded,
        InsufficientRefundableFee = RestoreFootprintResultCode::InsufficientRefundableFee,
    }
}

// ---------------------------------------------------------------------------
// Offers and path payments
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum ClaimAtomType {
        V0 = 0,
        OrderBook = 1,
        LiquidityPool = 2,
    }
}

xdr_struct! {
    /// An offer crossed before offers were keyed by account id.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClaimOfferAtomV0 {
        pub seller_ed25519: Uint256,
        pub offer_id: i64,
        pub asset_sold: Asset,
        pub amount_sold: i64,
        pub asset_bought: Asset,
        pub amount_bought: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClaimOfferAtom {
        pub seller_id: AccountId,
        pub offer_id: i64,
        pub asset_sold: Asset,
        pub amount_sold: i64,
        pub asset_bought: Asset,
        pub amount_bought: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ClaimLiquidityAtom {
        pub liquidity_pool_id: PoolId,
        pub asset_sold: Asset,
        pub amount_sold: i64,
        pub asset_bought: Asset,
        pub amount_bought: i64,
    }
}

xdr_union! {
    /// One fill of an order: against an offer or against a pool.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ClaimAtom switch (ClaimAtomType) {
        V0(ClaimOfferAtomV0) = ClaimAtomType::V0,
        OrderBook(ClaimOfferAtom) = ClaimAtomType::OrderBook,
        LiquidityPool(ClaimLiquidityAtom) = ClaimAtomType::LiquidityPool,
    }
}

xdr_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum OfferEntryExt switch (int) {
        #[default]
        V0 = 0,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct OfferEntry {
        pub seller_id: AccountId,
        pub offer_id: i64,
        pub selling: Asset,
        pub buying: Asset,
        pub amount: i64,
        pub price: Price,
        pub flags: u32,
        pub ext: OfferEntryExt,
    }
}

xdr_enum! {
    pub enum ManageOfferEffect {
        Created = 0,
        Updated = 1,
        Deleted = 2,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ManageOfferSuccessResultOffer switch (ManageOfferEffect) {
        Created(OfferEntry) = ManageOfferEffect::Created,
        Updated(OfferEntry) = ManageOfferEffect::Updated,
        Deleted = ManageOfferEffect::Deleted,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ManageOfferSuccessResult {
        /// Offers crossed while placing this one.
        pub offers_claimed: VecM<ClaimAtom>,
        pub offer: ManageOfferSuccessResultOffer,
    }
}

xdr_enum! {
    pub enum ManageSellOfferResultCode {
        Success = 0,
        Malformed = -1,
        SellNoTrust = -2,
        BuyNoTrust = -3,
        SellNotAuthorized = -4,
        BuyNotAuthorized = -5,
        LineFull = -6,
        Underfunded = -7,
        CrossSelf = -8,
        SellNoIssuer = -9,
        BuyNoIssuer = -10,
        NotFound = -11,
        LowReserve = -12,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ManageSellOfferResult switch (ManageSellOfferResultCode) {
        Success(ManageOfferSuccessResult) = ManageSellOfferResultCode::Success,
        Malformed = ManageSellOfferResultCode::Malformed,
        SellNoTrust = ManageSellOfferResultCode::SellNoTrust,
        BuyNoTrust = ManageSellOfferResultCode::BuyNoTrust,
        SellNotAuthorized = ManageSellOfferResultCode::SellNotAuthorized,
        BuyNotAuthorized = ManageSellOfferResultCode::BuyNotAuthorized,
        LineFull = ManageSellOfferResultCode::LineFull,
        Underfunded = ManageSellOfferResultCode::Underfunded,
        CrossSelf = ManageSellOfferResultCode::CrossSelf,
        SellNoIssuer = ManageSellOfferResultCode::SellNoIssuer,
        BuyNoIssuer = ManageSellOfferResultCode::BuyNoIssuer,
        NotFound = ManageSellOfferResultCode::NotFound,
        LowReserve = ManageSellOfferResultCode::LowReserve,
    }
}

xdr_enum! {
    pub enum ManageBuyOfferResultCode {
        Success = 0,
        Malformed = -1,
        SellNoTrust = -2,
        BuyNoTrust = -3,
        SellNotAuthorized = -4,
        BuyNotAuthorized = -5,
        LineFull = -6,
        Underfunded = -7,
        CrossSelf = -8,
        SellNoIssuer = -9,
        BuyNoIssuer = -10,
        NotFound = -11,
        LowReserve = -12,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ManageBuyOfferResult switch (ManageBuyOfferResultCode) {
        Success(ManageOfferSuccessResult) = ManageBuyOfferResultCode::Success,
        Malformed = ManageBuyOfferResultCode::Malformed,
        SellNoTrust = ManageBuyOfferResultCode::SellNoTrust,
        BuyNoTrust = ManageBuyOfferResultCode::BuyNoTrust,
        SellNotAuthorized = ManageBuyOfferResultCode::SellNotAuthorized,
        BuyNotAuthorized = ManageBuyOfferResultCode::BuyNotAuthorized,
        LineFull = ManageBuyOfferResultCode::LineFull,
        Underfunded = ManageBuyOfferResultCode::Underfunded,
        CrossSelf = ManageBuyOfferResultCode::CrossSelf,
        SellNoIssuer = ManageBuyOfferResultCode::SellNoIssuer,
        BuyNoIssuer = ManageBuyOfferResultCode::BuyNoIssuer,
        NotFound = ManageBuyOfferResultCode::NotFound,
        LowReserve = ManageBuyOfferResultCode::LowReserve,
    }
}

xdr_struct! {
    /// The final hop of a path payment.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SimplePaymentResult {
        pub destination: AccountId,
        pub asset: Asset,
        pub amount: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PathPaymentSuccess {
        pub offers: VecM<ClaimAtom>,
        pub last: SimplePaymentResult,
    }
}

xdr_enum! {
    pub enum PathPaymentStrictReceiveResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
        TooFewOffers = -10,
        OfferCrossSelf = -11,
        OverSendmax = -12,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PathPaymentStrictReceiveResult switch (PathPaymentStrictReceiveResultCode) {
        Success(PathPaymentSuccess) = PathPaymentStrictReceiveResultCode::Success,
        Malformed = PathPaymentStrictReceiveResultCode::Malformed,
        Underfunded = PathPaymentStrictReceiveResultCode::Underfunded,
        SrcNoTrust = PathPaymentStrictReceiveResultCode::SrcNoTrust,
        SrcNotAuthorized = PathPaymentStrictReceiveResultCode::SrcNotAuthorized,
        NoDestination = PathPaymentStrictReceiveResultCode::NoDestination,
        NoTrust = PathPaymentStrictReceiveResultCode::NoTrust,
        NotAuthorized = PathPaymentStrictReceiveResultCode::NotAuthorized,
        LineFull = PathPaymentStrictReceiveResultCode::LineFull,
        /// The asset whose issuer is missing.
        NoIssuer(Asset) = PathPaymentStrictReceiveResultCode::NoIssuer,
        TooFewOffers = PathPaymentStrictReceiveResultCode::TooFewOffers,
        OfferCrossSelf = PathPaymentStrictReceiveResultCode::OfferCrossSelf,
        OverSendmax = PathPaymentStrictReceiveResultCode::OverSendmax,
    }
}

xdr_enum! {
    pub enum PathPaymentStrictSendResultCode {
        Success = 0,
        Malformed = -1,
        Underfunded = -2,
        SrcNoTrust = -3,
        SrcNotAuthorized = -4,
        NoDestination = -5,
        NoTrust = -6,
        NotAuthorized = -7,
        LineFull = -8,
        NoIssuer = -9,
        TooFewOffers = -10,
        OfferCrossSelf = -11,
        UnderDestmin = -12,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PathPaymentStrictSendResult switch (PathPaymentStrictSendResultCode) {
        Success(PathPaymentSuccess) = PathPaymentStrictSendResultCode::Success,
        Malformed = PathPaymentStrictSendResultCode::Malformed,
        Underfunded = PathPaymentStrictSendResultCode::Underfunded,
        SrcNoTrust = PathPaymentStrictSendResultCode::SrcNoTrust,
        SrcNotAuthorized = PathPaymentStrictSendResultCode::SrcNotAuthorized,
        NoDestination = PathPaymentStrictSendResultCode::NoDestination,
        NoTrust = PathPaymentStrictSendResultCode::NoTrust,
        NotAuthorized = PathPaymentStrictSendResultCode::NotAuthorized,
        LineFull = PathPaymentStrictSendResultCode::LineFull,
        NoIssuer(Asset) = PathPaymentStrictSendResultCode::NoIssuer,
        TooFewOffers = PathPaymentStrictSendResultCode::TooFewOffers,
        OfferCrossSelf = PathPaymentStrictSendResultCode::OfferCrossSelf,
        UnderDestmin = PathPaymentStrictSendResultCode::UnderDestmin,
    }
}

// ---------------------------------------------------------------------------
// Account settings and trust
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum SetOptionsResultCode {
        Success = 0,
        LowReserve = -1,
        TooManySigners = -2,
        BadFlags = -3,
        InvalidInflation = -4,
        CantChange = -5,
        UnknownFlag = -6,
        ThresholdOutOfRange = -7,
        BadSigner = -8,
        InvalidHomeDomain = -9,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SetOptionsResult switch (SetOptionsResultCode) {
        Success = SetOptionsResultCode::Success,
        LowReserve = SetOptionsResultCode::LowReserve,
        TooManySigners = SetOptionsResultCode::TooManySigners,
        BadFlags = SetOptionsResultCode::BadFlags,
        InvalidInflation = SetOptionsResultCode::InvalidInflation,
        CantChange = SetOptionsResultCode::CantChange,
        UnknownFlag = SetOptionsResultCode::UnknownFlag,
        ThresholdOutOfRange = SetOptionsResultCode::ThresholdOutOfRange,
        BadSigner = SetOptionsResultCode::BadSigner,
        InvalidHomeDomain = SetOptionsResultCode::InvalidHomeDomain,
    }
}

xdr_enum! {
    pub enum AllowTrustResultCode {
        Success = 0,
        Malformed = -1,
        NoTrustLine = -2,
        TrustNotRequired = -3,
        CantRevoke = -4,
        SelfNotAllowed = -5,
        LowReserve = -6,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AllowTrustResult switch (AllowTrustResultCode) {
        Success = AllowTrustResultCode::Success,
        Malformed = AllowTrustResultCode::Malformed,
        NoTrustLine = AllowTrustResultCode::NoTrustLine,
        TrustNotRequired = AllowTrustResultCode::TrustNotRequired,
        CantRevoke = AllowTrustResultCode::CantRevoke,
        SelfNotAllowed = AllowTrustResultCode::SelfNotAllowed,
        LowReserve = AllowTrustResultCode::LowReserve,
    }
}

xdr_enum! {
    pub enum InflationResultCode {
        Success = 0,
        NotTime = -1,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InflationPayout {
        pub destination: AccountId,
        pub amount: i64,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InflationResult switch (InflationResultCode) {
        Success(VecM<InflationPayout>) = InflationResultCode::Success,
        NotTime = InflationResultCode::NotTime,
    }
}

xdr_enum! {
    pub enum SetTrustLineFlagsResultCode {
        Success = 0,
        Malformed = -1,
        NoTrustLine = -2,
        CantRevoke = -3,
        InvalidState = -4,
        LowReserve = -5,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SetTrustLineFlagsResult switch (SetTrustLineFlagsResultCode) {
        Success = SetTrustLineFlagsResultCode::Success,
        Malformed = SetTrustLineFlagsResultCode::Malformed,
        NoTrustLine = SetTrustLineFlagsResultCode::NoTrustLine,
        CantRevoke = SetTrustLineFlagsResultCode::CantRevoke,
        InvalidState = SetTrustLineFlagsResultCode::InvalidState,
        LowReserve = SetTrustLineFlagsResultCode::LowReserve,
    }
}

// ---------------------------------------------------------------------------
// Claimable balances, sponsorship, clawback
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum CreateClaimableBalanceResultCode {
        Success = 0,
        Malformed = -1,
        LowReserve = -2,
        NoTrust = -3,
        NotAuthorized = -4,
        Underfunded = -5,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum CreateClaimableBalanceResult switch (CreateClaimableBalanceResultCode) {
        /// Id of the balance just created.
        Success(ClaimableBalanceId) = CreateClaimableBalanceResultCode::Success,
        Malformed = CreateClaimableBalanceResultCode::Malformed,
        LowReserve = CreateClaimableBalanceResultCode::LowReserve,
        NoTrust = CreateClaimableBalanceResultCode::NoTrust,
        NotAuthorized = CreateClaimableBalanceResultCode::NotAuthorized,
        Underfunded = CreateClaimableBalanceResultCode::Underfunded,
    }
}

xdr_enum! {
    pub enum ClaimClaimableBalanceResultCode {
        Success = 0,
        DoesNotExist = -1,
        CannotClaim = -2,
        LineFull = -3,
        NoTrust = -4,
        NotAuthorized = -5,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ClaimClaimableBalanceResult switch (ClaimClaimableBalanceResultCode) {
        Success = ClaimClaimableBalanceResultCode::Success,
        DoesNotExist = ClaimClaimableBalanceResultCode::DoesNotExist,
        CannotClaim = ClaimClaimableBalanceResultCode::CannotClaim,
        LineFull = ClaimClaimableBalanceResultCode::LineFull,
        NoTrust = ClaimClaimableBalanceResultCode::NoTrust,
        NotAuthorized = ClaimClaimableBalanceResultCode::NotAuthorized,
    }
}

xdr_enum! {
    pub enum BeginSponsoringFutureReservesResultCode {
        Success = 0,
        Malformed = -1,
        AlreadySponsored = -2,
        Recursive = -3,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BeginSponsoringFutureReservesResult switch (BeginSponsoringFutureReservesResultCode) {
        Success = BeginSponsoringFutureReservesResultCode::Success,
        Malformed = BeginSponsoringFutureReservesResultCode::Malformed,
        AlreadySponsored = BeginSponsoringFutureReservesResultCode::AlreadySponsored,
        Recursive = BeginSponsoringFutureReservesResultCode::Recursive,
    }
}

xdr_enum! {
    pub enum EndSponsoringFutureReservesResultCode {
        Success = 0,
        NotSponsored = -1,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum EndSponsoringFutureReservesResult switch (EndSponsoringFutureReservesResultCode) {
        Success = EndSponsoringFutureReservesResultCode::Success,
        NotSponsored = EndSponsoringFutureReservesResultCode::NotSponsored,
    }
}

xdr_enum! {
    pub enum RevokeSponsorshipResultCode {
        Success = 0,
        DoesNotExist = -1,
        NotSponsor = -2,
        LowReserve = -3,
        OnlyTransferable = -4,
        Malformed = -5,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum RevokeSponsorshipResult switch (RevokeSponsorshipResultCode) {
        Success = RevokeSponsorshipResultCode::Success,
        DoesNotExist = RevokeSponsorshipResultCode::DoesNotExist,
        NotSponsor = RevokeSponsorshipResultCode::NotSponsor,
        LowReserve = RevokeSponsorshipResultCode::LowReserve,
        OnlyTransferable = RevokeSponsorshipResultCode::OnlyTransferable,
        Malformed = RevokeSponsorshipResultCode::Malformed,
    }
}

xdr_enum! {
    pub enum ClawbackResultCode {
        Success = 0,
        Malformed = -1,
        NotClawbackEnabled = -2,
        NoTrust = -3,
        Underfunded = -4,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ClawbackResult switch (ClawbackResultCode) {
        Success = ClawbackResultCode::Success,
        Malformed = ClawbackResultCode::Malformed,
        NotClawbackEnabled = ClawbackResultCode::NotClawbackEnabled,
        NoTrust = ClawbackResultCode::NoTrust,
        Underfunded = ClawbackResultCode::Underfunded,
    }
}

xdr_enum! {
    pub enum ClawbackClaimableBalanceResultCode {
        Success = 0,
        DoesNotExist = -1,
        NotIssuer = -2,
        NotClawbackEnabled = -3,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ClawbackClaimableBalanceResult switch (ClawbackClaimableBalanceResultCode) {
        Success = ClawbackClaimableBalanceResultCode::Success,
        DoesNotExist = ClawbackClaimableBalanceResultCode::DoesNotExist,
        NotIssuer = ClawbackClaimableBalanceResultCode::NotIssuer,
        NotClawbackEnabled = ClawbackClaimableBalanceResultCode::NotClawbackEnabled,
    }
}

// ---------------------------------------------------------------------------
// Liquidity pools
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum LiquidityPoolDepositResultCode {
        Success = 0,
        Malformed = -1,
        NoTrust = -2,
        NotAuthorized = -3,
        Underfunded = -4,
        LineFull = -5,
        BadPrice = -6,
        PoolFull = -7,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LiquidityPoolDepositResult switch (LiquidityPoolDepositResultCode) {
        Success = LiquidityPoolDepositResultCode::Success,
        Malformed = LiquidityPoolDepositResultCode::Malformed,
        NoTrust = LiquidityPoolDepositResultCode::NoTrust,
        NotAuthorized = LiquidityPoolDepositResultCode::NotAuthorized,
        Underfunded = LiquidityPoolDepositResultCode::Underfunded,
        LineFull = LiquidityPoolDepositResultCode::LineFull,
        BadPrice = LiquidityPoolDepositResultCode::BadPrice,
        PoolFull = LiquidityPoolDepositResultCode::PoolFull,
    }
}

xdr_enum! {
    pub enum LiquidityPoolWithdrawResultCode {
        Success = 0,
        Malformed = -1,
        NoTrust = -2,
        Underfunded = -3,
        LineFull = -4,
        UnderMinimum = -5,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum LiquidityPoolWithdrawResult switch (LiquidityPoolWithdrawResultCode) {
        Success = LiquidityPoolWithdrawResultCode::Success,
        Malformed = LiquidityPoolWithdrawResultCode::Malformed,
        NoTrust = LiquidityPoolWithdrawResultCode::NoTrust,
        Underfunded = LiquidityPoolWithdrawResultCode::Underfunded,
        LineFull = LiquidityPoolWithdrawResultCode::LineFull,
        UnderMinimum = LiquidityPoolWithdrawResultCode::UnderMinimum,
    }
}

// ---------------------------------------------------------------------------
// Operation result wrapper
// ---------------------------------------------------------------------------

xdr_union! {
    /// The operation-specific result, one arm per operation type.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum OperationResultTr switch (OperationType) {
        CreateAccount(CreateAccountResult) = OperationType::CreateAccount,
        Payment(PaymentResult) = OperationType::Payment,
        PathPaymentStrictReceive(PathPaymentStrictReceiveResult) =
            OperationType::PathPaymentStrictReceive,
        ManageSellOffer(ManageSellOfferResult) = OperationType::ManageSellOffer,
        CreatePassiveSellOffer(ManageSellOfferResult) = OperationType::CreatePassiveSellOffer,
        SetOptions(SetOptionsResult) = OperationType::SetOptions,
        ChangeTrust(ChangeTrustResult) = OperationType::ChangeTrust,
        AllowTrust(AllowTrustResult) = OperationType::AllowTrust,
        AccountMerge(AccountMergeResult) = OperationType::AccountMerge,
        Inflation(InflationResult) = OperationType::Inflation,
        ManageData(ManageDataResult) = OperationType::ManageData,
        BumpSequence(BumpSequenceResult) = OperationType::BumpSequence,
        ManageBuyOffer(ManageBuyOfferResult) = OperationType::ManageBuyOffer,
        PathPaymentStrictSend(PathPaymentStrictSendResult) = OperationType::PathPaymentStrictSend,
        CreateClaimableBalance(CreateClaimableBalanceResult) =
            OperationType::CreateClaimableBalance,
        ClaimClaimableBalance(ClaimClaimableBalanceResult) = OperationType::ClaimClaimableBalance,
        BeginSponsoringFutureReserves(BeginSponsoringFutureReservesResult) =
            OperationType::BeginSponsoringFutureReserves,
        EndSponsoringFutureReserves(EndSponsoringFutureReservesResult) =
            OperationType::EndSponsoringFutureReserves,
        RevokeSponsorship(RevokeSponsorshipResult) = OperationType::RevokeSponsorship,
        Clawback(ClawbackResult) = OperationType::Clawback,
        ClawbackClaimableBalance(ClawbackClaimableBalanceResult) =
            OperationType::ClawbackClaimableBalance,
        SetTrustLineFlags(SetTrustLineFlagsResult) = OperationType::SetTrustLineFlags,
        LiquidityPoolDeposit(LiquidityPoolDepositResult) = OperationType::LiquidityPoolDeposit,
        LiquidityPoolWithdraw(LiquidityPoolWithdrawResult) = OperationType::LiquidityPoolWithdraw,
        InvokeHostFunction(InvokeHostFunctionResult) = OperationType::InvokeHostFunction,
        ExtendFootprintTtl(ExtendFootprintTtlResult) = OperationType::ExtendFootprintTtl,
        RestoreFootprint(RestoreFootprintResult) = OperationType::RestoreFootprint,
    }
}

xdr_enum! {
    pub enum OperationResultCode {
        OpInner = 0,
        OpBadAuth = -1,
        OpNoAccount = -2,
        OpNotSupported = -3,
        OpTooManySubentries = -4,
        OpExceededWorkLimit = -5,
        OpTooManySponsoring = -6,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum OperationResult switch (OperationResultCode) {
        OpInner(OperationResultTr) = OperationResultCode::OpInner,
        OpBadAuth = OperationResultCode::OpBadAuth,
        OpNoAccount = OperationResultCode::OpNoAccount,
        OpNotSupported = OperationResultCode::OpNotSupported,
        OpTooManySubentries = OperationResultCode::OpTooManySubentries,
        OpExceededWorkLimit = OperationResultCode::OpExceededWorkLimit,
        OpTooManySponsoring = OperationResultCode::OpTooManySponsoring,
    }
}

// ---------------------------------------------------------------------------
// Transaction results
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum TransactionResultCode {
        TxFeeBumpInnerSuccess = 1,
        TxSuccess = 0,
        TxFailed = -1,
        TxTooEarly = -2,
        TxTooLate = -3,
        TxMissingOperation = -4,
        TxBadSeq = -5,
        TxBadAuth = -6,
        TxInsufficientBalance = -7,
        TxNoAccount = -8,
        TxInsufficientFee = -9,
        TxBadAuthExtra = -10,
        TxInternalError = -11,
        TxNotSupported = -12,
        TxFeeBumpInnerFailed = -13,
        TxBadSponsorship = -14,
        TxBadMinSeqAgeOrGap = -15,
        TxMalformed = -16,
        TxSorobanInvalid = -17,
    }
}

pub type OperationResults = VecM<OperationResult>;

xdr_union! {
    /// Result of the inner transaction of a fee bump. Fee-bump codes have no
    /// arm here: a fee bump cannot wrap another fee bump.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InnerTransactionResultResult switch (TransactionResultCode) {
        TxSuccess(OperationResults) = TransactionResultCode::TxSuccess,
        TxFailed(OperationResults) = TransactionResultCode::TxFailed,
        TxTooEarly = TransactionResultCode::TxTooEarly,
        TxTooLate = TransactionResultCode::TxTooLate,
        TxMissingOperation = TransactionResultCode::TxMissingOperation,
        TxBadSeq = TransactionResultCode::TxBadSeq,
        TxBadAuth = TransactionResultCode::TxBadAuth,
        TxInsufficientBalance = TransactionResultCode::TxInsufficientBalance,
        TxNoAccount = TransactionResultCode::TxNoAccount,
        TxInsufficientFee = TransactionResultCode::TxInsufficientFee,
        TxBadAuthExtra = TransactionResultCode::TxBadAuthExtra,
        TxInternalError = TransactionResultCode::TxInternalError,
        TxNotSupported = TransactionResultCode::TxNotSupported,
        TxBadSponsorship = TransactionResultCode::TxBadSponsorship,
        TxBadMinSeqAgeOrGap = TransactionResultCode::TxBadMinSeqAgeOrGap,
        TxMalformed = TransactionResultCode::TxMalformed,
        TxSorobanInvalid = TransactionResultCode::TxSorobanInvalid,
    }
}

xdr_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum InnerTransactionResultExt switch (int) {
        #[default]
        V0 = 0,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InnerTransactionResult {
        pub fee_charged: i64,
        pub result: InnerTransactionResultResult,
        pub ext: InnerTransactionResultExt,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InnerTransactionResultPair {
        /// Hash of the inner transaction.
        pub transaction_hash: Hash,
        pub result: InnerTransactionResult,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TransactionResultResult switch (TransactionResultCode) {
        TxFeeBumpInnerSuccess(InnerTransactionResultPair) = TransactionResultCode::TxFeeBumpInnerSuccess,
        TxFeeBumpInnerFailed(InnerTransactionResultPair) = TransactionResultCode::TxFeeBumpInnerFailed,
        TxSuccess(OperationResults) = TransactionResultCode::TxSuccess,
        TxFailed(OperationResults) = TransactionResultCode::TxFailed,
        TxTooEarly = TransactionResultCode::TxTooEarly,
        TxTooLate = TransactionResultCode::TxTooLate,
        TxMissingOperation = TransactionResultCode::TxMissingOperation,
        TxBadSeq = TransactionResultCode::TxBadSeq,
        TxBadAuth = TransactionResultCode::TxBadAuth,
        TxInsufficientBalance = TransactionResultCode::TxInsufficientBalance,
        TxNoAccount = TransactionResultCode::TxNoAccount,
        TxInsufficientFee = TransactionResultCode::TxInsufficientFee,
        TxBadAuthExtra = TransactionResultCode::TxBadAuthExtra,
        TxInternalError = TransactionResultCode::TxInternalError,
        TxNotSupported = TransactionResultCode::TxNotSupported,
        TxBadSponsorship = TransactionResultCode::TxBadSponsorship,
        TxBadMinSeqAgeOrGap = TransactionResultCode::TxBadMinSeqAgeOrGap,
        TxMalformed = TransactionResultCode::TxMalformed,
        TxSorobanInvalid = TransactionResultCode::TxSorobanInvalid,
    }
}

xdr_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TransactionResultExt switch (int) {
        #[default]
        V0 = 0,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TransactionResult {
        pub fee_charged: i64,
        pub result: TransactionResultResult,
        pub ext: TransactionResultExt,
    }
}

impl TransactionResult {
    /// `true` for plain success and for a fee bump whose inner transaction
    /// succeeded.
    pub fn is_success(&self) -> bool {
        matches!(
            self.result,
            TransactionResultResult::TxSuccess(_) | TransactionResultResult::TxFeeBumpInnerSuccess(_)
        )
    }
}
