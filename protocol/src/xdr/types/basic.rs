//! Basic building blocks: hashes, keys, accounts, assets, prices, memos and
//! transaction preconditions.

use crate::xdr::{BytesM, StringM, VecM};

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

pub type Hash = [u8; 32];
pub type Uint256 = [u8; 32];
pub type SequenceNumber = i64;
pub type TimePoint = u64;
pub type Duration = u64;
pub type String32 = StringM<32>;
pub type String64 = StringM<64>;
pub type DataValue = BytesM<64>;
pub type Thresholds = [u8; 4];
pub type AssetCode4 = [u8; 4];
pub type AssetCode12 = [u8; 12];
pub type SignatureHint = [u8; 4];
pub type Signature = BytesM<64>;
pub type PoolId = Hash;
pub type AccountId = PublicKey;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum CryptoKeyType {
        Ed25519 = 0,
        PreAuthTx = 1,
        HashX = 2,
        Ed25519SignedPayload = 3,
        MuxedEd25519 = 0x100,
    }
}

xdr_enum! {
    pub enum PublicKeyType {
        PublicKeyTypeEd25519 = 0,
    }
}

xdr_enum! {
    pub enum SignerKeyType {
        Ed25519 = 0,
        PreAuthTx = 1,
        HashX = 2,
        Ed25519SignedPayload = 3,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum PublicKey switch (PublicKeyType) {
        PublicKeyTypeEd25519(Uint256) = PublicKeyType::PublicKeyTypeEd25519,
    }
}

impl PublicKey {
    /// The raw 32-byte ed25519 key.
    pub fn ed25519(&self) -> &Uint256 {
        match self {
            PublicKey::PublicKeyTypeEd25519(key) => key,
        }
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct SignerKeyEd25519SignedPayload {
        pub ed25519: Uint256,
        pub payload: BytesM<64>,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub enum SignerKey switch (SignerKeyType) {
        Ed25519(Uint256) = SignerKeyType::Ed25519,
        PreAuthTx(Uint256) = SignerKeyType::PreAuthTx,
        HashX(Uint256) = SignerKeyType::HashX,
        Ed25519SignedPayload(SignerKeyEd25519SignedPayload) = SignerKeyType::Ed25519SignedPayload,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct Signer {
        pub key: SignerKey,
        pub weight: u32,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct MuxedAccountMed25519 {
        pub id: u64,
        pub ed25519: Uint256,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum MuxedAccount switch (CryptoKeyType) {
        Ed25519(Uint256) = CryptoKeyType::Ed25519,
        MuxedEd25519(MuxedAccountMed25519) = CryptoKeyType::MuxedEd25519,
    }
}

impl MuxedAccount {
    /// The underlying ed25519 key, with any multiplexing id stripped.
    pub fn ed25519(&self) -> &Uint256 {
        match self {
            MuxedAccount::Ed25519(key) => key,
            MuxedAccount::MuxedEd25519(m) => &m.ed25519,
        }
    }

    /// The plain account behind this (possibly muxed) account.
    pub fn account_id(&self) -> AccountId {
        PublicKey::PublicKeyTypeEd25519(*self.ed25519())
    }
}

impl From<AccountId> for MuxedAccount {
    fn from(id: AccountId) -> Self {
        MuxedAccount::Ed25519(*id.ed25519())
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct DecoratedSignature {
        pub hint: SignatureHint,
        pub signature: Signature,
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum AssetType {
        Native = 0,
        CreditAlphanum4 = 1,
        CreditAlphanum12 = 2,
        PoolShare = 3,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum AssetCode switch (AssetType) {
        CreditAlphanum4(AssetCode4) = AssetType::CreditAlphanum4,
        CreditAlphanum12(AssetCode12) = AssetType::CreditAlphanum12,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AlphaNum4 {
        pub asset_code: AssetCode4,
        pub issuer: AccountId,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct AlphaNum12 {
        pub asset_code: AssetCode12,
        pub issuer: AccountId,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum Asset switch (AssetType) {
        Native = AssetType::Native,
        CreditAlphanum4(AlphaNum4) = AssetType::CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = AssetType::CreditAlphanum12,
    }
}

xdr_enum! {
    pub enum LiquidityPoolType {
        LiquidityPoolConstantProduct = 0,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct LiquidityPoolConstantProductParameters {
        pub asset_a: Asset,
        pub asset_b: Asset,
        pub fee: i32,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum LiquidityPoolParameters switch (LiquidityPoolType) {
        LiquidityPoolConstantProduct(LiquidityPoolConstantProductParameters) =
            LiquidityPoolType::LiquidityPoolConstantProduct,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum ChangeTrustAsset switch (AssetType) {
        Native = AssetType::Native,
        CreditAlphanum4(AlphaNum4) = AssetType::CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = AssetType::CreditAlphanum12,
        PoolShare(LiquidityPoolParameters) = AssetType::PoolShare,
    }
}

impl From<Asset> for ChangeTrustAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::Native => ChangeTrustAsset::Native,
            Asset::CreditAlphanum4(a) => ChangeTrustAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => ChangeTrustAsset::CreditAlphanum12(a),
        }
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum TrustLineAsset switch (AssetType) {
        Native = AssetType::Native,
        CreditAlphanum4(AlphaNum4) = AssetType::CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = AssetType::CreditAlphanum12,
        PoolShare(PoolId) = AssetType::PoolShare,
    }
}

impl From<Asset> for TrustLineAsset {
    fn from(asset: Asset) -> Self {
        match asset {
            Asset::Native => TrustLineAsset::Native,
            Asset::CreditAlphanum4(a) => TrustLineAsset::CreditAlphanum4(a),
            Asset::CreditAlphanum12(a) => TrustLineAsset::CreditAlphanum12(a),
        }
    }
}

xdr_struct! {
    /// A rational price. Both terms are positive in a valid price.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Price {
        pub n: i32,
        pub d: i32,
    }
}

// ---------------------------------------------------------------------------
// Memo
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum MemoType {
        None = 0,
        Text = 1,
        Id = 2,
        Hash = 3,
        Return = 4,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub enum Memo switch (MemoType) {
        #[default]
        None = MemoType::None,
        Text(StringM<28>) = MemoType::Text,
        Id(u64) = MemoType::Id,
        Hash(Hash) = MemoType::Hash,
        Return(Hash) = MemoType::Return,
    }
}

// ---------------------------------------------------------------------------
// Preconditions
// ---------------------------------------------------------------------------

xdr_struct! {
    /// A `max_time` of zero means "no upper bound".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TimeBounds {
        pub min_time: TimePoint,
        pub max_time: TimePoint,
    }
}

xdr_struct! {
    /// A `max_ledger` of zero means "no upper bound".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LedgerBounds {
        pub min_ledger: u32,
        pub max_ledger: u32,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct PreconditionsV2 {
        pub time_bounds: Option<TimeBounds>,
        pub ledger_bounds: Option<LedgerBounds>,
        pub min_seq_num: Option<SequenceNumber>,
        pub min_seq_age: Duration,
        pub min_seq_ledger_gap: u32,
        pub extra_signers: VecM<SignerKey, 2>,
    }
}

xdr_enum! {
    pub enum PreconditionType {
        None = 0,
        Time = 1,
        V2 = 2,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
    pub enum Preconditions switch (PreconditionType) {
        #[default]
        None = PreconditionType::None,
        Time(TimeBounds) = PreconditionType::Time,
        V2(PreconditionsV2) = PreconditionType::V2,
    }
}

impl Preconditions {
    /// Time bounds, wherever they are stored.
    pub fn time_bounds(&self) -> Option<&TimeBounds> {
        match self {
            Preconditions::None => None,
            Preconditions::Time(tb) => Some(tb),
            Preconditions::V2(v2) => v2.time_bounds.as_ref(),
        }
    }
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

xdr_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum ExtensionPoint switch (int) {
        #[default]
        V0 = 0,
    }
}

xdr_enum! {
    pub enum ClaimableBalanceIdType {
        ClaimableBalanceIdTypeV0 = 0,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum ClaimableBalanceId switch (ClaimableBalanceIdType) {
        ClaimableBalanceIdTypeV0(Hash) = ClaimableBalanceIdType::ClaimableBalanceIdTypeV0,
    }
}
