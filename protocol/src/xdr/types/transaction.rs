//! Transactions, envelopes and the preimages that get hashed for
//! signatures and identifiers.

use super::basic::{
    AccountId, Asset, DecoratedSignature, Hash, Memo, MuxedAccount, PoolId, Preconditions,
    SequenceNumber, TimeBounds, Uint256,
};
use super::contract::ContractIdPreimage;
use super::operation::Operation;
use super::soroban::{SorobanAuthorizedInvocation, SorobanTransactionData};
use crate::xdr::VecM;

pub type Operations = VecM<Operation, 100>;
pub type Signatures = VecM<DecoratedSignature, 20>;

xdr_enum! {
    pub enum EnvelopeType {
        TxV0 = 0,
        Scp = 1,
        Tx = 2,
        Auth = 3,
        ScpValue = 4,
        TxFeeBump = 5,
        OpId = 6,
        PoolRevokeOpId = 7,
        ContractId = 8,
        SorobanAuthorization = 9,
    }
}

// ---------------------------------------------------------------------------
// Legacy V0
// ---------------------------------------------------------------------------

xdr_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum TransactionV0Ext switch (int) {
        #[default]
        V0 = 0,
    }
}

xdr_struct! {
    /// Pre-protocol-13 transaction. The source is a bare ed25519 key.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TransactionV0 {
        pub source_account_ed25519: Uint256,
        pub fee: u32,
        pub seq_num: SequenceNumber,
        pub time_bounds: Option<TimeBounds>,
        pub memo: Memo,
        pub operations: Operations,
        pub ext: TransactionV0Ext,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TransactionV0Envelope {
        pub tx: TransactionV0,
        pub signatures: Signatures,
    }
}

// ---------------------------------------------------------------------------
// V1
// ---------------------------------------------------------------------------

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub enum TransactionExt switch (int) {
        #[default]
        V0 = 0,
        V1(SorobanTransactionData) = 1,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Transaction {
        pub source_account: MuxedAccount,
        pub fee: u32,
        pub seq_num: SequenceNumber,
        pub cond: Preconditions,
        pub memo: Memo,
        pub operations: Operations,
        pub ext: TransactionExt,
    }
}

impl Transaction {
    /// Resource fee declared in the Soroban data, or zero for classic
    /// transactions.
    pub fn soroban_resource_fee(&self) -> i64 {
        match &self.ext {
            TransactionExt::V0 => 0,
            TransactionExt::V1(data) => data.resource_fee,
        }
    }
}

impl From<TransactionV0> for Transaction {
    fn from(v0: TransactionV0) -> Self {
        Transaction {
            source_account: MuxedAccount::Ed25519(v0.source_account_ed25519),
            fee: v0.fee,
            seq_num: v0.seq_num,
            cond: match v0.time_bounds {
                Some(tb) => Preconditions::Time(tb),
                None => Preconditions::None,
            },
            memo: v0.memo,
            operations: v0.operations,
            ext: TransactionExt::V0,
        }
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TransactionV1Envelope {
        pub tx: Transaction,
        pub signatures: Signatures,
    }
}

// ---------------------------------------------------------------------------
// Fee bump
// ---------------------------------------------------------------------------

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum FeeBumpTransactionInnerTx switch (EnvelopeType) {
        Tx(TransactionV1Envelope) = EnvelopeType::Tx,
    }
}

xdr_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum FeeBumpTransactionExt switch (int) {
        #[default]
        V0 = 0,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FeeBumpTransaction {
        pub fee_source: MuxedAccount,
        pub fee: i64,
        pub inner_tx: FeeBumpTransactionInnerTx,
        pub ext: FeeBumpTransactionExt,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct FeeBumpTransactionEnvelope {
        pub tx: FeeBumpTransaction,
        pub signatures: Signatures,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TransactionEnvelope switch (EnvelopeType) {
        TxV0(TransactionV0Envelope) = EnvelopeType::TxV0,
        Tx(TransactionV1Envelope) = EnvelopeType::Tx,
        TxFeeBump(FeeBumpTransactionEnvelope) = EnvelopeType::TxFeeBump,
    }
}

// ---------------------------------------------------------------------------
// Hash preimages
// ---------------------------------------------------------------------------

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TransactionSignaturePayloadTaggedTransaction switch (EnvelopeType) {
        Tx(Transaction) = EnvelopeType::Tx,
        TxFeeBump(FeeBumpTransaction) = EnvelopeType::TxFeeBump,
    }
}

xdr_struct! {
    /// What actually gets hashed and signed: the network id followed by the
    /// tagged transaction.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct TransactionSignaturePayload {
        pub network_id: Hash,
        pub tagged_transaction: TransactionSignaturePayloadTaggedTransaction,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HashIdPreimageOperationId {
        pub source_account: AccountId,
        pub seq_num: SequenceNumber,
        pub op_num: u32,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HashIdPreimageRevokeId {
        pub source_account: AccountId,
        pub seq_num: SequenceNumber,
        pub op_num: u32,
        pub liquidity_pool_id: PoolId,
        pub asset: Asset,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HashIdPreimageContractId {
        pub network_id: Hash,
        pub contract_id_preimage: ContractIdPreimage,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HashIdPreimageSorobanAuthorization {
        pub network_id: Hash,
        pub nonce: i64,
        pub signature_expiration_ledger: u32,
        pub invocation: SorobanAuthorizedInvocation,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HashIdPreimage switch (EnvelopeType) {
        OpId(HashIdPreimageOperationId) = EnvelopeType::OpId,
        PoolRevokeOpId(HashIdPreimageRevokeId) = EnvelopeType::PoolRevokeOpId,
        ContractId(HashIdPreimageContractId) = EnvelopeType::ContractId,
        SorobanAuthorization(HashIdPreimageSorobanAuthorization) = EnvelopeType::SorobanAuthorization,
    }
}
