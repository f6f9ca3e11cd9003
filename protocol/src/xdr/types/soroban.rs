//! Soroban authorization entries, resource declarations and the three
//! contract-related operation bodies.

use super::basic::ExtensionPoint;
use super::contract::{
    CreateContractArgs, CreateContractArgsV2, HostFunction, InvokeContractArgs, ScAddress, ScVal,
};
use super::ledger::LedgerFootprint;
use crate::xdr::VecM;

xdr_enum! {
    pub enum SorobanAuthorizedFunctionType {
        ContractFn = 0,
        CreateContractHostFn = 1,
        CreateContractV2HostFn = 2,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SorobanAuthorizedFunction switch (SorobanAuthorizedFunctionType) {
        ContractFn(InvokeContractArgs) = SorobanAuthorizedFunctionType::ContractFn,
        CreateContractHostFn(CreateContractArgs) = SorobanAuthorizedFunctionType::CreateContractHostFn,
        CreateContractV2HostFn(CreateContractArgsV2) = SorobanAuthorizedFunctionType::CreateContractV2HostFn,
    }
}

xdr_struct! {
    /// One node of an invocation tree: a call plus the calls it authorizes
    /// on the caller's behalf.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SorobanAuthorizedInvocation {
        pub function: SorobanAuthorizedFunction,
        pub sub_invocations: VecM<SorobanAuthorizedInvocation>,
    }
}

xdr_struct! {
    /// Credentials for an address other than the transaction source.
    ///
    /// `signature_expiration_ledger` is exclusive: a signature whose
    /// expiration equals the current ledger is already expired.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SorobanAddressCredentials {
        pub address: ScAddress,
        pub nonce: i64,
        pub signature_expiration_ledger: u32,
        pub signature: ScVal,
    }
}

xdr_enum! {
    pub enum SorobanCredentialsType {
        SourceAccount = 0,
        Address = 1,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SorobanCredentials switch (SorobanCredentialsType) {
        SourceAccount = SorobanCredentialsType::SourceAccount,
        Address(SorobanAddressCredentials) = SorobanCredentialsType::Address,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SorobanAuthorizationEntry {
        pub credentials: SorobanCredentials,
        pub root_invocation: SorobanAuthorizedInvocation,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct SorobanResources {
        pub footprint: LedgerFootprint,
        pub instructions: u32,
        pub disk_read_bytes: u32,
        pub write_bytes: u32,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct SorobanTransactionData {
        pub ext: ExtensionPoint,
        pub resources: SorobanResources,
        /// Part of the transaction fee reserved for resource fees. The
        /// inclusion fee is `tx.fee - resource_fee`.
        pub resource_fee: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InvokeHostFunctionOp {
        pub host_function: HostFunction,
        pub auth: VecM<SorobanAuthorizationEntry>,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ExtendFootprintTtlOp {
        pub ext: ExtensionPoint,
        pub extend_to: u32,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RestoreFootprintOp {
        pub ext: ExtensionPoint,
    }
}
