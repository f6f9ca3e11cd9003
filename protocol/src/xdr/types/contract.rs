//! Smart contract values, addresses and host functions.
//!
//! `ScVal` is the universal currency of contract calls: arguments, return
//! values, storage keys and even authorization signatures are all `ScVal`s.
//! It is recursive through vectors and maps, which is where the codec's
//! depth limit earns its keep.

use super::basic::{AccountId, Asset, Duration, Hash, TimePoint, Uint256};
use crate::xdr::{BytesM, StringM, VecM};

pub type ScVec = VecM<ScVal>;
pub type ScMap = VecM<ScMapEntry>;
pub type ScBytes = BytesM;
pub type ScString = StringM;
pub type ScSymbol = StringM<32>;

xdr_enum! {
    pub enum ScValType {
        Bool = 0,
        Void = 1,
        Error = 2,
        U32 = 3,
        I32 = 4,
        U64 = 5,
        I64 = 6,
        Timepoint = 7,
        Duration = 8,
        U128 = 9,
        I128 = 10,
        U256 = 11,
        I256 = 12,
        Bytes = 13,
        String = 14,
        Symbol = 15,
        Vec = 16,
        Map = 17,
        Address = 18,
        ContractInstance = 19,
        LedgerKeyContractInstance = 20,
        LedgerKeyNonce = 21,
    }
}

xdr_enum! {
    pub enum ScErrorType {
        Contract = 0,
        WasmVm = 1,
        Context = 2,
        Storage = 3,
        Object = 4,
        Crypto = 5,
        Events = 6,
        Budget = 7,
        Value = 8,
        Auth = 9,
    }
}

xdr_enum! {
    pub enum ScErrorCode {
        ArithDomain = 0,
        IndexBounds = 1,
        InvalidInput = 2,
        MissingValue = 3,
        ExistingValue = 4,
        ExceededLimit = 5,
        InvalidAction = 6,
        InternalError = 7,
        UnexpectedType = 8,
        UnexpectedSize = 9,
    }
}

xdr_union! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ScError switch (ScErrorType) {
        Contract(u32) = ScErrorType::Contract,
        WasmVm(ScErrorCode) = ScErrorType::WasmVm,
        Context(ScErrorCode) = ScErrorType::Context,
        Storage(ScErrorCode) = ScErrorType::Storage,
        Object(ScErrorCode) = ScErrorType::Object,
        Crypto(ScErrorCode) = ScErrorType::Crypto,
        Events(ScErrorCode) = ScErrorType::Events,
        Budget(ScErrorCode) = ScErrorType::Budget,
        Value(ScErrorCode) = ScErrorType::Value,
        Auth(ScErrorCode) = ScErrorType::Auth,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UInt128Parts {
        pub hi: u64,
        pub lo: u64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Int128Parts {
        pub hi: i64,
        pub lo: u64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct UInt256Parts {
        pub hi_hi: u64,
        pub hi_lo: u64,
        pub lo_hi: u64,
        pub lo_lo: u64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Int256Parts {
        pub hi_hi: i64,
        pub hi_lo: u64,
        pub lo_hi: u64,
        pub lo_lo: u64,
    }
}

xdr_enum! {
    pub enum ContractExecutableType {
        Wasm = 0,
        StellarAsset = 1,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ContractExecutable switch (ContractExecutableType) {
        Wasm(Hash) = ContractExecutableType::Wasm,
        StellarAsset = ContractExecutableType::StellarAsset,
    }
}

xdr_enum! {
    pub enum ScAddressType {
        Account = 0,
        Contract = 1,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum ScAddress switch (ScAddressType) {
        Account(AccountId) = ScAddressType::Account,
        Contract(Hash) = ScAddressType::Contract,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ScNonceKey {
        pub nonce: i64,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ScContractInstance {
        pub executable: ContractExecutable,
        pub storage: Option<ScMap>,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ScVal switch (ScValType) {
        Bool(bool) = ScValType::Bool,
        Void = ScValType::Void,
        Error(ScError) = ScValType::Error,
        U32(u32) = ScValType::U32,
        I32(i32) = ScValType::I32,
        U64(u64) = ScValType::U64,
        I64(i64) = ScValType::I64,
        Timepoint(TimePoint) = ScValType::Timepoint,
        Duration(Duration) = ScValType::Duration,
        U128(UInt128Parts) = ScValType::U128,
        I128(Int128Parts) = ScValType::I128,
        U256(UInt256Parts) = ScValType::U256,
        I256(Int256Parts) = ScValType::I256,
        Bytes(ScBytes) = ScValType::Bytes,
        String(ScString) = ScValType::String,
        Symbol(ScSymbol) = ScValType::Symbol,
        Vec(Option<ScVec>) = ScValType::Vec,
        Map(Option<ScMap>) = ScValType::Map,
        Address(ScAddress) = ScValType::Address,
        ContractInstance(ScContractInstance) = ScValType::ContractInstance,
        LedgerKeyContractInstance = ScValType::LedgerKeyContractInstance,
        LedgerKeyNonce(ScNonceKey) = ScValType::LedgerKeyNonce,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ScMapEntry {
        pub key: ScVal,
        pub val: ScVal,
    }
}

// ---------------------------------------------------------------------------
// Host functions
// ---------------------------------------------------------------------------

xdr_enum! {
    pub enum ContractIdPreimageType {
        FromAddress = 0,
        FromAsset = 1,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ContractIdPreimageFromAddress {
        pub address: ScAddress,
        pub salt: Uint256,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ContractIdPreimage switch (ContractIdPreimageType) {
        FromAddress(ContractIdPreimageFromAddress) = ContractIdPreimageType::FromAddress,
        FromAsset(Asset) = ContractIdPreimageType::FromAsset,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateContractArgs {
        pub contract_id_preimage: ContractIdPreimage,
        pub executable: ContractExecutable,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CreateContractArgsV2 {
        pub contract_id_preimage: ContractIdPreimage,
        pub executable: ContractExecutable,
        pub constructor_args: VecM<ScVal>,
    }
}

xdr_struct! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct InvokeContractArgs {
        pub contract_address: ScAddress,
        pub function_name: ScSymbol,
        pub args: VecM<ScVal>,
    }
}

xdr_enum! {
    pub enum HostFunctionType {
        InvokeContract = 0,
        CreateContract = 1,
        UploadContractWasm = 2,
        CreateContractV2 = 3,
    }
}

xdr_union! {
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HostFunction switch (HostFunctionType) {
        InvokeContract(InvokeContractArgs) = HostFunctionType::InvokeContract,
        CreateContract(CreateContractArgs) = HostFunctionType::CreateContract,
        UploadContractWasm(BytesM) = HostFunctionType::UploadContractWasm,
        CreateContractV2(CreateContractArgsV2) = HostFunctionType::CreateContractV2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_XDR_DEPTH_LIMIT;
    use crate::xdr::{XdrCodec, XdrError, XdrReader};

    #[test]
    fn symbol_layout() {
        let v = ScVal::Symbol(ScSymbol::try_from("hello").unwrap());
        assert_eq!(
            v.to_xdr_bytes().unwrap(),
            b"\0\0\0\x0f\0\0\0\x05hello\0\0\0".to_vec()
        );
    }

    #[test]
    fn absent_vec_is_a_flag() {
        assert_eq!(
            ScVal::Vec(None).to_xdr_bytes().unwrap(),
            vec![0, 0, 0, 16, 0, 0, 0, 0]
        );
    }

    #[test]
    fn nested_map_roundtrip() {
        let inner = ScVal::Map(Some(
            VecM::try_from(vec![ScMapEntry {
                key: ScVal::Symbol(ScSymbol::try_from("k").unwrap()),
                val: ScVal::I128(Int128Parts { hi: -1, lo: 7 }),
            }])
            .unwrap(),
        ));
        let outer = ScVal::Vec(Some(VecM::try_from(vec![inner, ScVal::Void]).unwrap()));
        let bytes = outer.to_xdr_bytes().unwrap();
        assert_eq!(ScVal::from_xdr_bytes(&bytes).unwrap(), outer);
    }

    #[test]
    fn error_union_carries_code() {
        let e = ScVal::Error(ScError::Auth(ScErrorCode::InvalidAction));
        let bytes = e.to_xdr_bytes().unwrap();
        assert_eq!(bytes, vec![0, 0, 0, 2, 0, 0, 0, 9, 0, 0, 0, 6]);
        assert_eq!(ScVal::from_xdr_bytes(&bytes).unwrap(), e);
    }

    /// `levels` single-element vectors around an absent vector. Each level
    /// costs three units of depth (union, optional, vector), the leaf two.
    fn nested_vec_bytes(levels: usize) -> Vec<u8> {
        let mut bytes = Vec::new();
        for _ in 0..levels {
            bytes.extend_from_slice(&[0, 0, 0, 16, 0, 0, 0, 1, 0, 0, 0, 1]);
        }
        bytes.extend_from_slice(&[0, 0, 0, 16, 0, 0, 0, 0]);
        bytes
    }

    #[test]
    fn deep_nesting_hits_depth_limit() {
        // 60 * 3 + 2 = 182 units.
        let bytes = nested_vec_bytes(60);

        let mut shallow = XdrReader::with_depth_limit(&bytes, 181);
        assert_eq!(
            ScVal::decode(&mut shallow),
            Err(XdrError::DepthLimitExceeded(181))
        );

        let mut deep = XdrReader::with_depth_limit(&bytes, 182);
        assert!(ScVal::decode(&mut deep).is_ok());
        assert!(deep.is_empty());
    }

    #[test]
    fn default_depth_limit_is_exact() {
        // 166 * 3 + 2 = 500, the default limit.
        let at_limit = ScVal::from_xdr_bytes(&nested_vec_bytes(166)).unwrap();
        assert_eq!(at_limit.to_xdr_bytes().unwrap(), nested_vec_bytes(166));

        assert_eq!(
            ScVal::from_xdr_bytes(&nested_vec_bytes(167)),
            Err(XdrError::DepthLimitExceeded(DEFAULT_XDR_DEPTH_LIMIT))
        );

        let too_deep = ScVal::Vec(Some(VecM::try_from(vec![at_limit]).unwrap()));
        assert_eq!(
            too_deep.to_xdr_bytes(),
            Err(XdrError::DepthLimitExceeded(DEFAULT_XDR_DEPTH_LIMIT))
        );
    }

    #[test]
    fn host_function_upload_wasm() {
        let f = HostFunction::UploadContractWasm(BytesM::try_from(vec![0u8, 0x61, 0x73, 0x6d]).unwrap());
        let bytes = f.to_xdr_bytes().unwrap();
        assert_eq!(&bytes[..8], &[0, 0, 0, 2, 0, 0, 0, 4]);
        assert_eq!(HostFunction::from_xdr_bytes(&bytes).unwrap(), f);
    }
}
