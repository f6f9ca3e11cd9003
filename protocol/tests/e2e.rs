//! End-to-end integration tests for stellar-wire.
//!
//! These tests exercise the full client-side lifecycle: keypair from a
//! secret, transaction construction, hashing, signing, serialization,
//! parsing back, fee bumping and Soroban authorization.
//!
//! `UNSIGNED_XDR`, `SIGNED_XDR`, `FEE_BUMP_XDR` and their hashes are
//! snapshots of this crate's own output: they catch regressions, not
//! misreadings of the protocol. The `PUBLISHED_*` fixtures are envelopes
//! from the Python SDK's test suite and are the cross-implementation check.
//!
//! Set `RUST_LOG=stellar_wire=debug` to watch the signing pipeline.

use tracing_subscriber::EnvFilter;

use stellar_wire::crypto::Keypair;
use stellar_wire::network::Network;
use stellar_wire::soroban::{authorize_entry, verify_authorization};
use stellar_wire::transaction::{
    build_fee_bump, hashx_signature, operation, parse_envelope, verify_signature_from, Account,
    Envelope, ParsedEnvelope, TransactionBuilder, TransactionError, TxEnvelope,
};
use stellar_wire::xdr::{
    Asset, InvokeContractArgs, Memo, OperationBody, ScAddress, ScVal, SorobanAddressCredentials,
    SorobanAuthorizationEntry, SorobanAuthorizedFunction, SorobanAuthorizedInvocation,
    SorobanCredentials, VecM,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

const SECRET: &str = "SDJHRQF4GCMIIKAAAQ6IHY42X73FQFLHUULAPSKKD4DFDM7UXWWCRHBE";
const PUBLIC: &str = "GCZHXL5HXQX5ABDM26LHYRCQZ5OJFHLOPLZX47WEBP3V2PF5AVFK2A5D";
const DESTINATION: &str = "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ";

// Snapshots of this crate's output.

const UNSIGNED_XDR: &str = "AAAAAgAAAACye6+nvC/QBGzXlnxEUM9ckp1uevN+fsQL9108vQVKrQAAAMgAAAAAAAAAZQAAAAEAAAAAAAAAAAAAAABlU/EAAAAAAQAAAAxzdGVsbGFyLXdpcmUAAAACAAAAAAAAAAAAAAAAPww0v5OtDZlx0EzMkPcFURyDiq2XNKSi+w16A/x/6JoAAAAADzL9wAAAAAAAAAABAAAAAD8MNL+TrQ2ZcdBMzJD3BVEcg4qtlzSkovsNegP8f+iaAAAAAAAAAAAAmJaBAAAAAAAAAAA=";

const SIGNED_XDR: &str = "AAAAAgAAAACye6+nvC/QBGzXlnxEUM9ckp1uevN+fsQL9108vQVKrQAAAMgAAAAAAAAAZQAAAAEAAAAAAAAAAAAAAABlU/EAAAAAAQAAAAxzdGVsbGFyLXdpcmUAAAACAAAAAAAAAAAAAAAAPww0v5OtDZlx0EzMkPcFURyDiq2XNKSi+w16A/x/6JoAAAAADzL9wAAAAAAAAAABAAAAAD8MNL+TrQ2ZcdBMzJD3BVEcg4qtlzSkovsNegP8f+iaAAAAAAAAAAAAmJaBAAAAAAAAAAG9BUqtAAAAQO9qUEcwaajyhIC7sUQVwt78pt2tE4ggCr3+f2WS5qE6ijBPIr9A3/bQ78b5W8Rf27sPXFmadRUKv2YStjhzVgs=";

const TX_HASH: &str = "4c12e38d725113f19b3e4ee658abe8de8fc71bee430310923e425c772fd34269";

const FEE_BUMP_XDR: &str = "AAAABQAAAACye6+nvC/QBGzXlnxEUM9ckp1uevN+fsQL9108vQVKrQAAAAAAAAJYAAAAAgAAAACye6+nvC/QBGzXlnxEUM9ckp1uevN+fsQL9108vQVKrQAAAMgAAAAAAAAAZQAAAAEAAAAAAAAAAAAAAABlU/EAAAAAAQAAAAxzdGVsbGFyLXdpcmUAAAACAAAAAAAAAAAAAAAAPww0v5OtDZlx0EzMkPcFURyDiq2XNKSi+w16A/x/6JoAAAAADzL9wAAAAAAAAAABAAAAAD8MNL+TrQ2ZcdBMzJD3BVEcg4qtlzSkovsNegP8f+iaAAAAAAAAAAAAmJaBAAAAAAAAAAG9BUqtAAAAQO9qUEcwaajyhIC7sUQVwt78pt2tE4ggCr3+f2WS5qE6ijBPIr9A3/bQ78b5W8Rf27sPXFmadRUKv2YStjhzVgsAAAAAAAAAAb0FSq0AAABA/yDLmgcESC7qYgQQ5lpqDxqZvaAYMip2jdBqtpBmokZv6Kl6eah7YAyBSTAQlBNx4ZvjWz8mIXTdKKNaeeomDw==";

const FEE_BUMP_HASH: &str = "8fbc785d6ab84d4b1bbaa1743dd470fae247cfbe47a1e1f62b849a080b9b8f11";

// Published by the Python SDK (tests/test_transaction_envelope.py).

const PUBLISHED_SECRET: &str = "SCCS5ZBI7WVIJ4SW36WGOQQIWJYCL3VOAULSXX3FB57USIO25EDOYQHH";
const PUBLISHED_SOURCE: &str = "GDF5O4OWEMVBY5FLDHWA5RZTYSV2U276XGKZZ6VSHDDR3THSQ6OQS7UM";
const PUBLISHED_DESTINATION: &str = "GDJJRRMBK4IWLEPJGIE6SXD2LP7REGZODU7WDC3I2D6MR37F4XSHBKX2";
const PUBLISHED_HASHX_PREIMAGE: &str =
    "94e8223a518ac16a8cb110ab1952ef14da2c10b264645c38c8b3d82bd2b20000";

/// `test_to_xdr_v1`: one payment, signed by the source.
const PUBLISHED_V1_XDR: &str = "AAAAAgAAAADL13HWIyocdKsZ7A7HM8Srqmv+uZWc+rI4xx3M8oedCQAAAMgAAAAAAAAAAQAAAAEAAAAAAAAwOQAAAAAAAN3VAAAAAgAAAAAAAABkAAAAAQAAAAAAAAABAAAAANKYxYFXEWWR6TIJ6Vx6W/8SGy4dP2GLaND8yO/l5eRwAAAAAAAAAAJUC+QAAAAAAAAAAAHyh50JAAAAQCXOQnmno3he687bKRtDc6+BXRUf8t+RnTuHy+sKf35UjfFiQbIge+txehmg0N61JsFWfwbL0JtgOjzyeZw5JAs=";

/// `test_to_xdr_v0`: payment plus manage-data in a legacy envelope, signed
/// by the source and by a hash-x preimage.
const PUBLISHED_V0_XDR: &str = "AAAAAMvXcdYjKhx0qxnsDsczxKuqa/65lZz6sjjHHczyh50JAAAAyAAAAAAAAAABAAAAAQAAAAAAADA5AAAAAAAA3dUAAAACAAAAAAAAAGQAAAACAAAAAAAAAAEAAAAA0pjFgVcRZZHpMgnpXHpb/xIbLh0/YYto0PzI7+Xl5HAAAAAAAAAAAlQL5AAAAAAAAAAACgAAAAVoZWxsbwAAAAAAAAEAAAAFd29ybGQAAAAAAAAAAAAAAvKHnQkAAABAM4dg0J1LEFBmbDESJ5d+60WCuZC8lnA80g45qyEgz2oRBSNw1mOfZETnL/BgrebkG/K03oI2Wqcs9lvDKrDGDE0sOBsAAAAglOgiOlGKwWqMsRCrGVLvFNosELJkZFw4yLPYK9KyAAA=";

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Create-account plus payment from `PUBLIC`, sequence 101, testnet.
fn build_unsigned() -> TxEnvelope {
    let mut source = Account::new(PUBLIC, 100).expect("source account");
    TransactionBuilder::new(&mut source, Network::testnet())
        .add_operation(operation::create_account(DESTINATION, "25.5").expect("create account"))
        .add_operation(
            operation::payment(DESTINATION, Asset::Native, "1.0000001").expect("payment"),
        )
        .add_memo(Memo::text("stellar-wire").expect("memo"))
        .time_bounds(0, 1_700_000_000)
        .build()
        .expect("build")
}

// ---------------------------------------------------------------------------
// Classic transactions
// ---------------------------------------------------------------------------

#[test]
fn build_sign_serialize_matches_golden() {
    init_tracing();
    let keypair = Keypair::from_secret(SECRET).unwrap();
    assert_eq!(keypair.public_key(), PUBLIC);

    let mut env = build_unsigned();
    assert_eq!(env.transaction().fee, 200);
    assert_eq!(env.transaction().seq_num, 101);
    assert_eq!(env.to_xdr().unwrap(), UNSIGNED_XDR);
    assert_eq!(env.hash_hex().unwrap(), TX_HASH);

    env.sign(&keypair).unwrap();
    assert_eq!(env.to_xdr().unwrap(), SIGNED_XDR);
    assert!(verify_signature_from(&env, PUBLIC).unwrap());
}

#[test]
fn signing_twice_fails_and_leaves_envelope_unchanged() {
    init_tracing();
    let keypair = Keypair::from_secret(SECRET).unwrap();
    let mut env = build_unsigned();
    env.sign(&keypair).unwrap();

    assert!(matches!(
        env.sign(&keypair),
        Err(TransactionError::DuplicateSignature { .. })
    ));
    assert_eq!(env.to_xdr().unwrap(), SIGNED_XDR);
}

#[test]
fn parse_golden_envelope() {
    init_tracing();
    let parsed = parse_envelope(SIGNED_XDR, &Network::testnet()).unwrap();
    assert_eq!(parsed.hash_hex().unwrap(), TX_HASH);
    assert_eq!(parsed.signatures().len(), 1);
    assert_eq!(parsed.to_xdr().unwrap(), SIGNED_XDR);
    assert!(verify_signature_from(&parsed, PUBLIC).unwrap());

    let ParsedEnvelope::Tx(env) = parsed else {
        panic!("expected a plain transaction envelope");
    };
    let ops = &env.transaction().operations;
    assert_eq!(ops.len(), 2);
    match &ops[1].body {
        OperationBody::Payment(p) => assert_eq!(p.amount, 10_000_001),
        other => panic!("unexpected operation {other:?}"),
    }
}

/// Sequence 1, memo id 100, time bounds 12345..56789, public network.
fn build_published(base_fee: u32, ops: Vec<stellar_wire::xdr::Operation>) -> TxEnvelope {
    let mut source = Account::new(PUBLISHED_SOURCE, 0).expect("source account");
    let mut builder = TransactionBuilder::new(&mut source, Network::public())
        .base_fee(base_fee)
        .add_memo(Memo::Id(100))
        .time_bounds(12_345, 56_789);
    for op in ops {
        builder = builder.add_operation(op);
    }
    builder.build().expect("build")
}

fn published_payment() -> stellar_wire::xdr::Operation {
    operation::payment(PUBLISHED_DESTINATION, Asset::Native, "1000.0").expect("payment")
}

#[test]
fn build_sign_matches_published_v1_envelope() {
    init_tracing();
    let keypair = Keypair::from_secret(PUBLISHED_SECRET).unwrap();
    assert_eq!(keypair.public_key(), PUBLISHED_SOURCE);

    let mut env = build_published(200, vec![published_payment()]);
    env.sign(&keypair).unwrap();
    assert_eq!(env.to_xdr().unwrap(), PUBLISHED_V1_XDR);

    let parsed = parse_envelope(PUBLISHED_V1_XDR, &Network::public()).unwrap();
    assert_eq!(parsed.hash().unwrap(), env.hash().unwrap());
    assert!(verify_signature_from(&parsed, PUBLISHED_SOURCE).unwrap());
}

#[test]
fn legacy_v0_envelope_matches_published_bytes() {
    init_tracing();
    let parsed = parse_envelope(PUBLISHED_V0_XDR, &Network::public()).unwrap();
    assert_eq!(parsed.to_xdr().unwrap(), PUBLISHED_V0_XDR);
    assert_eq!(parsed.signatures().len(), 2);
    assert!(verify_signature_from(&parsed, PUBLISHED_SOURCE).unwrap());

    let ParsedEnvelope::Tx(legacy) = parsed else {
        panic!("expected a plain transaction envelope");
    };
    assert!(legacy.is_legacy_v0());

    // The same transaction built today hashes identically and collects the
    // same two signatures.
    let keypair = Keypair::from_secret(PUBLISHED_SECRET).unwrap();
    let preimage = hex::decode(PUBLISHED_HASHX_PREIMAGE).unwrap();
    let mut env = build_published(100, vec![
        published_payment(),
        operation::manage_data("hello", Some(b"world")).unwrap(),
    ]);
    assert_eq!(env.transaction().fee, 200);
    assert_eq!(env.hash().unwrap(), legacy.hash().unwrap());
    env.sign(&keypair).unwrap();
    env.sign_hashx(&preimage).unwrap();
    assert_eq!(env.signatures().as_slice(), legacy.signatures().as_slice());
    assert_eq!(
        env.signatures().as_slice()[1],
        hashx_signature(&preimage).unwrap()
    );
}

#[test]
fn same_transaction_on_another_network_hashes_differently() {
    init_tracing();
    let parsed = parse_envelope(SIGNED_XDR, &Network::public()).unwrap();
    assert_ne!(parsed.hash_hex().unwrap(), TX_HASH);
    // The testnet signature is worthless on the public network.
    assert!(!verify_signature_from(&parsed, PUBLIC).unwrap());
}

#[test]
fn public_only_keypair_cannot_sign() {
    init_tracing();
    let watcher = Keypair::from_public_key(PUBLIC).unwrap();
    let mut env = build_unsigned();
    assert_eq!(env.sign(&watcher), Err(TransactionError::NoSecretKey));
    assert!(env.signatures().is_empty());
}

// ---------------------------------------------------------------------------
// Fee bump
// ---------------------------------------------------------------------------

#[test]
fn fee_bump_matches_golden() {
    init_tracing();
    let keypair = Keypair::from_secret(SECRET).unwrap();
    let inner = match parse_envelope(SIGNED_XDR, &Network::testnet()).unwrap() {
        ParsedEnvelope::Tx(env) => env,
        ParsedEnvelope::FeeBump(_) => panic!("expected a plain transaction envelope"),
    };

    let mut bump = build_fee_bump(PUBLIC, 200, &inner).unwrap();
    assert_eq!(bump.transaction().fee, 600);
    assert_eq!(bump.hash_hex().unwrap(), FEE_BUMP_HASH);
    bump.sign(&keypair).unwrap();
    assert_eq!(bump.to_xdr().unwrap(), FEE_BUMP_XDR);

    // Round trip, and the inner envelope survives untouched.
    let parsed = parse_envelope(FEE_BUMP_XDR, &Network::testnet()).unwrap();
    let ParsedEnvelope::FeeBump(parsed) = parsed else {
        panic!("expected a fee bump envelope");
    };
    assert_eq!(parsed.inner().to_xdr().unwrap(), SIGNED_XDR);
    assert_eq!(parsed.inner().hash_hex().unwrap(), TX_HASH);
}

#[test]
fn fee_bump_must_outbid_inner_rate() {
    init_tracing();
    let inner = build_unsigned();
    assert_eq!(
        build_fee_bump(PUBLIC, 99, &inner).unwrap_err(),
        TransactionError::FeeTooLow {
            minimum: 100,
            offered: 99
        }
    );
}

// ---------------------------------------------------------------------------
// Soroban
// ---------------------------------------------------------------------------

#[test]
fn contract_call_with_signed_authorization() {
    init_tracing();
    let network = Network::testnet();
    let source = Keypair::from_secret(SECRET).unwrap();
    let owner = Keypair::random();
    let contract = "CA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJUWDA";

    let invocation = SorobanAuthorizedInvocation {
        function: SorobanAuthorizedFunction::ContractFn(InvokeContractArgs {
            contract_address: stellar_wire::identity::Address::from_string(contract)
                .unwrap()
                .to_sc_address(),
            function_name: "transfer".try_into().unwrap(),
            args: VecM::try_from(vec![ScVal::from(1_000i128)]).unwrap(),
        }),
        sub_invocations: VecM::default(),
    };
    let unsigned = SorobanAuthorizationEntry {
        credentials: SorobanCredentials::Address(SorobanAddressCredentials {
            address: ScAddress::Account(owner.xdr_account_id()),
            nonce: 123_456,
            signature_expiration_ledger: 0,
            signature: ScVal::Void,
        }),
        root_invocation: invocation,
    };
    let entry = authorize_entry(&unsigned, &owner, 5_000, &network).unwrap();
    verify_authorization(&entry, &network).unwrap();

    let op = operation::invoke_contract_function(
        contract,
        "transfer",
        vec![ScVal::from(1_000i128)],
        vec![entry],
    )
    .unwrap();
    let mut account = Account::new(PUBLIC, 7).unwrap();
    let mut env = TransactionBuilder::new(&mut account, network.clone())
        .add_operation(op)
        .set_timeout(300)
        .build()
        .unwrap();
    env.sign(&source).unwrap();

    let parsed = parse_envelope(&env.to_xdr().unwrap(), &network).unwrap();
    assert_eq!(parsed.hash().unwrap(), env.hash().unwrap());
    let ParsedEnvelope::Tx(parsed) = parsed else {
        panic!("expected a plain transaction envelope");
    };
    match &parsed.transaction().operations[0].body {
        OperationBody::InvokeHostFunction(f) => {
            assert_eq!(f.auth.len(), 1);
            verify_authorization(&f.auth[0], &network).unwrap();
        }
        other => panic!("unexpected operation {other:?}"),
    }
}
