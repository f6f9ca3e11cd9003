//! # Protocol Configuration & Constants
//!
//! Every magic number the client core depends on lives here. If you're
//! hardcoding a fee or a passphrase somewhere else, you're doing it wrong
//! and the next protocol upgrade will find you.
//!
//! Most of these values are dictated by the network, not by us. Changing
//! one does not change the network; it just makes your transactions fail.

// ---------------------------------------------------------------------------
// Network Passphrases
// ---------------------------------------------------------------------------

/// The public network. Mistakes here cost real money.
pub const PUBLIC_NETWORK_PASSPHRASE: &str = "Public Global Stellar Network ; September 2015";

/// The test network. Reset every few months, funded by friendbot.
pub const TESTNET_PASSPHRASE: &str = "Test SDF Network ; September 2015";

/// The future network, where upcoming protocol versions get shaken down.
pub const FUTURENET_PASSPHRASE: &str = "Test SDF Future Network ; October 2022";

/// A local standalone node, e.g. the quickstart container.
pub const STANDALONE_PASSPHRASE: &str = "Standalone Network ; February 2017";

// ---------------------------------------------------------------------------
// Fees
// ---------------------------------------------------------------------------

/// Default per-operation fee in stroops.
pub const BASE_FEE: u32 = 100;

/// The lowest per-operation fee the network accepts. A fee bump offering
/// less than this is rejected before it is built.
pub const MIN_BASE_FEE: i64 = 100;

// ---------------------------------------------------------------------------
// Transaction Limits
// ---------------------------------------------------------------------------

/// Maximum operations in one transaction.
pub const MAX_OPS_PER_TX: u32 = 100;

/// Maximum decorated signatures on one envelope.
pub const MAX_SIGNATURES: u32 = 20;

/// Maximum extra signers in a V2 precondition.
pub const MAX_EXTRA_SIGNERS: u32 = 2;

/// Passed to `set_timeout` to mean "no upper time bound".
pub const TIMEOUT_INFINITE: u64 = 0;

/// Maximum bytes in a text memo.
pub const MEMO_TEXT_MAX: u32 = 28;

/// Maximum bytes in a signed-payload signer's payload.
pub const SIGNED_PAYLOAD_MAX: u32 = 64;

// ---------------------------------------------------------------------------
// Amounts
// ---------------------------------------------------------------------------

/// Stroops per whole unit. Amounts carry exactly seven decimal places.
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

/// Fractional digits in a decimal amount string.
pub const AMOUNT_DECIMALS: usize = 7;

// ---------------------------------------------------------------------------
// Trustlines and pools
// ---------------------------------------------------------------------------

/// The holder may send and receive the asset.
pub const TRUSTLINE_AUTHORIZED: u32 = 0x1;

/// The holder may keep existing offers but not create new ones.
pub const TRUSTLINE_AUTHORIZED_TO_MAINTAIN_LIABILITIES: u32 = 0x2;

/// The issuer may claw the asset back from this trustline.
pub const TRUSTLINE_CLAWBACK_ENABLED: u32 = 0x4;

/// Constant-product pool fee in basis points. The only fee the network
/// accepts.
pub const LIQUIDITY_POOL_FEE: i32 = 30;

// ---------------------------------------------------------------------------
// Codec
// ---------------------------------------------------------------------------

/// How deep structs, unions, optionals and vectors may nest before the
/// codec gives up.
/// Contract values and claim predicates are recursive; hostile input is not
/// allowed to turn that into a stack overflow.
pub const DEFAULT_XDR_DEPTH_LIMIT: u32 = 500;
