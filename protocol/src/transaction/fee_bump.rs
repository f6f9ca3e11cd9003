//! Fee bumps: paying for somebody else's transaction.
//!
//! A fee bump wraps an already-signed envelope, byte for byte, and adds a
//! fee source, a higher fee and signatures of its own. The inner
//! signatures stay valid because the inner transaction is never touched.
//! Its hash is still the hash the inner signers signed.
//!
//! ```text
//!   FeeBumpEnvelope
//!   ├── fee_source, fee = base_fee × (ops + 1) + resource_fee
//!   ├── inner: TxEnvelope (untouched, with its own signatures)
//!   └── signatures (fee source)
//! ```

use tracing::debug;

use super::envelope::{Envelope, FeeBumpEnvelope, TxEnvelope};
use super::TransactionError;
use crate::config::MIN_BASE_FEE;
use crate::identity::muxed::parse_muxed_account;
use crate::xdr::{
    FeeBumpTransaction, FeeBumpTransactionExt, FeeBumpTransactionInnerTx, InnerTransactionResult,
    InnerTransactionResultPair, InnerTransactionResultResult, TransactionResult,
    TransactionResultExt, TransactionResultResult,
};

/// Wrap `inner` in a fee bump paid by `fee_source` (`G...` or `M...`).
///
/// `base_fee` is the per-operation rate the fee source is willing to pay.
/// It must be at least [`MIN_BASE_FEE`] and at least the inner
/// transaction's own per-operation rate, not counting any Soroban resource
/// fee. The fee bump counts as one extra operation.
///
/// The fee bump is signed for the same network as `inner`. A legacy V0
/// inner envelope is wrapped in its V1 form, which hashes identically.
pub fn build_fee_bump(
    fee_source: &str,
    base_fee: i64,
    inner: &TxEnvelope,
) -> Result<FeeBumpEnvelope, TransactionError> {
    let tx = inner.transaction();
    let ops = tx.operations.len() as i64;
    let resource_fee = tx.soroban_resource_fee();
    let inner_inclusion_fee = i64::from(tx.fee) - resource_fee;

    // Smallest per-op rate that covers the inner inclusion fee.
    let inner_rate = if ops == 0 {
        inner_inclusion_fee
    } else {
        (inner_inclusion_fee + ops - 1) / ops
    };
    let minimum = inner_rate.max(MIN_BASE_FEE);
    if base_fee < minimum {
        return Err(TransactionError::FeeTooLow {
            minimum,
            offered: base_fee,
        });
    }

    let fee = base_fee
        .checked_mul(ops + 1)
        .and_then(|f| f.checked_add(resource_fee))
        .ok_or(TransactionError::FeeOverflow)?;
    let fee_source = parse_muxed_account(fee_source)?;

    let bump = FeeBumpTransaction {
        fee_source,
        fee,
        inner_tx: FeeBumpTransactionInnerTx::Tx(inner.to_v1_envelope()?),
        ext: FeeBumpTransactionExt::V0,
    };
    let inner_hash = inner.hash_hex()?;
    debug!(fee_source = %bump.fee_source, fee, %inner_hash, "fee bump built");
    Ok(FeeBumpEnvelope::new(bump, inner.network().clone()))
}

/// Pair an inner transaction's result with its hash, the way a fee bump
/// result reports it.
pub fn inner_result_pair(
    inner: &TxEnvelope,
    result: InnerTransactionResult,
) -> Result<InnerTransactionResultPair, TransactionError> {
    Ok(InnerTransactionResultPair {
        transaction_hash: inner.hash()?,
        result,
    })
}

/// The outer result of a fee bump. Success or failure follows the inner
/// result; `fee_charged` is what the fee source actually paid.
pub fn wrap_inner_result(fee_charged: i64, pair: InnerTransactionResultPair) -> TransactionResult {
    let result = match pair.result.result {
        InnerTransactionResultResult::TxSuccess(_) => TransactionResultResult::TxFeeBumpInnerSuccess(pair),
        _ => TransactionResultResult::TxFeeBumpInnerFailed(pair),
    };
    TransactionResult {
        fee_charged,
        result,
        ext: TransactionResultExt::V0,
    }
}
