//! Transaction construction via the builder pattern.
//!
//! The [`TransactionBuilder`] enforces a disciplined construction flow:
//! set the fields you need, call `.build()`, and get back an unsigned
//! [`TxEnvelope`]. Everything that can be wrong with a transaction before
//! it is signed (time bounds, ledger bounds, operation count, fee overflow)
//! is checked in `build()`, so signing never has to.
//!
//! The builder does not sign -- that happens on the envelope. This
//! separation keeps construction testable without key material.

use chrono::Utc;
use tracing::debug;

use super::envelope::TxEnvelope;
use super::TransactionError;
use crate::config::{BASE_FEE, MAX_OPS_PER_TX, TIMEOUT_INFINITE};
use crate::identity::muxed::parse_muxed_account;
use crate::network::Network;
use crate::xdr::{
    LedgerBounds, Memo, MuxedAccount, Operation, Operations, Preconditions, PreconditionsV2,
    SequenceNumber, SignerKey, SorobanTransactionData, StringM, TimeBounds, Transaction,
    TransactionExt, VecM, XdrError,
};

// ---------------------------------------------------------------------------
// Account
// ---------------------------------------------------------------------------

/// A source account and its current sequence number.
///
/// Building a transaction consumes the next sequence number, so the account
/// is borrowed mutably by the builder and bumped on a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    account: MuxedAccount,
    sequence: SequenceNumber,
}

impl Account {
    /// Parse a `G...` or `M...` address.
    pub fn new(account: &str, sequence: SequenceNumber) -> Result<Self, TransactionError> {
        Ok(Self {
            account: parse_muxed_account(account)?,
            sequence,
        })
    }

    pub fn from_muxed(account: MuxedAccount, sequence: SequenceNumber) -> Self {
        Self { account, sequence }
    }

    pub fn account(&self) -> &MuxedAccount {
        &self.account
    }

    pub fn sequence(&self) -> SequenceNumber {
        self.sequence
    }

    /// The sequence number the next transaction will use.
    pub fn next_sequence(&self) -> Result<SequenceNumber, TransactionError> {
        self.sequence
            .checked_add(1)
            .ok_or(TransactionError::SequenceOverflow)
    }

    pub fn increment_sequence_number(&mut self) -> Result<(), TransactionError> {
        self.sequence = self.next_sequence()?;
        Ok(())
    }
}

impl Memo {
    /// A text memo of at most 28 bytes.
    pub fn text(text: &str) -> Result<Self, XdrError> {
        Ok(Memo::Text(StringM::try_from(text)?))
    }
}

// ---------------------------------------------------------------------------
// TransactionBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for unsigned transactions.
///
/// # Usage
///
/// ```rust,no_run
/// use stellar_wire::network::Network;
/// use stellar_wire::transaction::{operation, Account, TransactionBuilder};
/// use stellar_wire::xdr::Asset;
///
/// let mut source = Account::new("GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ", 41).unwrap();
/// let payment = operation::payment(
///     "GA7QYNF7SOWQ3GLR2BGMZEHXAVIRZA4KVWLTJJFC7MGXUA74P7UJVSGZ",
///     Asset::Native,
///     "12.5",
/// ).unwrap();
///
/// let envelope = TransactionBuilder::new(&mut source, Network::testnet())
///     .add_operation(payment)
///     .set_timeout(300)
///     .build()
///     .unwrap();
/// assert_eq!(source.sequence(), 42);
/// ```
pub struct TransactionBuilder<'a> {
    source: &'a mut Account,
    network: Network,
    base_fee: u32,
    operations: Vec<Operation>,
    memo: Memo,
    time_bounds: Option<TimeBounds>,
    ledger_bounds: Option<LedgerBounds>,
    min_sequence_number: Option<SequenceNumber>,
    min_sequence_age: u64,
    min_sequence_ledger_gap: u32,
    extra_signers: Vec<SignerKey>,
    soroban_data: Option<SorobanTransactionData>,
    timeout_error: Option<TransactionError>,
}

impl<'a> TransactionBuilder<'a> {
    /// Defaults:
    /// - `base_fee`: [`BASE_FEE`] stroops per operation
    /// - `memo`: none
    /// - no preconditions; time bounds must still be set before `build()`
    pub fn new(source: &'a mut Account, network: Network) -> Self {
        Self {
            source,
            network,
            base_fee: BASE_FEE,
            operations: Vec::new(),
            memo: Memo::None,
            time_bounds: None,
            ledger_bounds: None,
            min_sequence_number: None,
            min_sequence_age: 0,
            min_sequence_ledger_gap: 0,
            extra_signers: Vec::new(),
            soroban_data: None,
            timeout_error: None,
        }
    }

    /// Per-operation fee in stroops.
    pub fn base_fee(mut self, fee: u32) -> Self {
        self.base_fee = fee;
        self
    }

    pub fn add_operation(mut self, op: Operation) -> Self {
        self.operations.push(op);
        self
    }

    pub fn add_memo(mut self, memo: Memo) -> Self {
        self.memo = memo;
        self
    }

    /// Explicit time bounds in Unix seconds. `max_time` 0 means unbounded.
    pub fn time_bounds(mut self, min_time: u64, max_time: u64) -> Self {
        self.time_bounds = Some(TimeBounds { min_time, max_time });
        self
    }

    /// Valid from now until `seconds` from now, or forever with
    /// [`TIMEOUT_INFINITE`].
    ///
    /// Keeps an explicit `min_time`. Fails at `build()` if an upper bound
    /// was already set.
    pub fn set_timeout(mut self, seconds: u64) -> Self {
        if self.time_bounds.is_some_and(|tb| tb.max_time > 0) {
            self.timeout_error = Some(TransactionError::TimeoutAlreadySet);
            return self;
        }
        let max_time = if seconds == TIMEOUT_INFINITE {
            0
        } else {
            let now = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
            now.saturating_add(seconds)
        };
        let min_time = self.time_bounds.map_or(0, |tb| tb.min_time);
        self.time_bounds = Some(TimeBounds { min_time, max_time });
        self
    }

    /// Ledger bounds. `max_ledger` 0 means unbounded.
    pub fn ledger_bounds(mut self, min_ledger: u32, max_ledger: u32) -> Self {
        self.ledger_bounds = Some(LedgerBounds {
            min_ledger,
            max_ledger,
        });
        self
    }

    /// Only valid if the source's sequence number is at least this.
    pub fn min_sequence_number(mut self, seq: SequenceNumber) -> Self {
        self.min_sequence_number = Some(seq);
        self
    }

    /// Seconds that must have passed since the source's sequence last changed.
    pub fn min_sequence_age(mut self, seconds: u64) -> Self {
        self.min_sequence_age = seconds;
        self
    }

    /// Ledgers that must have closed since the source's sequence last changed.
    pub fn min_sequence_ledger_gap(mut self, gap: u32) -> Self {
        self.min_sequence_ledger_gap = gap;
        self
    }

    /// Require an additional signature from `signer`. At most two.
    pub fn add_extra_signer(mut self, signer: SignerKey) -> Self {
        self.extra_signers.push(signer);
        self
    }

    /// Attach Soroban resources. Their resource fee is added on top of the
    /// inclusion fee.
    pub fn soroban_data(mut self, data: SorobanTransactionData) -> Self {
        self.soroban_data = Some(data);
        self
    }

    fn preconditions(&mut self) -> Result<Preconditions, TransactionError> {
        let Some(time_bounds) = self.time_bounds else {
            return Err(TransactionError::MissingTimeBounds);
        };
        if time_bounds.max_time != 0 && time_bounds.max_time <= time_bounds.min_time {
            return Err(TransactionError::InvalidTimeBounds {
                min_time: time_bounds.min_time,
                max_time: time_bounds.max_time,
            });
        }
        if let Some(lb) = self.ledger_bounds {
            if lb.max_ledger != 0 && lb.max_ledger <= lb.min_ledger {
                return Err(TransactionError::InvalidLedgerBounds {
                    min_ledger: lb.min_ledger,
                    max_ledger: lb.max_ledger,
                });
            }
        }

        let needs_v2 = self.ledger_bounds.is_some()
            || self.min_sequence_number.is_some()
            || self.min_sequence_age != 0
            || self.min_sequence_ledger_gap != 0
            || !self.extra_signers.is_empty();
        if !needs_v2 {
            return Ok(Preconditions::Time(time_bounds));
        }
        Ok(Preconditions::V2(PreconditionsV2 {
            time_bounds: Some(time_bounds),
            ledger_bounds: self.ledger_bounds,
            min_seq_num: self.min_sequence_number,
            min_seq_age: self.min_sequence_age,
            min_seq_ledger_gap: self.min_sequence_ledger_gap,
            extra_signers: VecM::try_from(std::mem::take(&mut self.extra_signers))?,
        }))
    }

    /// Consume the builder and produce an unsigned envelope.
    ///
    /// On success the source account's sequence number is advanced to the
    /// one the transaction uses. On failure it is left alone.
    pub fn build(mut self) -> Result<TxEnvelope, TransactionError> {
        if let Some(err) = self.timeout_error.take() {
            return Err(err);
        }
        if self.operations.is_empty() {
            return Err(TransactionError::NoOperations);
        }
        if self.operations.len() > MAX_OPS_PER_TX as usize {
            return Err(TransactionError::TooManyOperations {
                count: self.operations.len(),
                max: MAX_OPS_PER_TX,
            });
        }
        let cond = self.preconditions()?;

        // ops ≤ 100, so the count always fits.
        let inclusion_fee = self
            .base_fee
            .checked_mul(self.operations.len() as u32)
            .ok_or(TransactionError::FeeOverflow)?;
        let (fee, ext) = match self.soroban_data.take() {
            Some(data) => {
                let resource_fee =
                    u32::try_from(data.resource_fee).map_err(|_| TransactionError::FeeOverflow)?;
                let fee = inclusion_fee
                    .checked_add(resource_fee)
                    .ok_or(TransactionError::FeeOverflow)?;
                (fee, TransactionExt::V1(data))
            }
            None => (inclusion_fee, TransactionExt::V0),
        };

        let seq_num = self.source.next_sequence()?;
        let tx = Transaction {
            source_account: self.source.account.clone(),
            fee,
            seq_num,
            cond,
            memo: self.memo,
            operations: Operations::try_from(self.operations)?,
            ext,
        };
        self.source.sequence = seq_num;
        debug!(
            source = %tx.source_account,
            seq_num,
            fee,
            operations = tx.operations.len(),
            "transaction built"
        );
        Ok(TxEnvelope::new(tx, self.network))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
