//! Soroban resource declarations.
//!
//! Every contract transaction carries a [`SorobanTransactionData`]: the
//! ledger keys it will touch, the CPU and I/O it may spend, and the fee it
//! reserves for both. Usually simulation fills this in and you only tweak
//! it; restoring and extending footprints is where you build one by hand.

use tracing::debug;

use crate::xdr::{
    LedgerFootprint, LedgerKey, SorobanResources, SorobanTransactionData, VecM, XdrCodec, XdrError,
};

/// Builds [`SorobanTransactionData`], starting empty or from existing data.
///
/// ```
/// use stellar_wire::soroban::SorobanDataBuilder;
///
/// let data = SorobanDataBuilder::new()
///     .resource_fee(50_000)
///     .resources(1_000_000, 2_048, 512)
///     .build()
///     .unwrap();
/// assert_eq!(data.resource_fee, 50_000);
/// assert_eq!(data.resources.instructions, 1_000_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SorobanDataBuilder {
    data: SorobanTransactionData,
    read_only: Option<Vec<LedgerKey>>,
    read_write: Option<Vec<LedgerKey>>,
}

impl SorobanDataBuilder {
    /// Zero fee, zero resources, empty footprint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing data, typically a simulation result.
    pub fn from_data(data: SorobanTransactionData) -> Self {
        Self {
            data,
            ..Self::default()
        }
    }

    /// Start from base64 XDR.
    pub fn from_xdr(b64: &str) -> Result<Self, XdrError> {
        Ok(Self::from_data(SorobanTransactionData::from_xdr_base64(b64)?))
    }

    /// Stroops reserved for resource fees.
    pub fn resource_fee(mut self, fee: i64) -> Self {
        self.data.resource_fee = fee;
        self
    }

    /// Replace the read-only part of the footprint.
    pub fn read_only(mut self, keys: Vec<LedgerKey>) -> Self {
        self.read_only = Some(keys);
        self
    }

    /// Replace the read-write part of the footprint.
    pub fn read_write(mut self, keys: Vec<LedgerKey>) -> Self {
        self.read_write = Some(keys);
        self
    }

    /// CPU instructions, bytes read from disk and bytes written.
    pub fn resources(mut self, instructions: u32, disk_read_bytes: u32, write_bytes: u32) -> Self {
        self.data.resources.instructions = instructions;
        self.data.resources.disk_read_bytes = disk_read_bytes;
        self.data.resources.write_bytes = write_bytes;
        self
    }

    pub fn build(self) -> Result<SorobanTransactionData, XdrError> {
        let SorobanTransactionData {
            ext,
            resources,
            resource_fee,
        } = self.data;
        let footprint = LedgerFootprint {
            read_only: match self.read_only {
                Some(keys) => VecM::try_from(keys)?,
                None => resources.footprint.read_only,
            },
            read_write: match self.read_write {
                Some(keys) => VecM::try_from(keys)?,
                None => resources.footprint.read_write,
            },
        };
        debug!(
            resource_fee,
            read_only = footprint.read_only.len(),
            read_write = footprint.read_write.len(),
            "soroban data built"
        );
        Ok(SorobanTransactionData {
            ext,
            resources: SorobanResources {
                footprint,
                ..resources
            },
            resource_fee,
        })
    }
}
