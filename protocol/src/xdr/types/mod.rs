//! The schema: one Rust item per XDR definition, grouped by concern.

pub mod contract;
pub mod basic;
pub mod ledger;
pub mod operation;
pub mod result;
pub mod soroban;
pub mod transaction;

pub use self::contract::*;
pub use self::basic::*;
pub use self::ledger::*;
pub use self::operation::*;
pub use self::result::*;
pub use self::soroban::*;
pub use self::transaction::*;
