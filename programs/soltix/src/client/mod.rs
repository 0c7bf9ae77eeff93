//! Off-chain helpers for building requests and reading ledger state.
//!
//! Nothing here runs on-ledger. Front-ends and scripts use it to bind
//! instructions to their derived accounts and to answer listing and ticket
//! verification queries from fetched account data.

pub mod builders;
pub mod query;

pub use builders::*;
pub use query::*;
