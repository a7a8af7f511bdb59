//! Static record table and the per-type answer policy built on it.

mod record_store;
mod resolve;

pub use record_store::{RecordStore, RecordStoreBuilder, StoreError};
pub use resolve::{Resolution, Resolver};
