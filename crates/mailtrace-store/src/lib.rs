// JSONL staging store
// First landing zone for extracted records before the SQLite migration

mod client;
mod collection;

pub use client::{DocDatabase, StoreClient};
pub use collection::{Collection, ID_FIELD};
