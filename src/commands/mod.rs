//! Command implementations
//!
//! Each `cmd_*` function is the full flow behind one CLI subcommand; the
//! binary stays a thin dispatcher.

mod ask;
mod collections;
mod ingest;
mod init;
mod query;
mod status;

pub use ask::*;
pub use collections::*;
pub use ingest::*;
pub use init::*;
pub use query::*;
pub use status::*;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::store::{Collection, Store};

/// Resolve a collection selector (ID or exact name) to a collection.
///
/// With no selector, falls back to the lazily created default collection.
pub async fn resolve_collection(
    config: &Config,
    store: &Store,
    selector: Option<&str>,
) -> Result<Collection> {
    match selector {
        None => {
            store
                .ensure_default_collection(&config.default_collection_name)
                .await
        }
        Some(s) => {
            if let Some(collection) = store.get_collection(s).await? {
                return Ok(collection);
            }
            if let Some(collection) = store.get_collection_by_name(s).await? {
                return Ok(collection);
            }
            Err(Error::CollectionNotFound(s.to_string()))
        }
    }
}
