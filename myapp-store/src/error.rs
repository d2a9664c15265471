// SPDX-License-Identifier: MIT
// myapp-store/src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached. No rows were read.
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("users query failed: {0}")]
    Query(#[source] sqlx::Error),
}
