// SPDX-License-Identifier: MIT
// myapp-cluster/src/error.rs

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ClusterError {
    /// Credentials were missing or unusable. No client was built.
    #[error("no usable cluster credentials ({origin}): {source}")]
    Credentials {
        origin: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to build cluster client: {0}")]
    Client(#[source] kube::Error),

    #[error("failed to list pods in namespace {namespace}: {source}")]
    List {
        namespace: String,
        #[source]
        source: kube::Error,
    },
}
