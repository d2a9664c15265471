// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use crate::credentials::{load_config, CredentialSource};
use crate::error::ClusterError;
use k8s_openapi::api::core::v1::Pod;
use kube::api::{Api, ListParams};
use kube::{Client, Config};
use myapp_core::{log_operation, ClusterSettings};
use tracing::info;

/// Lists pods in a single namespace. Owns its client; dropping the lister
/// releases the connection pool.
pub struct PodLister {
    api: Api<Pod>,
    namespace: String,
}

impl PodLister {
    /// 1. resolve credentials  2. build the client  3. scope it to the namespace
    pub async fn connect(settings: &ClusterSettings) -> Result<Self, ClusterError> {
        let source = CredentialSource::from_settings(settings);
        let config = log_operation!("cluster.credentials", load_config(&source).await)?;
        Self::from_config(config, &settings.namespace)
    }

    pub fn from_config(config: Config, namespace: &str) -> Result<Self, ClusterError> {
        info!(cluster = %config.cluster_url, namespace = namespace, "building cluster client");
        let client = Client::try_from(config).map_err(ClusterError::Client)?;
        Ok(Self::from_client(client, namespace))
    }

    pub fn from_client(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Every pod in the namespace, in the order the API server returns them.
    pub async fn list(&self) -> Result<Vec<Pod>, ClusterError> {
        let pods = self
            .api
            .list(&ListParams::default())
            .await
            .map_err(|source| ClusterError::List {
                namespace: self.namespace.clone(),
                source,
            })?;
        Ok(pods.items)
    }
}

/// Connect, list, drop the client.
pub async fn list_pods(settings: &ClusterSettings) -> Result<Vec<Pod>, ClusterError> {
    let lister = PodLister::connect(settings).await?;
    let pods = log_operation!("cluster.list", lister.list().await)?;
    info!(namespace = lister.namespace(), count = pods.len(), "listed pods");
    Ok(pods)
}
