// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

use crate::error::{BoxError, ClusterError};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Config;
use myapp_core::ClusterSettings;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Where cluster credentials come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// `KUBECONFIG` / `~/.kube/config`, then the in-cluster service account.
    Infer,
    /// Service-account token and `KUBERNETES_SERVICE_*` only.
    InCluster,
    Kubeconfig(PathBuf),
}

impl CredentialSource {
    pub fn from_settings(settings: &ClusterSettings) -> Self {
        match (&settings.kubeconfig, settings.in_cluster) {
            (Some(path), _) => CredentialSource::Kubeconfig(path.clone()),
            (None, true) => CredentialSource::InCluster,
            (None, false) => CredentialSource::Infer,
        }
    }
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Infer => write!(f, "inferred from environment"),
            CredentialSource::InCluster => write!(f, "in-cluster service account"),
            CredentialSource::Kubeconfig(path) => write!(f, "kubeconfig {}", path.display()),
        }
    }
}

/// Resolve credentials into a client config. Any failure is returned as
/// `ClusterError::Credentials`; there is no fallback to an unauthenticated
/// client.
pub async fn load_config(source: &CredentialSource) -> Result<Config, ClusterError> {
    debug!(source = %source, "loading cluster credentials");

    let fail = |e: BoxError| ClusterError::Credentials {
        origin: source.to_string(),
        source: e,
    };

    match source {
        CredentialSource::Infer => Config::infer().await.map_err(|e| fail(Box::new(e))),
        CredentialSource::InCluster => Config::incluster().map_err(|e| fail(Box::new(e))),
        CredentialSource::Kubeconfig(path) => {
            let kubeconfig = Kubeconfig::read_from(path).map_err(|e| fail(Box::new(e)))?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                .await
                .map_err(|e| fail(Box::new(e)))
        }
    }
}
