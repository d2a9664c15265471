// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Leif Rydenfalk – https://github.com/Leif-Rydenfalk/cell

pub mod credentials;
pub mod error;
pub mod lister;

pub use credentials::{load_config, CredentialSource};
pub use error::ClusterError;
pub use lister::{list_pods, PodLister};

pub use k8s_openapi::api::core::v1::Pod;
