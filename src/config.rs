// ABOUTME: Environment-driven application configuration and store construction
// ABOUTME: With no remote URL configured the store runs on the local backend alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use url::Url;

use crate::storage::{FallbackStore, LocalBackend, RemoteBackend};

/// Remote document-store connection settings
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Service base URL
    pub base_url: Url,
    /// Bearer token minted by the external identity provider
    pub auth_token: Option<String>,
}

/// Application configuration, read from the environment:
///
/// - `HEALTHTRACKR_REMOTE_URL`: remote document-store base URL (optional)
/// - `HEALTHTRACKR_AUTH_TOKEN`: bearer token for the remote store (optional)
/// - `HEALTHTRACKR_DATA_DIR`: local storage directory (defaults to the
///   platform data dir)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Remote store settings; `None` runs local-only
    pub remote: Option<RemoteConfig>,
    /// Directory holding the local-persistence JSON files
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `HEALTHTRACKR_REMOTE_URL` is set but is not a
    /// valid URL.
    pub fn from_env() -> Result<Self> {
        let remote = match env::var("HEALTHTRACKR_REMOTE_URL") {
            Ok(raw) => {
                let base_url = Url::parse(&raw)
                    .with_context(|| format!("invalid HEALTHTRACKR_REMOTE_URL: {raw}"))?;
                Some(RemoteConfig {
                    base_url,
                    auth_token: env::var("HEALTHTRACKR_AUTH_TOKEN").ok(),
                })
            }
            Err(_) => None,
        };

        let data_dir = env::var("HEALTHTRACKR_DATA_DIR").map_or_else(
            |_| default_data_dir(),
            PathBuf::from,
        );

        Ok(Self { remote, data_dir })
    }

    /// The local-persistence backend for this configuration
    #[must_use]
    pub fn local_backend(&self) -> LocalBackend {
        LocalBackend::new(&self.data_dir)
    }

    /// The remote-first store with transparent local fallback, when a
    /// remote URL is configured
    #[must_use]
    pub fn fallback_store(&self) -> Option<FallbackStore<RemoteBackend, LocalBackend>> {
        self.remote.as_ref().map(|remote| {
            FallbackStore::new(
                RemoteBackend::new(&remote.base_url, remote.auth_token.clone()),
                self.local_backend(),
            )
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("healthtrackr")
}
