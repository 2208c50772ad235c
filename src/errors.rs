// ABOUTME: Typed storage error hierarchy with a classified permission-denied variant
// ABOUTME: Permission denial is the only error class given fallback treatment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 HealthTrackr

use std::path::PathBuf;

/// Result alias for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by the storage layer.
///
/// Only [`StorageError::PermissionDenied`] triggers the remote-to-local
/// fallback; every other variant propagates to the caller unchanged. The
/// store performs no retries of its own.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backend refused the operation for lack of permission
    #[error("Permission denied by {backend} backend: {context}")]
    PermissionDenied {
        /// Name of the backend that refused
        backend: &'static str,
        /// Denial detail reported by the backend
        context: String,
    },

    /// The HTTP transport failed before a response was produced
    #[error("Transport failure during {context}")]
    Transport {
        /// Operation being attempted
        context: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The remote backend returned a non-success status other than a
    /// permission denial
    #[error("Remote backend rejected {context}: HTTP {status}: {message}")]
    Remote {
        /// Operation being attempted
        context: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// A payload could not be serialized or a response could not be parsed
    #[error("Serialization failed for {context}")]
    Serialization {
        /// What was being (de)serialized
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The local backend could not read or write its storage file
    #[error("Storage I/O failure at {path}")]
    Io {
        /// File the operation touched
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl StorageError {
    /// Whether this error is the classified permission-denied condition
    /// that the fallback decorator recovers from
    #[must_use]
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
