// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the Paysafe bridges.

use thiserror::Error;

/// Top-level error type for all bridge operations.
///
/// Validation failures are normally returned as data (`ValidationResult`);
/// the `InvalidOptions` and `InvalidCard` variants exist for the facades
/// that need a throwing surface.
#[derive(Debug, Error)]
pub enum PaysafeError {
    // -- Validation --
    #[error("Invalid tokenization options: {0}")]
    InvalidOptions(String),

    #[error("Invalid card details: {0}")]
    InvalidCard(String),

    #[error("Invalid SDK configuration: {0}")]
    InvalidConfig(String),

    // -- Platform bridge --
    /// The native module is not compiled into the app binary. The message
    /// is a literal contract and is rendered verbatim.
    #[error("{message}")]
    NotLinked { message: String },

    #[error("{0}")]
    PlatformUnsupported(&'static str),

    #[error("Paysafe SDK has not been set up")]
    NotInitialized,

    // -- Native call failures --
    /// A native `Error` instance surfaced through the bridge.
    #[error("{message}")]
    Native {
        code: Option<String>,
        message: String,
    },

    /// Anything else thrown natively. Propagated as-is, never rewrapped.
    #[error("native module threw a non-error value: {0}")]
    NativeThrow(serde_json::Value),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PaysafeError {
    /// Shorthand for a native `Error` carrying only a message.
    pub fn native(message: impl Into<String>) -> Self {
        Self::Native {
            code: None,
            message: message.into(),
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PaysafeError>;
