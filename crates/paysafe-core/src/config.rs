// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// SDK configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{ValidationResult, is_country_code, is_currency_code};

/// Paysafe backend the SDK talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    #[default]
    Test,
    Live,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Test => "TEST",
            Self::Live => "LIVE",
        }
    }
}

/// Settings handed to the common SDK on setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SdkConfig {
    /// Base64-encoded `user:password` single-use API key.
    pub api_key: String,
    pub environment: Environment,
    /// Merchant account used for tokenization.
    pub account_id: Option<String>,
    /// ISO 4217 currency code (default USD).
    pub currency_code: String,
    /// ISO 3166-1 alpha-2 country code (default US).
    pub country_code: String,
    /// Apple Pay merchant identifier, if Apple Pay is offered.
    pub merchant_identifier: Option<String>,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            environment: Environment::Test,
            account_id: None,
            currency_code: "USD".into(),
            country_code: "US".into(),
            merchant_identifier: None,
        }
    }
}

impl SdkConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Check the fields native setup relies on. Collects every problem.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.api_key.trim().is_empty() {
            errors.push("apiKey is required and must be a non-empty string".to_owned());
        }
        if let Some(account_id) = &self.account_id {
            if account_id.is_empty() || !account_id.bytes().all(|b| b.is_ascii_digit()) {
                errors.push("accountId must be a numeric string".to_owned());
            }
        }
        if !is_currency_code(&self.currency_code) {
            errors.push("currencyCode must be a 3-letter uppercase ISO currency code".to_owned());
        }
        if !is_country_code(&self.country_code) {
            errors.push("countryCode must be a 2-letter uppercase ISO country code".to_owned());
        }
        if let Some(merchant) = &self.merchant_identifier {
            if !merchant.starts_with("merchant.") {
                errors.push("merchantIdentifier must start with \"merchant.\"".to_owned());
            }
        }

        ValidationResult::from_errors(errors)
    }
}
