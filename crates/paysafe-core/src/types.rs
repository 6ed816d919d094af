// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Paysafe payment bridges.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operating system the bridges are running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
    Web,
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Android => "android",
            Self::Web => "web",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "android" => Ok(Self::Android),
            "web" => Ok(Self::Web),
            "other" | "windows" | "macos" | "linux" => Ok(Self::Other),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// Kind of transaction a tokenize request is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Payment,
    Verification,
}

impl TransactionType {
    /// Wire keyword (`PAYMENT` / `VERIFICATION`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "PAYMENT",
            Self::Verification => "VERIFICATION",
        }
    }

    /// Case-sensitive parse of the wire keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "PAYMENT" => Some(Self::Payment),
            "VERIFICATION" => Some(Self::Verification),
            _ => None,
        }
    }
}

/// Apple Pay block of a tokenize request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplePayConfig {
    /// Apple merchant identifier, e.g. `merchant.com.example.shop`.
    pub merchant_id: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Opaque payment data blob from PassKit.
    pub payment_data: String,
}

/// Apple Pay tokenize request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizeOptions {
    pub merchant_ref_num: String,
    pub transaction_type: TransactionType,
    pub apple_pay: ApplePayConfig,
}

impl TokenizeOptions {
    /// The untyped object handed across the bridge.
    pub fn to_value(&self) -> crate::error::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Raw card fields as typed by the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPrimitives {
    pub card_number: String,
    pub expiry_month: String,
    pub expiry_year: String,
    pub cvv: String,
}

/// Card tokenize request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTokenizeOptions {
    pub merchant_ref_num: String,
    pub transaction_type: TransactionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holder_name: Option<String>,
    pub card: CardPrimitives,
}

/// Outcome of a validation pass. Every failing check contributes one message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Errors joined into a single line for throwing surfaces.
    pub fn joined(&self) -> String {
        self.errors.join(", ")
    }
}

/// Error block of a normalized native result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NativeError {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Fully populated tokenize result, regardless of what native code sent back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResult {
    pub token: String,
    pub is_success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<NativeError>,
}

impl NormalizedResult {
    /// Failed result carrying a single error block.
    pub fn failure(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            token: String::new(),
            is_success: false,
            error: Some(NativeError {
                code: code.into(),
                message: message.into(),
                details: Some(Value::String(details.into())),
            }),
        }
    }
}

/// `^[A-Z]{2}$`
pub fn is_country_code(code: &str) -> bool {
    is_upper_alpha(code, 2)
}

/// `^[A-Z]{3}$`
pub fn is_currency_code(code: &str) -> bool {
    is_upper_alpha(code, 3)
}

fn is_upper_alpha(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_uppercase())
}
