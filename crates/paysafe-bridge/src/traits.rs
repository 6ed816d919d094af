// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for the native payment modules.
//
// One trait per native package. Payloads cross the bridge as untyped JSON;
// the facades own validation and normalization. A native `Error` surfaces as
// `PaysafeError::Native`, anything else thrown as `PaysafeError::NativeThrow`.

use paysafe_core::Environment;
use paysafe_core::error::Result;
use serde_json::Value;

/// Common Paysafe SDK module (`PaysafeSDK` on both platforms).
pub trait NativePaysafeSdk: Send + Sync {
    /// Initialise the vendor SDK with a single-use API key.
    fn setup(&self, api_key: &str, environment: Environment) -> Result<()>;

    /// Whether the vendor SDK has completed setup.
    fn is_initialized(&self) -> Result<bool>;
}

/// Apple Pay module (iOS only).
pub trait NativeApplePay: Send + Sync {
    /// Prepare the Apple Pay context for an account and currency.
    fn initialize_apple_pay(&self, currency_code: &str, account_id: &str) -> Result<Value>;

    /// Whether the device can present the Apple Pay sheet.
    fn is_apple_pay_available(&self) -> Result<bool>;

    /// Exchange Apple Pay payment data for a Paysafe payment handle.
    fn tokenize_apple_pay(&self, options: &Value) -> Result<Value>;
}

/// Google Pay module (Android only). Also fronts the Android SDK setup calls.
pub trait NativeGooglePay: Send + Sync {
    fn initialize_google_pay(&self, config: &Value) -> Result<Value>;

    fn tokenize_google_pay(&self, options: &Value) -> Result<Value>;

    /// Payment method configuration fetched during initialisation.
    fn google_pay_payment_method_config(&self) -> Result<Value>;

    fn setup_paysafe_sdk(&self, api_key: &str, environment: Environment) -> Result<()>;

    fn is_paysafe_sdk_initialized(&self) -> Result<bool>;

    /// Merchant reference number generated by the native SDK.
    fn merchant_reference_number(&self) -> Result<String>;
}

/// Card payments module (hosted card fields).
pub trait NativeCardPayments: Send + Sync {
    fn initialize_card_payments(&self, account_id: &str) -> Result<Value>;

    fn tokenize_card(&self, options: &Value) -> Result<Value>;
}

/// Venmo module.
pub trait NativeVenmo: Send + Sync {
    fn initialize_venmo(&self, account_id: &str) -> Result<Value>;

    fn tokenize_venmo(&self, options: &Value) -> Result<Value>;
}
