// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stand-in for a native module that is not compiled into the app.
//
// Every trait method returns `NotLinked` with the linking message for the
// package it replaces. Facades pick it at construction time when no real
// module is supplied.

use paysafe_core::error::Result;
use paysafe_core::{Environment, PaysafeError, Platform};
use serde_json::Value;

use crate::linking::linking_error;
use crate::traits::*;

/// Module that fails every call with the linking error.
#[derive(Debug, Clone, Copy)]
pub struct Unlinked {
    package: &'static str,
    platform: Platform,
}

impl Unlinked {
    pub fn new(package: &'static str, platform: Platform) -> Self {
        Self { package, platform }
    }

    pub fn package(&self) -> &'static str {
        self.package
    }

    fn fail<T>(&self, method: &str) -> Result<T> {
        tracing::warn!(package = self.package, method, "native module not linked");
        Err(self.error())
    }

    fn error(&self) -> PaysafeError {
        linking_error(self.package, self.platform)
    }
}

impl NativePaysafeSdk for Unlinked {
    fn setup(&self, _api_key: &str, _environment: Environment) -> Result<()> {
        self.fail("setup")
    }

    fn is_initialized(&self) -> Result<bool> {
        self.fail("isInitialized")
    }
}

impl NativeApplePay for Unlinked {
    fn initialize_apple_pay(&self, _currency_code: &str, _account_id: &str) -> Result<Value> {
        self.fail("initialize")
    }

    fn is_apple_pay_available(&self) -> Result<bool> {
        self.fail("isAvailable")
    }

    fn tokenize_apple_pay(&self, _options: &Value) -> Result<Value> {
        self.fail("tokenize")
    }
}

impl NativeGooglePay for Unlinked {
    fn initialize_google_pay(&self, _config: &Value) -> Result<Value> {
        self.fail("initializeGooglePay")
    }

    fn tokenize_google_pay(&self, _options: &Value) -> Result<Value> {
        self.fail("tokenizeGooglePay")
    }

    fn google_pay_payment_method_config(&self) -> Result<Value> {
        self.fail("getPaymentMethodConfig")
    }

    fn setup_paysafe_sdk(&self, _api_key: &str, _environment: Environment) -> Result<()> {
        self.fail("setupPaysafeSdk")
    }

    fn is_paysafe_sdk_initialized(&self) -> Result<bool> {
        self.fail("isPaysafeSdkInitialized")
    }

    fn merchant_reference_number(&self) -> Result<String> {
        self.fail("getMerchantReferenceNumber")
    }
}

impl NativeCardPayments for Unlinked {
    fn initialize_card_payments(&self, _account_id: &str) -> Result<Value> {
        self.fail("initialize")
    }

    fn tokenize_card(&self, _options: &Value) -> Result<Value> {
        self.fail("tokenize")
    }
}

impl NativeVenmo for Unlinked {
    fn initialize_venmo(&self, _account_id: &str) -> Result<Value> {
        self.fail("initialize")
    }

    fn tokenize_venmo(&self, _options: &Value) -> Result<Value> {
        self.fail("tokenize")
    }
}
