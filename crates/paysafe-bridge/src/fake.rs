// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scripted native module for facade tests.

use std::sync::{Arc, Mutex};

use paysafe_core::error::Result;
use paysafe_core::{Environment, PaysafeError};
use serde_json::{Value, json};

use crate::traits::*;

type Respond = Box<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Implements every native trait. Calls are recorded; tokenize/initialize
/// answers come from `respond`.
pub struct FakeNative {
    respond: Respond,
    calls: CallLog,
    initialized: Mutex<bool>,
}

impl FakeNative {
    pub fn new(respond: impl Fn(&Value) -> Result<Value> + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            calls: CallLog::default(),
            initialized: Mutex::new(false),
        }
    }

    /// Always answers with a successful token.
    pub fn succeeding(token: &str) -> Self {
        let token = token.to_owned();
        Self::new(move |_| Ok(json!({ "token": token, "isSuccess": true })))
    }

    /// Always fails with a native `Error`.
    pub fn failing(message: &str) -> Self {
        let message = message.to_owned();
        Self::new(move |_| Err(PaysafeError::native(message.clone())))
    }

    /// Handle that stays readable after the fake is boxed into a facade.
    pub fn call_log(&self) -> CallLog {
        self.calls.clone()
    }

    fn record(&self, method: &str, args: Value) -> Result<Value> {
        let result = (self.respond)(&args);
        self.calls.push(method, args);
        result
    }

    fn record_unit(&self, method: &str, args: Value) {
        self.calls.push(method, args);
    }

    fn set_initialized(&self) {
        if let Ok(mut flag) = self.initialized.lock() {
            *flag = true;
        }
    }

    fn initialized(&self) -> bool {
        self.initialized.lock().map(|f| *f).unwrap_or(false)
    }
}

/// Shared record of `(method, arguments)` pairs.
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<(String, Value)>>>);

impl CallLog {
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.0.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|(method, _)| method).collect()
    }

    fn push(&self, method: &str, args: Value) {
        if let Ok(mut calls) = self.0.lock() {
            calls.push((method.to_owned(), args));
        }
    }
}

impl NativePaysafeSdk for FakeNative {
    fn setup(&self, api_key: &str, environment: Environment) -> Result<()> {
        self.record_unit("setup", json!([api_key, environment.as_str()]));
        self.set_initialized();
        Ok(())
    }

    fn is_initialized(&self) -> Result<bool> {
        Ok(self.initialized())
    }
}

impl NativeApplePay for FakeNative {
    fn initialize_apple_pay(&self, currency_code: &str, account_id: &str) -> Result<Value> {
        self.record("initializeApplePay", json!([currency_code, account_id]))
    }

    fn is_apple_pay_available(&self) -> Result<bool> {
        Ok(true)
    }

    fn tokenize_apple_pay(&self, options: &Value) -> Result<Value> {
        self.record("tokenizeApplePay", options.clone())
    }
}

impl NativeGooglePay for FakeNative {
    fn initialize_google_pay(&self, config: &Value) -> Result<Value> {
        self.record("initializeGooglePay", config.clone())
    }

    fn tokenize_google_pay(&self, options: &Value) -> Result<Value> {
        self.record("tokenizeGooglePay", options.clone())
    }

    fn google_pay_payment_method_config(&self) -> Result<Value> {
        Ok(json!({ "type": "CARD", "allowedCardNetworks": ["VISA", "MASTERCARD"] }))
    }

    fn setup_paysafe_sdk(&self, api_key: &str, environment: Environment) -> Result<()> {
        self.record_unit("setupPaysafeSdk", json!([api_key, environment.as_str()]));
        self.set_initialized();
        Ok(())
    }

    fn is_paysafe_sdk_initialized(&self) -> Result<bool> {
        Ok(self.initialized())
    }

    fn merchant_reference_number(&self) -> Result<String> {
        Ok("a1b2c3d4e5".into())
    }
}

impl NativeCardPayments for FakeNative {
    fn initialize_card_payments(&self, account_id: &str) -> Result<Value> {
        self.record("initializeCardPayments", json!([account_id]))
    }

    fn tokenize_card(&self, options: &Value) -> Result<Value> {
        self.record("tokenizeCard", options.clone())
    }
}

impl NativeVenmo for FakeNative {
    fn initialize_venmo(&self, account_id: &str) -> Result<Value> {
        self.record("initializeVenmo", json!([account_id]))
    }

    fn tokenize_venmo(&self, options: &Value) -> Result<Value> {
        self.record("tokenizeVenmo", options.clone())
    }
}
