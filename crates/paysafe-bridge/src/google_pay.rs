// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Google Pay facade.
//
// Off Android the payment calls (`initialize_google_pay`,
// `tokenize_google_pay`, `get_payment_method_config`) quietly return
// `Ok(None)`, while the SDK calls (`setup_paysafe_sdk`,
// `is_paysafe_sdk_initialized`, `get_merchant_reference_number`) fail with
// `ANDROID_ONLY`. Callers depend on the difference per function.

use paysafe_core::error::Result;
use paysafe_core::{NormalizedResult, PaysafeError, Platform, SdkConfig};
use paysafe_validation::normalize::rewrap_native_outcome;
use serde_json::Value;

use crate::linking::{ANDROID_ONLY, GOOGLE_PAY_PACKAGE};
use crate::traits::NativeGooglePay;
use crate::unlinked::Unlinked;

pub const GOOGLE_PAY_FAILURE_DETAILS: &str = "Failed to tokenize Google Pay payment data";

pub struct GooglePay {
    platform: Platform,
    native: Box<dyn NativeGooglePay>,
}

impl GooglePay {
    /// `native = None` selects the `Unlinked` stand-in.
    pub fn new(platform: Platform, native: Option<Box<dyn NativeGooglePay>>) -> Self {
        let native: Box<dyn NativeGooglePay> = match native {
            Some(native) => native,
            None => Box::new(Unlinked::new(GOOGLE_PAY_PACKAGE, platform)),
        };
        Self { platform, native }
    }

    fn is_android(&self) -> bool {
        self.platform == Platform::Android
    }

    fn ensure_android(&self) -> Result<()> {
        if self.is_android() {
            Ok(())
        } else {
            Err(PaysafeError::PlatformUnsupported(ANDROID_ONLY))
        }
    }

    pub fn initialize_google_pay(&self, config: &Value) -> Result<Option<Value>> {
        if !self.is_android() {
            return Ok(None);
        }
        self.native.initialize_google_pay(config).map(Some)
    }

    pub fn tokenize_google_pay(&self, options: &Value) -> Result<Option<NormalizedResult>> {
        if !self.is_android() {
            return Ok(None);
        }
        tracing::debug!(
            merchant_ref_num = options["merchantRefNum"].as_str().unwrap_or_default(),
            "tokenizing Google Pay payment"
        );
        let result = rewrap_native_outcome(
            self.native.tokenize_google_pay(options),
            GOOGLE_PAY_FAILURE_DETAILS,
        )?;
        if let Some(error) = &result.error {
            tracing::warn!(code = %error.code, message = %error.message, "Google Pay tokenization failed");
        }
        Ok(Some(result))
    }

    pub fn get_payment_method_config(&self) -> Result<Option<Value>> {
        if !self.is_android() {
            return Ok(None);
        }
        self.native.google_pay_payment_method_config().map(Some)
    }

    pub fn setup_paysafe_sdk(&self, config: &SdkConfig) -> Result<()> {
        self.ensure_android()?;
        let validation = config.validate();
        if !validation.is_valid {
            return Err(PaysafeError::InvalidConfig(validation.joined()));
        }
        self.native
            .setup_paysafe_sdk(&config.api_key, config.environment)
    }

    pub fn is_paysafe_sdk_initialized(&self) -> Result<bool> {
        self.ensure_android()?;
        self.native.is_paysafe_sdk_initialized()
    }

    pub fn get_merchant_reference_number(&self) -> Result<String> {
        self.ensure_android()?;
        self.native.merchant_reference_number()
    }
}
