// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Apple Pay facade.
//
// Off iOS every call fails with `APPLE_PAY_IOS_ONLY` before validation or
// any native call.

use paysafe_core::error::Result;
use paysafe_core::{NormalizedResult, PaysafeError, Platform, TokenizeOptions};
use paysafe_validation::normalize::{APPLE_PAY_FAILURE_DETAILS, rewrap_native_outcome};
use paysafe_validation::validate_tokenize_options;
use serde_json::Value;

use crate::linking::{APPLE_PAY_IOS_ONLY, APPLE_PAY_PACKAGE};
use crate::sdk::PaysafeSdk;
use crate::traits::NativeApplePay;
use crate::unlinked::Unlinked;

pub struct ApplePay {
    platform: Platform,
    native: Box<dyn NativeApplePay>,
}

impl ApplePay {
    /// `native = None` selects the `Unlinked` stand-in.
    pub fn new(platform: Platform, native: Option<Box<dyn NativeApplePay>>) -> Self {
        let native: Box<dyn NativeApplePay> = match native {
            Some(native) => native,
            None => Box::new(Unlinked::new(APPLE_PAY_PACKAGE, platform)),
        };
        Self { platform, native }
    }

    fn ensure_ios(&self) -> Result<()> {
        if self.platform == Platform::Ios {
            Ok(())
        } else {
            Err(PaysafeError::PlatformUnsupported(APPLE_PAY_IOS_ONLY))
        }
    }

    pub fn initialize(&self, currency_code: &str, account_id: &str) -> Result<Value> {
        self.ensure_ios()?;
        self.native.initialize_apple_pay(currency_code, account_id)
    }

    /// Initialize from the SDK's active configuration.
    pub fn initialize_with(&self, sdk: &PaysafeSdk) -> Result<Value> {
        self.ensure_ios()?;
        let config = sdk.require_config()?;
        let account_id = config.account_id.as_deref().unwrap_or_default();
        self.initialize(&config.currency_code, account_id)
    }

    pub fn is_available(&self) -> Result<bool> {
        self.ensure_ios()?;
        self.native.is_apple_pay_available()
    }

    /// Validate `options`, tokenize natively, and normalize the response.
    ///
    /// Invalid options fail with `InvalidOptions`. A native `Error` becomes a
    /// failed `NormalizedResult`; other native failures propagate.
    pub fn tokenize(&self, options: &Value) -> Result<NormalizedResult> {
        self.ensure_ios()?;

        let validation = validate_tokenize_options(options);
        if !validation.is_valid {
            return Err(PaysafeError::InvalidOptions(validation.joined()));
        }

        tracing::debug!(
            merchant_ref_num = options["merchantRefNum"].as_str().unwrap_or_default(),
            "tokenizing Apple Pay payment"
        );
        let result = rewrap_native_outcome(
            self.native.tokenize_apple_pay(options),
            APPLE_PAY_FAILURE_DETAILS,
        )?;
        if let Some(error) = &result.error {
            tracing::warn!(code = %error.code, message = %error.message, "Apple Pay tokenization failed");
        }
        Ok(result)
    }

    /// Typed convenience over `tokenize`.
    pub fn tokenize_request(&self, options: &TokenizeOptions) -> Result<NormalizedResult> {
        self.tokenize(&options.to_value()?)
    }
}
