// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Venmo facade.

use paysafe_core::error::Result;
use paysafe_core::{NormalizedResult, PaysafeError, Platform, ValidationResult};
use paysafe_validation::normalize::rewrap_native_outcome;
use paysafe_validation::options::{validate_merchant_ref_num, validate_transaction_type};
use serde_json::Value;

use crate::linking::VENMO_PACKAGE;
use crate::traits::NativeVenmo;
use crate::unlinked::Unlinked;

pub const VENMO_FAILURE_DETAILS: &str = "Failed to tokenize Venmo payment data";

pub struct Venmo {
    native: Box<dyn NativeVenmo>,
}

impl Venmo {
    /// `native = None` selects the `Unlinked` stand-in.
    pub fn new(platform: Platform, native: Option<Box<dyn NativeVenmo>>) -> Self {
        let native: Box<dyn NativeVenmo> = match native {
            Some(native) => native,
            None => Box::new(Unlinked::new(VENMO_PACKAGE, platform)),
        };
        Self { native }
    }

    pub fn initialize(&self, account_id: &str) -> Result<Value> {
        self.native.initialize_venmo(account_id)
    }

    /// Same merchantRefNum / transactionType rules as Apple Pay, without a
    /// nested wallet block.
    pub fn validate(options: &Value) -> ValidationResult {
        let mut errors = Vec::new();
        validate_merchant_ref_num(options.get("merchantRefNum"), &mut errors);
        validate_transaction_type(options.get("transactionType"), &mut errors);
        ValidationResult::from_errors(errors)
    }

    pub fn tokenize(&self, options: &Value) -> Result<NormalizedResult> {
        let validation = Self::validate(options);
        if !validation.is_valid {
            return Err(PaysafeError::InvalidOptions(validation.joined()));
        }

        tracing::debug!(
            merchant_ref_num = options["merchantRefNum"].as_str().unwrap_or_default(),
            "tokenizing Venmo payment"
        );
        let result = rewrap_native_outcome(self.native.tokenize_venmo(options), VENMO_FAILURE_DETAILS)?;
        if let Some(error) = &result.error {
            tracing::warn!(code = %error.code, message = %error.message, "Venmo tokenization failed");
        }
        Ok(result)
    }
}
