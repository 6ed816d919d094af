// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Card payments facade.

use chrono::Local;
use paysafe_core::error::Result;
use paysafe_core::{CardTokenizeOptions, NormalizedResult, PaysafeError, Platform};
use paysafe_validation::card::card_errors;
use paysafe_validation::normalize::rewrap_native_outcome;
use paysafe_validation::options::validate_merchant_ref_num;
use serde_json::Value;

use crate::linking::CARD_PAYMENTS_PACKAGE;
use crate::traits::NativeCardPayments;
use crate::unlinked::Unlinked;

pub use paysafe_validation::card::{validate_card_number, validate_cvv, validate_expiry_date};

pub const CARD_FAILURE_DETAILS: &str = "Failed to tokenize card payment data";

pub struct CardPayments {
    native: Box<dyn NativeCardPayments>,
}

impl CardPayments {
    /// `native = None` selects the `Unlinked` stand-in.
    pub fn new(platform: Platform, native: Option<Box<dyn NativeCardPayments>>) -> Self {
        let native: Box<dyn NativeCardPayments> = match native {
            Some(native) => native,
            None => Box::new(Unlinked::new(CARD_PAYMENTS_PACKAGE, platform)),
        };
        Self { native }
    }

    pub fn initialize(&self, account_id: &str) -> Result<Value> {
        self.native.initialize_card_payments(account_id)
    }

    /// Check every card field, then tokenize natively.
    ///
    /// All failing fields are reported together in one `InvalidCard`.
    pub fn tokenize(&self, options: &CardTokenizeOptions) -> Result<NormalizedResult> {
        let mut errors = Vec::new();
        validate_merchant_ref_num(
            Some(&Value::from(options.merchant_ref_num.as_str())),
            &mut errors,
        );
        errors.extend(card_errors(&options.card, Local::now().date_naive()));
        if !errors.is_empty() {
            return Err(PaysafeError::InvalidCard(errors.join(", ")));
        }

        tracing::debug!(
            merchant_ref_num = %options.merchant_ref_num,
            "tokenizing card payment"
        );
        let payload = serde_json::to_value(options)?;
        let result = rewrap_native_outcome(self.native.tokenize_card(&payload), CARD_FAILURE_DETAILS)?;
        if let Some(error) = &result.error {
            tracing::warn!(code = %error.code, message = %error.message, "card tokenization failed");
        }
        Ok(result)
    }
}
