// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tokenize request validation.
//
// Requests arrive untyped (they come from JavaScript), so every check works
// on `serde_json::Value` and reports wrong types as ordinary failures.
// Checks never short-circuit each other; the order of the resulting
// messages is fixed (merchantRefNum, transactionType, applePay).

use paysafe_core::{TransactionType, ValidationResult, is_country_code, is_currency_code};
use serde_json::Value;

use crate::normalize::is_truthy;

/// Longest accepted merchant reference number, in UTF-16 code units.
pub const MAX_MERCHANT_REF_NUM_LEN: usize = 255;

pub const MERCHANT_REF_NUM_REQUIRED: &str = "merchantRefNum is required and must be a string";
pub const MERCHANT_REF_NUM_TOO_LONG: &str = "merchantRefNum must be 255 characters or less";
pub const TRANSACTION_TYPE_REQUIRED: &str = "transactionType is required";
pub const TRANSACTION_TYPE_INVALID: &str = "transactionType must be either PAYMENT or VERIFICATION";
pub const APPLE_PAY_REQUIRED: &str = "applePay configuration is required";
pub const MERCHANT_ID_INVALID: &str =
    "applePay.merchantId is required and must start with \"merchant.\"";
pub const COUNTRY_CODE_INVALID: &str =
    "applePay.countryCode must be a 2-letter uppercase ISO country code";
pub const CURRENCY_CODE_INVALID: &str =
    "applePay.currencyCode must be a 3-letter uppercase ISO currency code";
pub const PAYMENT_DATA_INVALID: &str =
    "applePay.paymentData is required and must be a non-empty string";

/// Validate an Apple Pay tokenize request before it is handed to native code.
///
/// Never fails: problems are returned as data so the caller decides whether
/// to proceed.
pub fn validate_tokenize_options(options: &Value) -> ValidationResult {
    let mut errors = Vec::new();

    validate_merchant_ref_num(options.get("merchantRefNum"), &mut errors);
    validate_transaction_type(options.get("transactionType"), &mut errors);
    validate_apple_pay(options.get("applePay"), &mut errors);

    ValidationResult::from_errors(errors)
}

/// An empty string fails the "required" check and never reaches a separate
/// emptiness message.
pub fn validate_merchant_ref_num(value: Option<&Value>, errors: &mut Vec<String>) {
    match value {
        Some(Value::String(s)) if !s.is_empty() => {
            if s.encode_utf16().count() > MAX_MERCHANT_REF_NUM_LEN {
                errors.push(MERCHANT_REF_NUM_TOO_LONG.to_owned());
            }
        }
        _ => errors.push(MERCHANT_REF_NUM_REQUIRED.to_owned()),
    }
}

pub fn validate_transaction_type(value: Option<&Value>, errors: &mut Vec<String>) {
    let Some(value) = value.filter(|v| is_truthy(v)) else {
        errors.push(TRANSACTION_TYPE_REQUIRED.to_owned());
        return;
    };
    let known = value
        .as_str()
        .and_then(TransactionType::from_keyword)
        .is_some();
    if !known {
        errors.push(TRANSACTION_TYPE_INVALID.to_owned());
    }
}

fn validate_apple_pay(value: Option<&Value>, errors: &mut Vec<String>) {
    let Some(apple_pay) = value.filter(|v| is_truthy(v)) else {
        errors.push(APPLE_PAY_REQUIRED.to_owned());
        return;
    };

    let field = |name: &str| apple_pay.get(name).and_then(Value::as_str);

    if !field("merchantId").is_some_and(|id| id.starts_with("merchant.")) {
        errors.push(MERCHANT_ID_INVALID.to_owned());
    }
    if !field("countryCode").is_some_and(is_country_code) {
        errors.push(COUNTRY_CODE_INVALID.to_owned());
    }
    if !field("currencyCode").is_some_and(is_currency_code) {
        errors.push(CURRENCY_CODE_INVALID.to_owned());
    }
    if !field("paymentData").is_some_and(|data| !data.trim().is_empty()) {
        errors.push(PAYMENT_DATA_INVALID.to_owned());
    }
}
