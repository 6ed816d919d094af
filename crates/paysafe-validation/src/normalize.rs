// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native tokenize payloads -> `NormalizedResult`.
//
// Native modules send back partial, loosely typed objects. Whatever arrives,
// callers get a fully populated result: missing fields are defaulted, and a
// payload that is not an object at all is a failed tokenization.

use paysafe_core::error::{PaysafeError, Result};
use paysafe_core::{NativeError, NormalizedResult};
use serde_json::Value;

pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
pub const TOKENIZATION_FAILED: &str = "TOKENIZATION_FAILED";
pub const INVALID_NATIVE_RESPONSE: &str = "Invalid response from native module";
pub const APPLE_PAY_FAILURE_DETAILS: &str = "Failed to tokenize Apple Pay payment data";

/// Normalize an Apple Pay tokenize response.
pub fn normalize_tokenize_result(response: &Value) -> NormalizedResult {
    normalize_with_details(response, APPLE_PAY_FAILURE_DETAILS)
}

/// Normalize a tokenize response; `failure_details` fills the `details` of
/// the failure produced for a non-object response.
pub fn normalize_with_details(response: &Value, failure_details: &str) -> NormalizedResult {
    if !response.is_object() {
        return NormalizedResult::failure(
            TOKENIZATION_FAILED,
            INVALID_NATIVE_RESPONSE,
            failure_details,
        );
    }

    let error = response
        .get("error")
        .filter(|e| is_truthy(e))
        .map(|e| NativeError {
            code: string_or(e.get("code"), UNKNOWN_ERROR_CODE),
            message: string_or(e.get("message"), UNKNOWN_ERROR_MESSAGE),
            details: e.get("details").filter(|d| !d.is_null()).cloned(),
        });

    NormalizedResult {
        token: string_or(response.get("token"), ""),
        is_success: response.get("isSuccess").is_some_and(is_truthy),
        error,
    }
}

/// Turn the outcome of a native tokenize call into data where possible.
///
/// A native `Error` becomes a failed result carrying its message. Every
/// other error, including a non-`Error` value thrown natively and a missing
/// native module, propagates unchanged.
pub fn rewrap_native_outcome(
    outcome: Result<Value>,
    failure_details: &str,
) -> Result<NormalizedResult> {
    match outcome {
        Ok(response) => Ok(normalize_with_details(&response, failure_details)),
        Err(PaysafeError::Native { message, .. }) => Ok(NormalizedResult::failure(
            TOKENIZATION_FAILED,
            message,
            failure_details,
        )),
        Err(other) => Err(other),
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `value ?? default`, rendered as a string.
fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_response_is_failed_tokenization() {
        let result = normalize_tokenize_result(&Value::Null);
        assert_eq!(
            result,
            NormalizedResult {
                token: String::new(),
                is_success: false,
                error: Some(NativeError {
                    code: "TOKENIZATION_FAILED".into(),
                    message: "Invalid response from native module".into(),
                    details: Some(json!("Failed to tokenize Apple Pay payment data")),
                }),
            }
        );
    }

    #[test]
    fn scalar_and_array_responses_are_failures() {
        for response in [json!("tok"), json!(1), json!([{"token": "t"}])] {
            let result = normalize_tokenize_result(&response);
            assert!(!result.is_success);
            assert_eq!(result.error.unwrap().message, INVALID_NATIVE_RESPONSE);
        }
    }

    #[test]
    fn missing_token_defaults_to_empty() {
        let result = normalize_tokenize_result(&json!({ "isSuccess": true }));
        assert_eq!(
            result,
            NormalizedResult {
                token: String::new(),
                is_success: true,
                error: None,
            }
        );
    }

    #[test]
    fn empty_object_is_unsuccessful() {
        let result = normalize_tokenize_result(&json!({}));
        assert_eq!(result, NormalizedResult::default());
    }

    #[test]
    fn success_flag_follows_truthiness() {
        for (flag, expected) in [
            (json!(1), true),
            (json!("yes"), true),
            (json!(0), false),
            (json!(""), false),
            (json!(null), false),
            (json!(false), false),
        ] {
            let result = normalize_tokenize_result(&json!({ "isSuccess": flag }));
            assert_eq!(result.is_success, expected, "{flag}");
        }
    }

    #[test]
    fn partial_error_block_gets_defaults() {
        let result = normalize_tokenize_result(&json!({
            "token": "",
            "isSuccess": false,
            "error": {},
        }));
        let error = result.error.unwrap();
        assert_eq!(error.code, UNKNOWN_ERROR_CODE);
        assert_eq!(error.message, UNKNOWN_ERROR_MESSAGE);
        assert_eq!(error.details, None);
    }

    #[test]
    fn full_error_block_is_copied() {
        let result = normalize_tokenize_result(&json!({
            "token": "",
            "isSuccess": false,
            "error": {
                "code": "5068",
                "message": "Field error(s)",
                "details": { "field": "merchantRefNum" },
            },
        }));
        let error = result.error.unwrap();
        assert_eq!(error.code, "5068");
        assert_eq!(error.message, "Field error(s)");
        assert_eq!(error.details, Some(json!({ "field": "merchantRefNum" })));
    }

    #[test]
    fn token_is_copied() {
        let result = normalize_tokenize_result(&json!({
            "token": "Cxc8Mjgf5Mpf3Rm",
            "isSuccess": true,
        }));
        assert_eq!(result.token, "Cxc8Mjgf5Mpf3Rm");
        assert!(result.is_success);
        assert!(result.error.is_none());
    }

    #[test]
    fn native_error_is_rewrapped() {
        let outcome = Err(PaysafeError::native("Payment sheet dismissed"));
        let result = rewrap_native_outcome(outcome, APPLE_PAY_FAILURE_DETAILS).unwrap();
        assert_eq!(
            result,
            NormalizedResult::failure(
                TOKENIZATION_FAILED,
                "Payment sheet dismissed",
                APPLE_PAY_FAILURE_DETAILS,
            )
        );
    }

    #[test]
    fn non_error_throw_propagates_unchanged() {
        let outcome = Err(PaysafeError::NativeThrow(json!("plain string")));
        match rewrap_native_outcome(outcome, APPLE_PAY_FAILURE_DETAILS) {
            Err(PaysafeError::NativeThrow(value)) => assert_eq!(value, json!("plain string")),
            other => panic!("expected NativeThrow, got {other:?}"),
        }
    }

    #[test]
    fn null_outcome_uses_supplied_details() {
        let result = rewrap_native_outcome(Ok(Value::Null), "Failed to tokenize Venmo payment data")
            .unwrap();
        let error = result.error.unwrap();
        assert_eq!(error.message, INVALID_NATIVE_RESPONSE);
        assert_eq!(
            error.details,
            Some(json!("Failed to tokenize Venmo payment data"))
        );
    }
}
