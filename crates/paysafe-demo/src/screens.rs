// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Demo screens. Each one reads its input, calls into the bridges, and
// returns what the screen would display as JSON. Bridge errors are part of
// the display, not a failure of the screen.

use std::path::Path;

use anyhow::Context;
use paysafe_bridge::{NativeModules, bridges};
use paysafe_core::{Platform, SdkConfig};
use paysafe_validation::{
    normalize_tokenize_result, validate_card_number, validate_cvv, validate_expiry_date,
    validate_tokenize_options,
};
use serde_json::{Value, json};

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

fn shown<T: serde::Serialize>(
    result: paysafe_core::error::Result<T>,
) -> anyhow::Result<Value> {
    match result {
        Ok(value) => Ok(serde_json::to_value(value)?),
        Err(e) => {
            tracing::warn!(error = %e, "bridge call rejected");
            Ok(json!({ "error": e.to_string() }))
        }
    }
}

pub fn card(number: &str, month: &str, year: &str, cvv: &str) -> Value {
    json!({
        "cardNumber": validate_card_number(number),
        "expiryDate": validate_expiry_date(month, year),
        "cvv": validate_cvv(cvv),
    })
}

pub fn options(path: &Path) -> anyhow::Result<Value> {
    let request = read_json(path)?;
    Ok(serde_json::to_value(validate_tokenize_options(&request))?)
}

pub fn normalize(path: &Path) -> anyhow::Result<Value> {
    let response = read_json(path)?;
    Ok(serde_json::to_value(normalize_tokenize_result(&response))?)
}

pub fn apple_pay(path: &Path, platform: Platform) -> anyhow::Result<Value> {
    let request = read_json(path)?;
    let b = bridges(platform, NativeModules::default());
    shown(b.apple_pay.tokenize(&request))
}

pub fn google_pay(path: &Path, platform: Platform) -> anyhow::Result<Value> {
    let request = read_json(path)?;
    let b = bridges(platform, NativeModules::default());
    shown(b.google_pay.tokenize_google_pay(&request))
}

pub fn config(path: &Path) -> anyhow::Result<Value> {
    let config = SdkConfig::load(path).with_context(|| format!("loading {}", path.display()))?;
    let validation = config.validate();
    Ok(json!({
        "config": config,
        "validation": validation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn json_file(value: &Value) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{value}").unwrap();
        file
    }

    fn apple_pay_request() -> Value {
        json!({
            "merchantRefNum": "demo-0001",
            "transactionType": "PAYMENT",
            "applePay": {
                "merchantId": "merchant.com.example.demo",
                "countryCode": "US",
                "currencyCode": "USD",
                "paymentData": "eyJ2ZXJzaW9uIjoiRUNfdjEifQ==",
            },
        })
    }

    #[test]
    fn card_screen_reports_each_field() {
        let shown = card("4111111111111111", "13", "2030", "12");
        assert_eq!(
            shown,
            json!({ "cardNumber": true, "expiryDate": false, "cvv": false })
        );
    }

    #[test]
    fn options_screen_lists_errors() {
        let file = json_file(&json!({ "merchantRefNum": "", "transactionType": "PAYMENT" }));
        let shown = options(file.path()).unwrap();
        assert_eq!(shown["isValid"], false);
        assert_eq!(
            shown["errors"],
            json!([
                "merchantRefNum is required and must be a string",
                "applePay configuration is required",
            ])
        );
    }

    #[test]
    fn normalize_screen_handles_null() {
        let file = json_file(&Value::Null);
        let shown = normalize(file.path()).unwrap();
        assert_eq!(shown["error"]["code"], "TOKENIZATION_FAILED");
    }

    #[test]
    fn apple_pay_screen_shows_gating_and_linking() {
        let file = json_file(&apple_pay_request());

        let android = apple_pay(file.path(), Platform::Android).unwrap();
        assert_eq!(android["error"], "Apple Pay is only available on iOS devices");

        let ios = apple_pay(file.path(), Platform::Ios).unwrap();
        let message = ios["error"].as_str().unwrap();
        assert!(message.contains("doesn't seem to be linked"));
        assert!(message.contains("pod install"));
    }

    #[test]
    fn google_pay_screen_is_null_off_android() {
        let file = json_file(&json!({ "merchantRefNum": "demo-0001" }));
        assert_eq!(google_pay(file.path(), Platform::Ios).unwrap(), Value::Null);

        let android = google_pay(file.path(), Platform::Android).unwrap();
        assert!(!android["error"].as_str().unwrap().contains("pod install"));
    }

    #[test]
    fn config_screen_validates() {
        let file = json_file(&json!({ "apiKey": "", "currencyCode": "usd" }));
        let shown = config(file.path()).unwrap();
        assert_eq!(shown["validation"]["isValid"], false);
        assert_eq!(shown["config"]["environment"], "TEST");
    }

    #[test]
    fn missing_file_is_a_screen_failure() {
        let dir = tempfile::tempdir().unwrap();
        assert!(options(&dir.path().join("absent.json")).is_err());
    }
}
