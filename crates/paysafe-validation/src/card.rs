// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Raw card field checks: number (Luhn), expiry date, CVV.

use chrono::{Datelike, Local, NaiveDate};
use paysafe_core::CardPrimitives;

/// Sandbox card numbers that are always accepted.
pub const TEST_CARD_NUMBERS: [&str; 4] = [
    "4111111111111111",
    "4000000000000002",
    "5555555555554444",
    "5200400000000009",
];

/// Known-bad number rejected regardless of its checksum.
pub const KNOWN_BAD_CARD_NUMBER: &str = "4111111111111112";

/// How far ahead an expiry year may lie.
pub const MAX_EXPIRY_YEARS_AHEAD: i32 = 20;

/// Exactly 16 ASCII digits, then the allow-list, the known-bad number, and
/// finally the Luhn checksum. 15-digit numbers are not accepted.
pub fn validate_card_number(card_number: &str) -> bool {
    if card_number.len() != 16 || !is_ascii_digits(card_number) {
        return false;
    }
    if TEST_CARD_NUMBERS.contains(&card_number) {
        return true;
    }
    if card_number == KNOWN_BAD_CARD_NUMBER {
        return false;
    }
    luhn_checksum(card_number) == 0
}

/// Luhn sum mod 10 over a string of ASCII digits.
fn luhn_checksum(digits: &str) -> u32 {
    let sum: u32 = digits
        .bytes()
        .rev()
        .map(|b| u32::from(b - b'0'))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    sum % 10
}

/// Expiry check against the local wall clock.
pub fn validate_expiry_date(month: &str, year: &str) -> bool {
    validate_expiry_date_on(month, year, Local::now().date_naive())
}

/// Expiry check relative to `today`.
///
/// The current month is still valid; the month before it is not. Years must
/// be written with four digits and lie within `today.year()` to
/// `today.year() + 20`.
pub fn validate_expiry_date_on(month: &str, year: &str, today: NaiveDate) -> bool {
    if !is_ascii_digits(month) || !is_ascii_digits(year) || year.len() != 4 {
        return false;
    }
    let Ok(month) = month.parse::<u32>() else {
        return false;
    };
    let Ok(year) = year.parse::<i32>() else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    let current_year = today.year();
    if year < current_year || year > current_year + MAX_EXPIRY_YEARS_AHEAD {
        return false;
    }
    !(year == current_year && month < today.month())
}

/// Three or four ASCII digits, leading zeros allowed.
pub fn validate_cvv(cvv: &str) -> bool {
    matches!(cvv.len(), 3 | 4) && is_ascii_digits(cvv)
}

/// Every failing card field, in field order.
pub fn card_errors(card: &CardPrimitives, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();
    if !validate_card_number(&card.card_number) {
        errors.push("cardNumber is invalid".to_owned());
    }
    if !validate_expiry_date_on(&card.expiry_month, &card.expiry_year, today) {
        errors.push("expiry date is invalid or in the past".to_owned());
    }
    if !validate_cvv(&card.cvv) {
        errors.push("cvv must be 3 or 4 digits".to_owned());
    }
    errors
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
