// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// paysafe-validation — checks run before a request crosses the bridge and
// normalization applied to whatever comes back.
//
// Everything here is pure: no I/O, no logging, no shared state.

pub mod card;
pub mod normalize;
pub mod options;

pub use card::{validate_card_number, validate_cvv, validate_expiry_date, validate_expiry_date_on};
pub use normalize::{normalize_tokenize_result, rewrap_native_outcome};
pub use options::{validate_merchant_ref_num, validate_tokenize_options, validate_transaction_type};
