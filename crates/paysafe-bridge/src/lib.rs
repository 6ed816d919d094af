// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Paysafe bridges — facades over the native payment modules.
//
// Each facade forwards calls to a native module (Paysafe iOS/Android SDK
// wrappers) and turns whatever comes back into typed results. When a
// module is not compiled into the app, the facade is built over the
// `Unlinked` stand-in and every call fails with the linking message.

pub mod apple_pay;
pub mod card_payments;
pub mod google_pay;
pub mod linking;
pub mod sdk;
pub mod traits;
pub mod unlinked;
pub mod venmo;

#[cfg(test)]
pub(crate) mod fake;

use paysafe_core::Platform;

pub use apple_pay::ApplePay;
pub use card_payments::CardPayments;
pub use google_pay::GooglePay;
pub use sdk::PaysafeSdk;
pub use venmo::Venmo;

/// Native modules available to the app. `None` means not linked.
#[derive(Default)]
pub struct NativeModules {
    pub sdk: Option<Box<dyn traits::NativePaysafeSdk>>,
    pub apple_pay: Option<Box<dyn traits::NativeApplePay>>,
    pub google_pay: Option<Box<dyn traits::NativeGooglePay>>,
    pub card_payments: Option<Box<dyn traits::NativeCardPayments>>,
    pub venmo: Option<Box<dyn traits::NativeVenmo>>,
}

/// Every facade, wired for one platform.
pub struct Bridges {
    pub sdk: PaysafeSdk,
    pub apple_pay: ApplePay,
    pub google_pay: GooglePay,
    pub card_payments: CardPayments,
    pub venmo: Venmo,
}

/// Build the facades for `platform`, substituting the `Unlinked` stand-in
/// for any module that is missing.
pub fn bridges(platform: Platform, modules: NativeModules) -> Bridges {
    Bridges {
        sdk: PaysafeSdk::new(platform, modules.sdk),
        apple_pay: ApplePay::new(platform, modules.apple_pay),
        google_pay: GooglePay::new(platform, modules.google_pay),
        card_payments: CardPayments::new(platform, modules.card_payments),
        venmo: Venmo::new(platform, modules.venmo),
    }
}
