// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Linking and platform messages. The text is checked verbatim by consumers;
// do not reword it.

use paysafe_core::{PaysafeError, Platform};

pub const SDK_PACKAGE: &str = "react-native-paysafe-sdk";
pub const APPLE_PAY_PACKAGE: &str = "react-native-paysafe-apple-pay";
pub const GOOGLE_PAY_PACKAGE: &str = "react-native-paysafe-google-pay";
pub const CARD_PAYMENTS_PACKAGE: &str = "react-native-paysafe-card-payments";
pub const VENMO_PACKAGE: &str = "react-native-paysafe-venmo";

pub const APPLE_PAY_IOS_ONLY: &str = "Apple Pay is only available on iOS devices";
pub const ANDROID_ONLY: &str = "This function is only supported on Android.";

/// Message for a native module that is not compiled into the app.
pub fn linking_error_message(package: &str, platform: Platform) -> String {
    let pod_install = if platform == Platform::Ios {
        "- You have run 'pod install'\n"
    } else {
        ""
    };
    format!(
        "The package '{package}' doesn't seem to be linked. Make sure: \n\n\
         {pod_install}\
         - You rebuilt the app after installing the package\n\
         - You are not using Expo Go\n"
    )
}

pub fn linking_error(package: &str, platform: Platform) -> PaysafeError {
    PaysafeError::NotLinked {
        message: linking_error_message(package, platform),
    }
}
