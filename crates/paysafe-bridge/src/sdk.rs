// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Common Paysafe SDK context.
//
// The vendor SDK is a process-wide singleton on both platforms. Here it is an
// explicit value: the app owns a `PaysafeSdk`, passes it to whatever needs
// the active configuration, and calls `reset()` to start over.

use paysafe_core::error::Result;
use paysafe_core::{PaysafeError, Platform, SdkConfig};

use crate::linking::SDK_PACKAGE;
use crate::traits::NativePaysafeSdk;
use crate::unlinked::Unlinked;

pub struct PaysafeSdk {
    platform: Platform,
    native: Box<dyn NativePaysafeSdk>,
    config: Option<SdkConfig>,
}

impl PaysafeSdk {
    /// `native = None` selects the `Unlinked` stand-in.
    pub fn new(platform: Platform, native: Option<Box<dyn NativePaysafeSdk>>) -> Self {
        let native: Box<dyn NativePaysafeSdk> = match native {
            Some(native) => native,
            None => Box::new(Unlinked::new(SDK_PACKAGE, platform)),
        };
        Self {
            platform,
            native,
            config: None,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Validate `config`, hand the credentials to native setup, and keep the
    /// config as the active one.
    pub fn setup(&mut self, config: SdkConfig) -> Result<()> {
        let validation = config.validate();
        if !validation.is_valid {
            return Err(PaysafeError::InvalidConfig(validation.joined()));
        }

        self.native.setup(&config.api_key, config.environment)?;
        tracing::info!(
            environment = config.environment.as_str(),
            platform = %self.platform,
            "Paysafe SDK set up"
        );
        self.config = Some(config);
        Ok(())
    }

    /// True once `setup` succeeded here and the native SDK agrees.
    pub fn is_initialized(&self) -> Result<bool> {
        let native = self.native.is_initialized()?;
        Ok(native && self.config.is_some())
    }

    pub fn config(&self) -> Option<&SdkConfig> {
        self.config.as_ref()
    }

    /// The active config, or `NotInitialized`.
    pub fn require_config(&self) -> Result<&SdkConfig> {
        self.config.as_ref().ok_or(PaysafeError::NotInitialized)
    }

    /// Forget the active configuration.
    pub fn reset(&mut self) {
        if self.config.take().is_some() {
            tracing::debug!("Paysafe SDK reset");
        }
    }
}
