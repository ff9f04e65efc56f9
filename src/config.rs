use crate::domain::pix::PixMerchant;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_PAYMENT_DELAY_MS: u64 = 2000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CheckoutConfig {
    /// Stand-in for the card gateway round trip.
    pub payment_delay_ms: u64,
    pub pix_merchant: PixMerchant,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            payment_delay_ms: DEFAULT_PAYMENT_DELAY_MS,
            pix_merchant: PixMerchant::default(),
        }
    }
}

impl CheckoutConfig {
    /// Builds the configuration from `CHECKOUT_PAYMENT_DELAY_MS`,
    /// `PIX_MERCHANT_NAME` and `PIX_MERCHANT_CITY`, defaulting anything unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("CHECKOUT_PAYMENT_DELAY_MS") {
            config.payment_delay_ms = raw.trim().parse().map_err(|_| {
                CheckoutError::Config(format!(
                    "CHECKOUT_PAYMENT_DELAY_MS '{raw}' is not a number of milliseconds"
                ))
            })?;
        }

        if let Some(name) = lookup("PIX_MERCHANT_NAME") {
            config.pix_merchant.name = non_empty("PIX_MERCHANT_NAME", name)?;
        }

        if let Some(city) = lookup("PIX_MERCHANT_CITY") {
            config.pix_merchant.city = non_empty("PIX_MERCHANT_CITY", city)?;
        }

        Ok(config)
    }

    pub fn with_payment_delay(mut self, delay_ms: u64) -> Self {
        self.payment_delay_ms = delay_ms;
        self
    }

    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }
}

fn non_empty(key: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > 99 {
        return Err(CheckoutError::Config(format!(
            "{key} must be between 1 and 99 characters"
        )));
    }
    Ok(trimmed.to_string())
}
