use super::plan::Price;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};

const TOKEN_LEN: usize = 13;
const HEADER: &str = "00020126580014BR.GOV.BCB.PIX0136";
const AMOUNT_PREFIX: &str = "520400005303986540";
const COUNTRY: &str = "5802BR";
const TRAILER: &str = "62070503***6304";

/// Merchant data embedded in generated codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixMerchant {
    pub name: String,
    pub city: String,
}

impl Default for PixMerchant {
    fn default() -> Self {
        Self {
            name: "GLOWAI".to_string(),
            city: "SAO PAULO".to_string(),
        }
    }
}

/// A simulated PIX "copia e cola" code.
///
/// The code looks like a BR Code but is never settled or verified; there is no
/// CRC and no uniqueness guarantee. Every segment is a fixed literal except
/// the random token, the amount and the merchant name and city, whose length
/// prefixes are computed from the configured values (`5906GLOWAI` rather than
/// a hard-coded `5913GLOWAI`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PixPayload {
    pub code: String,
    pub amount: Price,
}

impl PixPayload {
    pub fn generate(amount: Price, merchant: &PixMerchant) -> Self {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(|b| char::from(b).to_ascii_uppercase())
            .collect();
        Self::with_token(&token, amount, merchant)
    }

    fn with_token(token: &str, amount: Price, merchant: &PixMerchant) -> Self {
        let code = format!(
            "{HEADER}{token}{AMOUNT_PREFIX}{}{COUNTRY}{}{}{TRAILER}",
            amount.to_fixed(),
            tlv("59", &merchant.name),
            tlv("60", &merchant.city),
        );
        Self { code, amount }
    }

    /// Amount line for the payment instructions, e.g. `R$ 49,90`.
    pub fn display_amount(&self) -> String {
        self.amount.to_brl()
    }
}

fn tlv(tag: &str, value: &str) -> String {
    format!("{tag}{:02}{value}", value.chars().count())
}
