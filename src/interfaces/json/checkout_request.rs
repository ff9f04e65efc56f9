use crate::domain::form::PaymentMethod;
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// A scripted checkout: the plan query value, the chosen method and the raw
/// values typed into each form field, in order.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub fields: Vec<(String, String)>,
}

impl CheckoutRequest {
    /// Reads a request from any JSON source (file, stdin).
    pub fn from_reader(source: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(source)?)
    }
}
