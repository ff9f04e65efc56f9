use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 16 digits plus three separating spaces.
pub const MAX_CARD_NUMBER_LEN: usize = 19;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Pix,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => f.write_str("card"),
            PaymentMethod::Pix => f.write_str("pix"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    CardNumber,
    CardName,
    ExpiryDate,
    Cvv,
}

impl FromStr for FormField {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fullName" => Ok(FormField::FullName),
            "email" => Ok(FormField::Email),
            "password" => Ok(FormField::Password),
            "confirmPassword" => Ok(FormField::ConfirmPassword),
            "cardNumber" => Ok(FormField::CardNumber),
            "cardName" => Ok(FormField::CardName),
            "expiryDate" => Ok(FormField::ExpiryDate),
            "cvv" => Ok(FormField::Cvv),
            other => Err(CheckoutError::UnknownField(other.to_string())),
        }
    }
}

/// Everything the customer types on the checkout page.
///
/// Card fields are kept even while PIX is selected; they are simply ignored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub card_number: String,
    pub card_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl CheckoutForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw input value, applying the display formatting of the field.
    pub fn update(&mut self, field: FormField, value: &str) {
        match field {
            FormField::FullName => self.full_name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Password => self.password = value.to_string(),
            FormField::ConfirmPassword => self.confirm_password = value.to_string(),
            FormField::CardNumber => self.card_number = format_card_number(value),
            FormField::CardName => self.card_name = value.to_string(),
            FormField::ExpiryDate => self.expiry_date = format_expiry_date(value),
            FormField::Cvv => self.cvv = value.to_string(),
        }
    }
}

/// Groups the card number into blocks of four, e.g. `4111 1111 1111 1111`.
pub fn format_card_number(value: &str) -> String {
    let cleaned: Vec<char> = value.chars().filter(|c| !c.is_whitespace()).collect();
    cleaned
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(MAX_CARD_NUMBER_LEN)
        .collect()
}

/// Progressive `MM/YY` formatting: the slash appears once two digits are typed.
pub fn format_expiry_date(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() >= 2 {
        let year: String = digits[2..].chars().take(2).collect();
        format!("{}/{}", &digits[..2], year)
    } else {
        digits
    }
}
