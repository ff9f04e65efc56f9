use super::form::{CheckoutForm, PaymentMethod};
use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Checks the form at submission time. Rules run in order and the first
/// failure is returned.
///
/// Only presence is checked for card data; number, expiry and CVV formats
/// are not verified.
pub fn validate(form: &CheckoutForm, method: PaymentMethod) -> Result<(), ValidationError> {
    if form.full_name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingRequiredFields);
    }

    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }

    if method == PaymentMethod::Card
        && (form.card_number.is_empty()
            || form.card_name.is_empty()
            || form.expiry_date.is_empty()
            || form.cvv.is_empty())
    {
        return Err(ValidationError::MissingCardFields);
    }

    Ok(())
}
