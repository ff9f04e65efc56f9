//! Application layer containing the checkout orchestration.
//!
//! This module defines the `CheckoutCoordinator`, which owns a customer's
//! checkout session and sequences account creation and subscription
//! activation against the injected account service.

pub mod checkout;
