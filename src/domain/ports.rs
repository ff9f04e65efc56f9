use super::account::{Account, AccountId, SubscriptionStatus};
use super::plan::PlanId;
use crate::error::ServiceError;
use async_trait::async_trait;

/// The account/subscription backend the checkout talks to.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Signs a new customer up. `Ok(None)` means the provider accepted the
    /// request but returned no account.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Option<Account>, ServiceError>;

    async fn activate_subscription(
        &self,
        account_id: AccountId,
        plan: PlanId,
        status: SubscriptionStatus,
    ) -> Result<(), ServiceError>;
}

/// Signal to the presentation layer that checkout finished.
pub trait Navigator: Send + Sync {
    fn navigate_to_authenticated_area(&self, account: &Account);
}

pub type AccountServiceBox = Box<dyn AccountService>;
pub type NavigatorBox = Box<dyn Navigator>;
