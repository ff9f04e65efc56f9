use crate::domain::account::{Account, AccountId, Profile, SubscriptionStatus};
use crate::domain::plan::PlanId;
use crate::domain::ports::AccountService;
use crate::domain::validation::MIN_PASSWORD_LEN;
use crate::error::ServiceError;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// A thread-safe in-memory account backend.
///
/// Mirrors the hosted provider closely enough for local runs and tests:
/// sign-up creates a free profile, emails are unique, and the provider's
/// password policy is enforced. Passwords are not retained.
#[derive(Default, Clone)]
pub struct InMemoryAccountService {
    profiles: Arc<RwLock<HashMap<AccountId, Profile>>>,
}

impl InMemoryAccountService {
    /// Creates a new, empty account service.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn profile(&self, account_id: AccountId) -> Option<Profile> {
        let profiles = self.profiles.read().await;
        profiles.get(&account_id).cloned()
    }

    pub async fn profiles(&self) -> Vec<Profile> {
        let profiles = self.profiles.read().await;
        profiles.values().cloned().collect()
    }
}

#[async_trait]
impl AccountService for InMemoryAccountService {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<Option<Account>, ServiceError> {
        let email = email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(ServiceError::new(
                "Unable to validate email address: invalid format",
            ));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ServiceError::new(format!(
                "Password should be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let mut profiles = self.profiles.write().await;
        if profiles.values().any(|profile| profile.email == email) {
            return Err(ServiceError::new("User already registered"));
        }

        let account = Account {
            id: AccountId::new(),
            email,
            full_name: full_name.to_string(),
        };
        profiles.insert(account.id, Profile::new(&account, Utc::now()));
        debug!(account_id = %account.id, "Profile created");

        Ok(Some(account))
    }

    async fn activate_subscription(
        &self,
        account_id: AccountId,
        plan: PlanId,
        status: SubscriptionStatus,
    ) -> Result<(), ServiceError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles
            .get_mut(&account_id)
            .ok_or_else(|| ServiceError::new("profile not found"))?;
        profile.apply_subscription(plan, status, Utc::now());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::SubscriptionPlan;

    #[tokio::test]
    async fn test_sign_up_creates_free_profile() {
        let service = InMemoryAccountService::new();
        let account = service
            .create_account("Ana@Example.com", "secret1", "Ana Souza")
            .await
            .unwrap()
            .unwrap();

        let profile = service.profile(account.id).await.unwrap();
        assert_eq!(profile.email, "ana@example.com");
        assert_eq!(profile.full_name.as_deref(), Some("Ana Souza"));
        assert_eq!(profile.subscription_plan, SubscriptionPlan::Free);
        assert_eq!(profile.subscription_status, None);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let service = InMemoryAccountService::new();
        service
            .create_account("ana@example.com", "secret1", "Ana")
            .await
            .unwrap();

        let err = service
            .create_account("ANA@example.com", "secret2", "Ana")
            .await
            .unwrap_err();
        assert_eq!(err.message, "User already registered");
        assert_eq!(service.profiles().await.len(), 1);
    }

    #[tokio::test]
    async fn test_password_policy() {
        let service = InMemoryAccountService::new();
        let err = service
            .create_account("ana@example.com", "123", "Ana")
            .await
            .unwrap_err();
        assert!(err.message.contains("at least 6"));
    }

    #[tokio::test]
    async fn test_activate_subscription() {
        let service = InMemoryAccountService::new();
        let account = service
            .create_account("ana@example.com", "secret1", "Ana")
            .await
            .unwrap()
            .unwrap();

        service
            .activate_subscription(account.id, PlanId::Basic, SubscriptionStatus::Active)
            .await
            .unwrap();

        let profile = service.profile(account.id).await.unwrap();
        assert_eq!(profile.subscription_plan, SubscriptionPlan::Basic);
        assert!(profile.is_active());
        assert!(profile.subscription_end_date.unwrap() > profile.created_at);
    }

    #[tokio::test]
    async fn test_activate_unknown_account() {
        let service = InMemoryAccountService::new();
        let result = service
            .activate_subscription(AccountId::new(), PlanId::Pro, SubscriptionStatus::Active)
            .await;
        assert!(result.is_err());
    }
}
