#![allow(dead_code)]

use async_trait::async_trait;
use glowai_checkout::application::checkout::CheckoutCoordinator;
use glowai_checkout::config::CheckoutConfig;
use glowai_checkout::domain::account::{Account, AccountId, SubscriptionStatus};
use glowai_checkout::domain::plan::{Plan, PlanId};
use glowai_checkout::domain::ports::AccountService;
use glowai_checkout::error::ServiceError;
use glowai_checkout::infrastructure::navigator::WatchNavigator;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateAccount {
        email: String,
        full_name: String,
    },
    ActivateSubscription {
        account_id: AccountId,
        plan: PlanId,
        status: SubscriptionStatus,
    },
}

/// How the fake backend answers `create_account`.
#[derive(Debug, Clone, Default)]
pub enum CreateBehavior {
    #[default]
    Succeed,
    ReturnNone,
    Fail(String),
}

/// Account service fake that records every call in order.
#[derive(Clone, Default)]
pub struct RecordingAccountService {
    calls: Arc<Mutex<Vec<Call>>>,
    create: Arc<Mutex<CreateBehavior>>,
    activate_failure: Arc<Mutex<Option<String>>>,
}

impl RecordingAccountService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create(self, behavior: CreateBehavior) -> Self {
        *self.create.lock().unwrap() = behavior;
        self
    }

    pub fn failing_activation(self, message: &str) -> Self {
        *self.activate_failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_accounts(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::CreateAccount { .. }))
            .count()
    }
}

#[async_trait]
impl AccountService for RecordingAccountService {
    async fn create_account(
        &self,
        email: &str,
        _password: &str,
        full_name: &str,
    ) -> Result<Option<Account>, ServiceError> {
        self.calls.lock().unwrap().push(Call::CreateAccount {
            email: email.to_string(),
            full_name: full_name.to_string(),
        });

        let behavior = self.create.lock().unwrap().clone();
        match behavior {
            CreateBehavior::Succeed => Ok(Some(Account {
                id: AccountId::new(),
                email: email.to_string(),
                full_name: full_name.to_string(),
            })),
            CreateBehavior::ReturnNone => Ok(None),
            CreateBehavior::Fail(message) => Err(ServiceError::new(message)),
        }
    }

    async fn activate_subscription(
        &self,
        account_id: AccountId,
        plan: PlanId,
        status: SubscriptionStatus,
    ) -> Result<(), ServiceError> {
        self.calls.lock().unwrap().push(Call::ActivateSubscription {
            account_id,
            plan,
            status,
        });

        match self.activate_failure.lock().unwrap().clone() {
            Some(message) => Err(ServiceError::new(message)),
            None => Ok(()),
        }
    }
}

pub fn coordinator(
    service: &RecordingAccountService,
    plan: &'static Plan,
) -> (CheckoutCoordinator, watch::Receiver<Option<Account>>) {
    coordinator_with_delay(service, plan, 0)
}

pub fn coordinator_with_delay(
    service: &RecordingAccountService,
    plan: &'static Plan,
    payment_delay_ms: u64,
) -> (CheckoutCoordinator, watch::Receiver<Option<Account>>) {
    let (navigator, navigation) = WatchNavigator::new();
    let checkout = CheckoutCoordinator::new(
        Box::new(service.clone()),
        Box::new(navigator),
        plan,
        CheckoutConfig::default().with_payment_delay(payment_delay_ms),
    );
    (checkout, navigation)
}

pub async fn fill_personal(checkout: &CheckoutCoordinator) {
    for (name, value) in [
        ("fullName", "Ana Souza"),
        ("email", "ana@example.com"),
        ("password", "secret1"),
        ("confirmPassword", "secret1"),
    ] {
        checkout.update_field(name, value).await.unwrap();
    }
}

pub async fn fill_card(checkout: &CheckoutCoordinator) {
    for (name, value) in [
        ("cardNumber", "4111111111111111"),
        ("cardName", "ANA SOUZA"),
        ("expiryDate", "1230"),
        ("cvv", "123"),
    ] {
        checkout.update_field(name, value).await.unwrap();
    }
}
