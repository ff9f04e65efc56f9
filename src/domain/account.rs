use super::plan::PlanId;
use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier assigned by the account provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The result of a successful sign-up.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Expired,
}

/// Plan recorded on a profile. Accounts start on `Free` until a paid plan is
/// activated.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionPlan {
    #[default]
    Free,
    Basic,
    Premium,
    Pro,
}

impl From<PlanId> for SubscriptionPlan {
    fn from(id: PlanId) -> Self {
        match id {
            PlanId::Basic => SubscriptionPlan::Basic,
            PlanId::Premium => SubscriptionPlan::Premium,
            PlanId::Pro => SubscriptionPlan::Pro,
        }
    }
}

/// Subscription state stored alongside each account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Profile {
    pub id: AccountId,
    pub email: String,
    pub full_name: Option<String>,
    pub subscription_plan: SubscriptionPlan,
    pub subscription_status: Option<SubscriptionStatus>,
    pub subscription_end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(account: &Account, now: DateTime<Utc>) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            full_name: Some(account.full_name.clone()).filter(|name| !name.is_empty()),
            subscription_plan: SubscriptionPlan::Free,
            subscription_status: None,
            subscription_end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets plan and status; the paid period runs one calendar month from `now`.
    pub fn apply_subscription(
        &mut self,
        plan: PlanId,
        status: SubscriptionStatus,
        now: DateTime<Utc>,
    ) {
        self.subscription_plan = plan.into();
        self.subscription_status = Some(status);
        self.subscription_end_date = Some(now.checked_add_months(Months::new(1)).unwrap_or(now));
        self.updated_at = now;
    }

    pub fn is_active(&self) -> bool {
        self.subscription_status == Some(SubscriptionStatus::Active)
    }
}
