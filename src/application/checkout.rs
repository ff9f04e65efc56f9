use crate::config::CheckoutConfig;
use crate::domain::account::{Account, SubscriptionStatus};
use crate::domain::form::{CheckoutForm, FormField, PaymentMethod};
use crate::domain::pix::PixPayload;
use crate::domain::plan::Plan;
use crate::domain::ports::{AccountServiceBox, NavigatorBox};
use crate::domain::state::SubmissionState;
use crate::domain::validation::validate;
use crate::error::{CheckoutError, Result, ServiceError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// What a successful `submit` or `confirm_pix_payment` led to.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Account created and subscription active; the customer was sent to the
    /// authenticated area.
    Completed(Account),
    /// A PIX code was issued. Nothing exists on the backend yet.
    AwaitingPixConfirmation(PixPayload),
}

#[derive(Debug, Default)]
struct Session {
    form: CheckoutForm,
    payment_method: PaymentMethod,
    state: SubmissionState,
}

/// Drives one customer's checkout from form entry to an active subscription.
///
/// The coordinator owns the form, the payment method and the submission
/// state. The account backend and the navigation signal are injected, so the
/// same flow runs against the hosted provider or an in-memory fake.
///
/// Account creation always precedes subscription activation, and a failed
/// activation is not rolled back: the account stays on the free plan.
pub struct CheckoutCoordinator {
    account_service: AccountServiceBox,
    navigator: NavigatorBox,
    config: CheckoutConfig,
    plan: &'static Plan,
    session: Mutex<Session>,
    busy: AtomicBool,
}

/// Clears the busy flag when dropped, including when the in-flight future
/// is abandoned.
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl CheckoutCoordinator {
    /// Creates a coordinator for `plan` with an empty form and card selected.
    ///
    /// # Arguments
    ///
    /// * `account_service` - Backend used to sign up and activate subscriptions.
    /// * `navigator` - Receives the "proceed to authenticated area" signal.
    /// * `plan` - The plan being purchased, usually from [`Plan::lookup`].
    /// * `config` - Payment delay and PIX merchant data.
    pub fn new(
        account_service: AccountServiceBox,
        navigator: NavigatorBox,
        plan: &'static Plan,
        config: CheckoutConfig,
    ) -> Self {
        Self {
            account_service,
            navigator,
            config,
            plan,
            session: Mutex::new(Session::default()),
            busy: AtomicBool::new(false),
        }
    }

    pub fn plan(&self) -> &'static Plan {
        self.plan
    }

    /// True while a submission or PIX confirmation is in flight. The submit
    /// control must be disabled while this holds.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub async fn state(&self) -> SubmissionState {
        self.session.lock().await.state.clone()
    }

    pub async fn form(&self) -> CheckoutForm {
        self.session.lock().await.form.clone()
    }

    pub async fn payment_method(&self) -> PaymentMethod {
        self.session.lock().await.payment_method
    }

    /// Switches the payment method. Card fields already typed are kept.
    ///
    /// Refused while a submission is in flight or a PIX code is outstanding.
    pub async fn select_payment_method(&self, method: PaymentMethod) -> Result<()> {
        let mut session = self.session.lock().await;
        self.ensure_editable(&session)?;
        debug!(from = %session.payment_method, to = %method, "Payment method selected");
        session.payment_method = method;
        Ok(())
    }

    /// Stores a field by its form name (`cardNumber`, `expiryDate`, ...).
    ///
    /// Formatting is applied here; validation waits until submission. The form
    /// is frozen while a submission is in flight or a PIX code is outstanding,
    /// so confirmation always sends the data that was validated.
    pub async fn update_field(&self, name: &str, value: &str) -> Result<()> {
        let field: FormField = name.parse()?;
        let mut session = self.session.lock().await;
        self.ensure_editable(&session)?;
        session.form.update(field, value);
        Ok(())
    }

    /// Validates the form and starts payment.
    ///
    /// With PIX this only issues a code and waits for
    /// [`confirm_pix_payment`](Self::confirm_pix_payment). With a card the
    /// account is created, payment is simulated and the subscription is
    /// activated in this call.
    pub async fn submit(&self) -> Result<CheckoutOutcome> {
        let _busy = self.acquire()?;

        let (form, method) = {
            let mut session = self.session.lock().await;
            session.state = SubmissionState::Submitting;
            (session.form.clone(), session.payment_method)
        };
        info!(plan = %self.plan.id, method = %method, "Checkout submitted");

        if let Err(e) = validate(&form, method) {
            return Err(self.fail(e.into()).await);
        }

        match method {
            PaymentMethod::Pix => {
                let payload =
                    PixPayload::generate(self.plan.monthly_price, &self.config.pix_merchant);
                info!(amount = %payload.amount, "PIX code issued, awaiting confirmation");
                self.session.lock().await.state =
                    SubmissionState::PixAwaitingConfirmation(payload.clone());
                Ok(CheckoutOutcome::AwaitingPixConfirmation(payload))
            }
            PaymentMethod::Card => {
                let result = self
                    .create_and_activate(&form, self.config.payment_delay())
                    .await;
                self.finish(result).await
            }
        }
    }

    /// Completes a PIX checkout after the customer says they paid.
    ///
    /// The payment itself is not verified.
    pub async fn confirm_pix_payment(&self) -> Result<CheckoutOutcome> {
        let _busy = self.acquire()?;

        let form = {
            let session = self.session.lock().await;
            if session.state.pix_payload().is_none() {
                return Err(CheckoutError::InvalidState(session.state.name()));
            }
            session.form.clone()
        };
        info!(plan = %self.plan.id, "PIX payment confirmed by customer");

        let result = self.create_and_activate(&form, Duration::ZERO).await;
        self.finish(result).await
    }

    /// Leaves the PIX screen and drops the issued code. The form is kept.
    pub async fn return_from_pix(&self) -> Result<()> {
        let _busy = self.acquire()?;

        let mut session = self.session.lock().await;
        if session.state.pix_payload().is_none() {
            return Err(CheckoutError::InvalidState(session.state.name()));
        }
        session.state = SubmissionState::Idle;
        Ok(())
    }

    /// Checked under the session lock: `submit` takes the busy flag before it
    /// locks the session, so an edit either lands before the form is read or
    /// is refused.
    fn ensure_editable(&self, session: &Session) -> Result<()> {
        if self.is_busy() {
            return Err(CheckoutError::Busy);
        }
        if session.state.pix_payload().is_some() {
            return Err(CheckoutError::InvalidState(session.state.name()));
        }
        Ok(())
    }

    fn acquire(&self) -> Result<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| CheckoutError::Busy)?;
        Ok(BusyGuard(&self.busy))
    }

    async fn create_and_activate(&self, form: &CheckoutForm, delay: Duration) -> Result<Account> {
        let account = self
            .account_service
            .create_account(&form.email, &form.password, &form.full_name)
            .await
            .map_err(CheckoutError::AccountCreation)?
            .ok_or_else(|| {
                CheckoutError::AccountCreation(ServiceError::new("failed to create account"))
            })?;
        info!(account_id = %account.id, "Account created");

        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Simulating card payment");
            tokio::time::sleep(delay).await;
        }

        if let Err(e) = self
            .account_service
            .activate_subscription(account.id, self.plan.id, SubscriptionStatus::Active)
            .await
        {
            warn!(
                account_id = %account.id,
                error = %e,
                "Subscription activation failed, account left on the free plan"
            );
            return Err(CheckoutError::SubscriptionUpdate(e));
        }
        info!(account_id = %account.id, plan = %self.plan.id, "Subscription activated");

        Ok(account)
    }

    async fn finish(&self, result: Result<Account>) -> Result<CheckoutOutcome> {
        match result {
            Ok(account) => {
                {
                    let mut session = self.session.lock().await;
                    session.form = CheckoutForm::new();
                    session.state = SubmissionState::Idle;
                }
                self.navigator.navigate_to_authenticated_area(&account);
                Ok(CheckoutOutcome::Completed(account))
            }
            Err(e) => Err(self.fail(e).await),
        }
    }

    async fn fail(&self, error: CheckoutError) -> CheckoutError {
        let message = error.user_message();
        match &error {
            CheckoutError::Validation(_) => info!(%message, "Checkout form rejected"),
            _ => warn!(error = %error, "Checkout failed"),
        }
        self.session.lock().await.state = SubmissionState::Error(message);
        error
    }
}
