use clap::Parser;
use glowai_checkout::application::checkout::{CheckoutCoordinator, CheckoutOutcome};
use glowai_checkout::config::CheckoutConfig;
use glowai_checkout::domain::plan::Plan;
use glowai_checkout::infrastructure::in_memory::InMemoryAccountService;
use glowai_checkout::infrastructure::navigator::WatchNavigator;
use glowai_checkout::interfaces::json::checkout_report::{CheckoutReport, ReportWriter};
use glowai_checkout::interfaces::json::checkout_request::CheckoutRequest;
use glowai_checkout::telemetry;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Checkout request JSON file
    input: PathBuf,

    /// Confirm the PIX payment once the code has been issued
    #[arg(long)]
    confirm_pix: bool,

    /// Simulated card payment delay in milliseconds (overrides CHECKOUT_PAYMENT_DELAY_MS)
    #[arg(long)]
    payment_delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init();
    let cli = Cli::parse();

    let mut config = CheckoutConfig::from_env().into_diagnostic()?;
    if let Some(delay_ms) = cli.payment_delay_ms {
        config = config.with_payment_delay(delay_ms);
    }

    let file = File::open(cli.input).into_diagnostic()?;
    let request = CheckoutRequest::from_reader(file).into_diagnostic()?;

    let service = InMemoryAccountService::new();
    let (navigator, navigation) = WatchNavigator::new();
    let plan = Plan::lookup(request.plan.as_deref());
    let checkout =
        CheckoutCoordinator::new(Box::new(service.clone()), Box::new(navigator), plan, config);

    if let Err(e) = checkout.select_payment_method(request.payment_method).await {
        warn!(error = %e, "Ignoring payment method");
    }
    for (name, value) in &request.fields {
        if let Err(e) = checkout.update_field(name, value).await {
            warn!(error = %e, "Ignoring form input");
        }
    }

    // Checkout failures are reported through the final state, not the exit code.
    match checkout.submit().await {
        Ok(CheckoutOutcome::AwaitingPixConfirmation(_)) if cli.confirm_pix => {
            if let Err(e) = checkout.confirm_pix_payment().await {
                warn!(error = %e, "PIX confirmation did not complete");
            }
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "Checkout did not complete"),
    }

    let account_id = navigation.borrow().clone().map(|account| account.id);
    let profile = match account_id {
        Some(id) => service.profile(id).await,
        None => None,
    };
    let state = checkout.state().await;
    let amount = match state.pix_payload() {
        Some(payload) => payload.display_amount(),
        None => plan.monthly_price.to_brl(),
    };
    let report = CheckoutReport {
        plan: plan.id,
        amount,
        summary: plan.order_summary(),
        state,
        account_id,
        profile,
    };

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_report(&report).into_diagnostic()?;

    Ok(())
}
