use crate::domain::account::{AccountId, Profile};
use crate::domain::plan::{OrderSummary, PlanId};
use crate::domain::state::SubmissionState;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Final view of a checkout run.
#[derive(Debug, Serialize)]
pub struct CheckoutReport {
    pub plan: PlanId,
    pub amount: String,
    pub summary: OrderSummary,
    #[serde(flatten)]
    pub state: SubmissionState,
    pub account_id: Option<AccountId>,
    pub profile: Option<Profile>,
}

/// Writes reports as pretty-printed JSON followed by a newline.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report(&mut self, report: &CheckoutReport) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
