pub mod checkout_report;
pub mod checkout_request;
