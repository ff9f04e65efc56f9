pub mod account;
pub mod form;
pub mod pix;
pub mod plan;
pub mod ports;
pub mod state;
pub mod validation;
