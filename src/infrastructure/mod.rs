//! Adapters for the domain ports: an in-memory account backend and a
//! channel-based navigation signal.

pub mod in_memory;
pub mod navigator;
