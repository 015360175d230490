//! Tracing setup for the crate.

pub mod init;

pub use init::init_tracing;
