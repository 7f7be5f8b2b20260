//! tenencias — brokerage holdings monitor.
//!
//! Hexagonal architecture: the holdings pipeline in [`domain`], port traits
//! for the external collaborators in [`ports`], concrete implementations in
//! [`adapters`], and the cycle scheduler in [`monitor`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod monitor;
pub mod cli;
