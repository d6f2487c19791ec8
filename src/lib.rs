//! Cross-chain explorer step derivation.
//!
//! Turns indexed cross-chain transfers and general message passing (GMP)
//! calls into ordered pipelines of display steps, and keeps them current by
//! polling the explorer backend.
//!
//! # Modules
//! - `bootstrap`: Service wiring and output for the binary
//! - `models`: Records, steps, chains and configuration
//! - `repositories`: Chain registry
//! - `services`: Backend client, step derivation and watcher
//! - `utils`: Constants, HTTP, logging and test builders

pub mod bootstrap;
pub mod models;
pub mod repositories;
pub mod services;
pub mod utils;
