//! Technical-analysis and trading tools for the Binance spot REST API.
//!
//! The pure signal evaluator lives in [`signals`]; everything that talks to the
//! exchange lives in [`services`] and [`account`]. The binaries under `src/bin`
//! wire the two together and own console output and exit codes.

pub mod account;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod signals;

pub use error::{Error, Result};
