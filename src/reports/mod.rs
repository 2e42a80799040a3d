//! Plain-text reports printed by the tools.
//!
//! Every renderer returns the full report as a `String`; the binaries only
//! write it to stdout.

pub mod account;
pub mod signals;

pub use account::*;
pub use signals::*;

const SEPARATOR: &str = "--------------------------------------------------------------";
