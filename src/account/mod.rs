//! Account tools: balances, breakeven prices, order preparation.

pub mod balance;
pub mod breakeven;
pub mod error;
pub mod orders;

pub use balance::*;
pub use breakeven::*;
pub use error::AccountError;
pub use orders::*;
