//! Signal evaluation: indicator values in, LONG / SHORT / NEUTRAL out.

pub mod decision;
pub mod engine;
pub mod evaluator;
pub mod params;

pub use decision::*;
pub use engine::*;
pub use evaluator::*;
pub use params::*;
