//! Client session wiring

mod browser;
mod context;

pub use browser::*;
pub use context::*;
