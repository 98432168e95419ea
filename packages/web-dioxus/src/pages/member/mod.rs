//! Member pages

mod dashboard;

pub use dashboard::*;
