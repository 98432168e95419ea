//! Admin pages

mod dashboard;
mod profile;

pub use dashboard::*;
pub use profile::*;
