//! Reusable UI components

mod footer;
mod loading;
mod nav;
mod protected_layout;
mod site_layout;

pub use footer::*;
pub use loading::*;
pub use nav::*;
pub use protected_layout::*;
pub use site_layout::*;
