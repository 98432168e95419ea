//! Public-facing pages

mod about;
mod contact;
mod donate;
mod home;
mod not_found;
mod projects;

pub use about::*;
pub use contact::*;
pub use donate::*;
pub use home::*;
pub use not_found::*;
pub use projects::*;
