//! Page components, one per route

pub mod account;
pub mod admin;
pub mod member;
pub mod membership;
pub mod public;
