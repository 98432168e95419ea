//! Global and page-level UI state

use dioxus::prelude::*;
use uuid::Uuid;

/// Tabs of the login page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    pub fn label(&self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Signup => "Sign Up",
        }
    }

    pub fn variants() -> &'static [AuthTab] {
        &[AuthTab::Login, AuthTab::Signup]
    }
}

/// Tabs of the membership page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MembershipTab {
    #[default]
    Apply,
    Status,
    Benefits,
}

impl MembershipTab {
    pub fn label(&self) -> &'static str {
        match self {
            MembershipTab::Apply => "Apply",
            MembershipTab::Status => "Status",
            MembershipTab::Benefits => "Benefits",
        }
    }

    pub fn variants() -> &'static [MembershipTab] {
        &[
            MembershipTab::Apply,
            MembershipTab::Status,
            MembershipTab::Benefits,
        ]
    }
}

/// Application submitted from this page load, if any
///
/// Lives for the page lifetime only; a reload forgets it.
#[derive(Clone, Copy)]
pub struct MembershipState {
    pub last_reference: Signal<Option<Uuid>>,
}

impl MembershipState {
    pub fn new() -> Self {
        Self {
            last_reference: Signal::new(None),
        }
    }

    pub fn remember(&self, reference: Uuid) {
        let mut last_reference = self.last_reference;
        last_reference.set(Some(reference));
    }
}
