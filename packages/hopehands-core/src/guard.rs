//! Route guards for the dashboard pages
//!
//! Guards only decide what to render. The stored role is not bound to the
//! session token, so they are a navigation convenience and not an
//! authorization boundary.

use crate::auth::Role;
use crate::navigation::Page;
use crate::session::Session;

/// Who may see a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Member,
    Admin,
}

impl Page {
    pub fn access(&self) -> Access {
        match self {
            Page::MemberDashboard => Access::Member,
            Page::AdminDashboard | Page::AdminProfile => Access::Admin,
            _ => Access::Public,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Page),
}

impl GuardDecision {
    pub fn redirect_target(&self) -> Option<Page> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::Redirect(page) => Some(*page),
        }
    }
}

/// Decide whether `page` may be shown for `session`
pub fn check(page: Page, session: &Session) -> GuardDecision {
    match page.access() {
        Access::Public => GuardDecision::Allow,
        _ if !session.token_present => GuardDecision::Redirect(Page::Login),
        Access::Member => match session.role() {
            Some(Role::Admin) => GuardDecision::Redirect(Page::AdminDashboard),
            _ => GuardDecision::Allow,
        },
        Access::Admin => match session.role() {
            Some(Role::Admin) => GuardDecision::Allow,
            _ => GuardDecision::Redirect(Page::MemberDashboard),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Session {
        Session::signed_in("t", Role::Member, "member@hopehands.org")
    }

    fn admin() -> Session {
        Session::signed_in("t", Role::Admin, "admin@hopehands.org")
    }

    #[test]
    fn test_public_pages_always_allowed() {
        for session in [Session::anonymous(), member(), admin()] {
            for page in [Page::Home, Page::Login, Page::Signup, Page::Membership, Page::Donate] {
                assert_eq!(check(page, &session), GuardDecision::Allow);
            }
        }
    }

    #[test]
    fn test_signed_out_redirects_to_login() {
        let anonymous = Session::anonymous();
        for page in [Page::MemberDashboard, Page::AdminDashboard, Page::AdminProfile] {
            assert_eq!(check(page, &anonymous), GuardDecision::Redirect(Page::Login));
        }
    }

    #[test]
    fn test_member_area() {
        assert_eq!(check(Page::MemberDashboard, &member()), GuardDecision::Allow);
        assert_eq!(
            check(Page::MemberDashboard, &admin()),
            GuardDecision::Redirect(Page::AdminDashboard)
        );
    }

    #[test]
    fn test_admin_area() {
        assert_eq!(check(Page::AdminDashboard, &admin()), GuardDecision::Allow);
        assert_eq!(check(Page::AdminProfile, &admin()), GuardDecision::Allow);
        assert_eq!(
            check(Page::AdminProfile, &member()),
            GuardDecision::Redirect(Page::MemberDashboard)
        );
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(GuardDecision::Allow.redirect_target(), None);
        assert_eq!(
            GuardDecision::Redirect(Page::Login).redirect_target(),
            Some(Page::Login)
        );
    }
}
