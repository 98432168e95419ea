//! Role-aware navigation
//!
//! The header navigation is a static table of entries, each with a
//! visibility predicate over the current [`Session`]. Resolving is cheap
//! and is redone on every render and every auth signal.

use crate::auth::Role;
use crate::session::Session;

/// Every routable page of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Projects,
    Contact,
    Membership,
    Login,
    Signup,
    MemberDashboard,
    AdminDashboard,
    AdminProfile,
    Donate,
}

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Projects => "/projects",
            Page::Contact => "/contact",
            Page::Membership => "/membership",
            Page::Login => "/login",
            Page::Signup => "/signup",
            Page::MemberDashboard => "/member/dashboard",
            Page::AdminDashboard => "/admin/dashboard",
            Page::AdminProfile => "/admin/profile",
            Page::Donate => "/donate",
        }
    }

    /// Look up a page by exact path. Anything else is the not-found page.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().iter().copied().find(|page| page.path() == path)
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::About,
            Page::Projects,
            Page::Contact,
            Page::Membership,
            Page::Login,
            Page::Signup,
            Page::MemberDashboard,
            Page::AdminDashboard,
            Page::AdminProfile,
            Page::Donate,
        ]
    }
}

/// Icon shown next to a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Heart,
    Users,
    FileText,
    Phone,
    UserPlus,
    Shield,
}

/// A visible navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub page: Page,
    pub icon: NavIcon,
}

impl NavEntry {
    pub fn href(&self) -> &'static str {
        self.page.path()
    }
}

struct NavItem {
    entry: NavEntry,
    visible_when: fn(&Session) -> bool,
}

const fn item(label: &'static str, page: Page, icon: NavIcon, visible_when: fn(&Session) -> bool) -> NavItem {
    NavItem {
        entry: NavEntry { label, page, icon },
        visible_when,
    }
}

fn always(_: &Session) -> bool {
    true
}

fn not_admin(session: &Session) -> bool {
    session.role() != Some(Role::Admin)
}

fn signed_out(session: &Session) -> bool {
    !session.token_present
}

fn signed_in_admin(session: &Session) -> bool {
    session.token_present && session.role() == Some(Role::Admin)
}

// A token with a missing or unknown role falls through to the member profile.
fn signed_in_member(session: &Session) -> bool {
    session.token_present && session.role() != Some(Role::Admin)
}

static NAVIGATION: [NavItem; 9] = [
    item("Home", Page::Home, NavIcon::Heart, always),
    item("About", Page::About, NavIcon::Users, always),
    item("Projects", Page::Projects, NavIcon::FileText, always),
    item("Donate", Page::Donate, NavIcon::Heart, not_admin),
    item("Contact", Page::Contact, NavIcon::Phone, not_admin),
    item("Membership", Page::Membership, NavIcon::UserPlus, signed_out),
    item("Admin Dashboard", Page::AdminDashboard, NavIcon::Shield, signed_in_admin),
    item("Profile", Page::AdminProfile, NavIcon::UserPlus, signed_in_admin),
    item("Profile", Page::MemberDashboard, NavIcon::UserPlus, signed_in_member),
];

/// Resolve the ordered navigation entries visible for `session`
pub fn resolve(session: &Session) -> Vec<NavEntry> {
    NAVIGATION
        .iter()
        .filter(|item| (item.visible_when)(session))
        .map(|item| item.entry)
        .collect()
}

/// Auth controls shown beside the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    JoinUs,
    Logout,
}

impl AuthAction {
    pub fn label(&self) -> &'static str {
        match self {
            AuthAction::Login => "Login",
            AuthAction::JoinUs => "Join Us",
            AuthAction::Logout => "Logout",
        }
    }

    /// Page the action links to. Logout is handled in place.
    pub fn target(&self) -> Option<Page> {
        match self {
            AuthAction::Login => Some(Page::Login),
            AuthAction::JoinUs => Some(Page::Membership),
            AuthAction::Logout => None,
        }
    }
}

/// Resolve the auth controls. Nothing is shown until the session has been read.
pub fn resolve_actions(session: &Session, loading: bool) -> Vec<AuthAction> {
    if loading {
        Vec::new()
    } else if session.token_present {
        vec![AuthAction::Logout]
    } else {
        vec![AuthAction::Login, AuthAction::JoinUs]
    }
}

/// Whether `entry` points at the current location
pub fn is_active(entry: &NavEntry, current_path: &str) -> bool {
    entry.href() == current_path
}
