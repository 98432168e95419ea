//! Route definitions for the application

use dioxus::prelude::*;
use hopehands_core::Page;

use crate::components::{ProtectedLayout, SiteLayout};
use crate::pages::admin::{AdminDashboard, AdminProfile};
use crate::pages::account::{Login, Signup};
use crate::pages::member::MemberDashboard;
use crate::pages::membership::Membership;
use crate::pages::public::{About, Contact, Donate, Home, NotFound, Projects};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(SiteLayout)]
        // Public routes
        #[route("/")]
        Home {},

        #[route("/about")]
        About {},

        #[route("/projects")]
        Projects {},

        #[route("/contact")]
        Contact {},

        #[route("/membership")]
        Membership {},

        #[route("/login")]
        Login {},

        #[route("/signup")]
        Signup {},

        #[route("/donate")]
        Donate {},

        // Guarded routes
        #[layout(ProtectedLayout)]
            #[route("/member/dashboard")]
            MemberDashboard {},

            #[nest("/admin")]
                #[route("/dashboard")]
                AdminDashboard {},

                #[route("/profile")]
                AdminProfile {},
            #[end_nest]
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    /// Page this route renders, `None` for the not-found page
    pub fn page(&self) -> Option<Page> {
        let page = match self {
            Route::Home {} => Page::Home,
            Route::About {} => Page::About,
            Route::Projects {} => Page::Projects,
            Route::Contact {} => Page::Contact,
            Route::Membership {} => Page::Membership,
            Route::Login {} => Page::Login,
            Route::Signup {} => Page::Signup,
            Route::Donate {} => Page::Donate,
            Route::MemberDashboard {} => Page::MemberDashboard,
            Route::AdminDashboard {} => Page::AdminDashboard,
            Route::AdminProfile {} => Page::AdminProfile,
            Route::NotFound { .. } => return None,
        };
        Some(page)
    }
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::About => Route::About {},
            Page::Projects => Route::Projects {},
            Page::Contact => Route::Contact {},
            Page::Membership => Route::Membership {},
            Page::Login => Route::Login {},
            Page::Signup => Route::Signup {},
            Page::Donate => Route::Donate {},
            Page::MemberDashboard => Route::MemberDashboard {},
            Page::AdminDashboard => Route::AdminDashboard {},
            Page::AdminProfile => Route::AdminProfile {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_route_paths_match_pages() {
        for page in Page::all().iter().copied() {
            let route = Route::from(page);
            assert_eq!(route.to_string(), page.path());
            assert_eq!(route.page(), Some(page));
        }
    }

    #[test]
    fn test_paths_parse_back_to_routes() {
        for page in Page::all().iter().copied() {
            let parsed = Route::from_str(page.path()).ok();
            assert_eq!(parsed, Some(Route::from(page)));
        }
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = Route::from_str("/nope").ok();
        assert!(matches!(route, Some(Route::NotFound { .. })));
        assert_eq!(route.and_then(|r| r.page()), None);
    }
}
