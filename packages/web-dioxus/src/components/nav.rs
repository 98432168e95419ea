//! Navigation links and auth controls

use dioxus::prelude::*;
use hopehands_core::navigation::AuthAction;
use hopehands_core::{NavEntry, NavIcon};

use crate::auth::use_auth;
use crate::routes::Route;

/// Glyph drawn for a navigation icon
pub fn icon_glyph(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Heart => "\u{2764}",     // ❤
        NavIcon::Users => "\u{1F465}",    // 👥
        NavIcon::FileText => "\u{1F4C4}", // 📄
        NavIcon::Phone => "\u{1F4DE}",    // 📞
        NavIcon::UserPlus => "\u{1F464}", // 👤
        NavIcon::Shield => "\u{1F6E1}",   // 🛡
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavLinkProps {
    pub entry: NavEntry,
    pub active: bool,
    #[props(default)]
    pub mobile: bool,
}

/// Single navigation entry
#[component]
pub fn NavLink(props: NavLinkProps) -> Element {
    let entry = props.entry;
    let glyph = icon_glyph(entry.icon);
    // The desktop bar only decorates the admin dashboard entry
    let show_icon = props.mobile || entry.icon == NavIcon::Shield;

    let class = match (props.mobile, props.active) {
        (false, true) => "text-sm font-semibold text-emerald-700 flex items-center space-x-1",
        (false, false) => "text-sm font-medium text-gray-500 hover:text-emerald-700 flex items-center space-x-1",
        (true, true) => "flex items-center space-x-3 rounded-lg px-3 py-2 text-sm font-semibold bg-emerald-50 text-emerald-800",
        (true, false) => "flex items-center space-x-3 rounded-lg px-3 py-2 text-sm font-medium text-gray-500 hover:bg-emerald-50",
    };

    rsx! {
        Link {
            to: Route::from(entry.page),
            class: class,
            if show_icon {
                span { class: "text-xs", "{glyph}" }
            }
            span { "{entry.label}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AuthActionsProps {
    pub actions: Vec<AuthAction>,
    #[props(default)]
    pub mobile: bool,
    /// Called after any action is taken (closes the mobile menu)
    pub on_action: Option<EventHandler<()>>,
}

/// Login / Join Us or Logout controls
#[component]
pub fn AuthActions(props: AuthActionsProps) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let on_action = props.on_action;

    let notify = move || {
        if let Some(handler) = on_action {
            handler.call(());
        }
    };

    let handle_logout = move |_: MouseEvent| {
        if let Err(e) = auth.logout() {
            tracing::warn!(error = %e, "Session storage could not be fully cleared");
        }
        notify();
        navigator.push(Route::Home {});
    };

    let wrapper = if props.mobile {
        "flex flex-col space-y-2 pt-4 border-t"
    } else {
        "flex items-center space-x-2"
    };

    let controls = props.actions.iter().copied().map(|action| {
        let key = action.label();
        match action.target() {
            Some(page) => {
                let class = if action == AuthAction::JoinUs {
                    "inline-block px-3 py-1.5 rounded-md text-sm font-medium text-white bg-emerald-600 hover:bg-emerald-700"
                } else {
                    "inline-block px-3 py-1.5 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-100"
                };
                rsx! {
                    div {
                        key: "{key}",
                        onclick: move |_| notify(),
                        Link { to: Route::from(page), class: class, "{key}" }
                    }
                }
            }
            None => rsx! {
                button {
                    key: "{key}",
                    class: "px-3 py-1.5 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-100",
                    onclick: handle_logout.clone(),
                    "{key}"
                }
            },
        }
    });

    rsx! {
        div {
            class: wrapper,
            {controls}
        }
    }
}
