//! Route table and navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page installs the same guard so protection is applied
//! uniformly. The decision itself is a pure function of the target route and
//! the persisted auth flag; the guard only reads the flag, never writes it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::read_auth_flag;

/// Navigation targets, statically classified as public or protected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Home,
}

impl AppRoute {
    pub const ALL: [Self; 2] = [Self::Login, Self::Home];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Home => "/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Home => "Home",
        }
    }

    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Home)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectToLogin,
    RedirectToHome,
}

impl GuardDecision {
    /// Path to navigate to instead, or `None` to proceed.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Proceed => None,
            Self::RedirectToLogin => Some(AppRoute::Login.path()),
            Self::RedirectToHome => Some(AppRoute::Home.path()),
        }
    }
}

/// Decide whether navigation to `target` may proceed.
pub fn decide(target: AppRoute, authenticated: bool) -> GuardDecision {
    if target.requires_auth() && !authenticated {
        GuardDecision::RedirectToLogin
    } else if target == AppRoute::Login && authenticated {
        GuardDecision::RedirectToHome
    } else {
        GuardDecision::Proceed
    }
}

/// Evaluate the guard for `target` once the page mounts, redirecting if needed.
///
/// Effects only run in the browser, so SSR always renders the requested page
/// and the redirect happens during hydration.
pub fn install_route_guard<F>(target: AppRoute, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = decide(target, read_auth_flag()).redirect_path() {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Full page navigation, so the target mounts fresh and re-evaluates its guard.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
