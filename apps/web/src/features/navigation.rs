//! Route-level pages. Controllers answer with a [`Route`]; the UI turns it
//! into a client-side navigation.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Services,
    Contact,
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
}

impl Route {
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::Services,
        Route::Contact,
        Route::Login,
        Route::Signup,
        Route::ForgotPassword,
        Route::Dashboard,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::Contact => "/contact",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::ForgotPassword => "/forgot-password",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Exact match on the path, ignoring a trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// An entry of the bottom navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: &'static str,
    pub icon: &'static str,
}

pub const BOTTOM_NAV: [NavItem; 4] = [
    NavItem {
        route: Route::Home,
        label: "Home",
        icon: "home",
    },
    NavItem {
        route: Route::Services,
        label: "Services",
        icon: "settings",
    },
    NavItem {
        route: Route::Contact,
        label: "Contact",
        icon: "call",
    },
    NavItem {
        route: Route::Dashboard,
        label: "Profile",
        icon: "person",
    },
];

/// The bottom-nav entry to highlight for `pathname`, if any.
pub fn active_nav_item(pathname: &str) -> Option<NavItem> {
    let route = Route::from_path(pathname)?;
    BOTTOM_NAV.into_iter().find(|item| item.route == route)
}

#[cfg(test)]
mod tests {
    use super::{active_nav_item, Route};

    #[test]
    fn paths_are_distinct_and_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        let mut paths: Vec<_> = Route::ALL.iter().map(|route| route.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn from_path_ignores_trailing_slash() {
        assert_eq!(Route::from_path("/dashboard/"), Some(Route::Dashboard));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/nope"), None);
    }

    #[test]
    fn active_nav_item_matches_exact_route() {
        assert_eq!(active_nav_item("/services").map(|item| item.label), Some("Services"));
        assert_eq!(active_nav_item("/dashboard").map(|item| item.label), Some("Profile"));
        assert_eq!(active_nav_item("/login"), None);
    }
}
