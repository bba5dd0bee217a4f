//! Route table and navigation menu.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::obs;

/// The five pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    About,
    Activities,
    Bunkou,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::About,
        Route::Activities,
        Route::Bunkou,
        Route::Contact,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Activities => "/activities",
            Route::Bunkou => "/bunkou",
            Route::Contact => "/contact",
        }
    }

    /// Document title suffix.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "トップ",
            Route::About => "劇団について",
            Route::Activities => "活動一覧",
            Route::Bunkou => "文抗時代",
            Route::Contact => "お問い合わせ",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Map a URL path to its page.
///
/// Query strings and fragments are ignored, as is one trailing slash.
/// Matching is otherwise exact.
pub fn resolve(path: &str) -> Option<Route> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };

    let route = Route::ALL.into_iter().find(|r| r.path() == path);
    match route {
        Some(r) => obs::emit_route_resolved(path, r.path()),
        None => obs::emit_route_unmatched(path),
    }
    route
}

/// One entry of the header menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: u32,
    pub label: &'static str,
    pub href: &'static str,
}

impl NavItem {
    /// Off-site URLs and in-page anchors render as plain anchors rather than
    /// route links.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http") || self.href.starts_with('#')
    }
}

/// Header menu. `/bunkou` is reachable by URL only.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: 1,
        label: "トップ",
        href: "/",
    },
    NavItem {
        id: 2,
        label: "劇団紹介",
        href: "/about",
    },
    NavItem {
        id: 3,
        label: "公演 / イベント",
        href: "/activities",
    },
    NavItem {
        id: 4,
        label: "お問い合わせ",
        href: "/contact",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in Route::ALL {
            assert_eq!(resolve(route.path()), Some(route));
        }
    }

    #[test]
    fn test_trailing_slash_query_and_fragment_ignored() {
        assert_eq!(resolve("/about/"), Some(Route::About));
        assert_eq!(resolve("/activities?tag=event"), Some(Route::Activities));
        assert_eq!(resolve("/contact#form"), Some(Route::Contact));
        assert_eq!(resolve("/?utm=x"), Some(Route::Home));
    }

    #[test]
    fn test_unknown_paths_do_not_resolve() {
        assert_eq!(resolve("/members"), None);
        assert_eq!(resolve("/about/history"), None);
        assert_eq!(resolve("about"), None);
        assert_eq!(resolve(""), None);
    }

    #[test]
    fn test_nav_menu_skips_bunkou() {
        assert_eq!(NAV_ITEMS.len(), 4);
        assert!(NAV_ITEMS.iter().all(|item| item.href != "/bunkou"));
        assert!(NAV_ITEMS.iter().all(|item| !item.is_external()));
        assert!(NAV_ITEMS.iter().all(|item| resolve(item.href).is_some()));
    }
}
