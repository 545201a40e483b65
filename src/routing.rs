// SPDX-License-Identifier: MPL-2.0
//! Route table of the portfolio site.
//!
//! Two routes exist: `home` at `/` (the grid) and `work-detail` at
//! `/work/{slug}`. The site may be deployed under a base path, which
//! [`Router`] strips before matching and adds back when building links.
//! Slugs travel percent-encoded in URLs and are decoded before lookup.

use crate::domain::{DisplayImage, NavItem, OtherWorksLimit, Work};
use crate::works_index::WorksIndex;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A matched route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    WorkDetail { slug: String },
}

impl Route {
    /// Stable route name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::WorkDetail { .. } => "work-detail",
        }
    }
}

/// Data a page needs, resolved from the index.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a, H> {
    Home {
        works: Vec<&'a Work<H>>,
        navigation: Vec<NavItem>,
    },
    Detail {
        work: &'a Work<H>,
        images: &'a [DisplayImage<H>],
        other_works: Vec<&'a Work<H>>,
    },
    NotFound {
        path: String,
    },
}

/// Matches request paths against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    /// Normalised base: empty for `/`, otherwise `/segment` without trailing slash.
    base: String,
}

impl Router {
    /// Creates a router for a site served under `base` (e.g. `/` or `/portfolio/`).
    #[must_use]
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim_matches('/');
        let base = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { base }
    }

    /// Base path as given to links, always ending with `/`.
    #[must_use]
    pub fn base(&self) -> String {
        format!("{}/", self.base)
    }

    /// Matches a request path. Query strings, fragments and a trailing slash
    /// are ignored. The slug is percent-decoded; a slug that does not decode
    /// to UTF-8 does not match.
    ///
    /// ```
    /// use folio_index::routing::{Route, Router};
    ///
    /// let router = Router::new("/portfolio/");
    /// assert_eq!(router.match_path("/portfolio/"), Some(Route::Home));
    /// assert_eq!(
    ///     router.match_path("/portfolio/work/01_Logo?from=grid"),
    ///     Some(Route::WorkDetail { slug: "01_Logo".to_string() })
    /// );
    /// assert_eq!(router.match_path("/work/01_Logo"), None);
    /// ```
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let rest = path.strip_prefix(self.base.as_str())?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }

        let rest = rest.trim_start_matches('/').trim_end_matches('/');
        if rest.is_empty() {
            return Some(Route::Home);
        }

        match rest.split('/').collect::<Vec<_>>().as_slice() {
            ["work", slug] if !slug.is_empty() => {
                let slug = percent_decode_str(slug).decode_utf8().ok()?;
                Some(Route::WorkDetail {
                    slug: slug.into_owned(),
                })
            }
            _ => None,
        }
    }

    /// Builds the link for a route, including the base path. The slug is
    /// percent-encoded as one path segment.
    #[must_use]
    pub fn href(&self, route: &Route) -> String {
        match route {
            Route::Home => self.base(),
            Route::WorkDetail { slug } => {
                format!("{}/work/{}", self.base, utf8_percent_encode(slug, SEGMENT))
            }
        }
    }

    /// Resolves a request path into the data its page shows.
    pub fn resolve<'a, H>(
        &self,
        index: &'a WorksIndex<H>,
        path: &str,
        other_works_limit: OtherWorksLimit,
    ) -> View<'a, H> {
        let not_found = || View::NotFound {
            path: path.to_string(),
        };

        match self.match_path(path) {
            Some(Route::Home) => View::Home {
                works: index.list_with_covers(),
                navigation: index.navigation_items(),
            },
            Some(Route::WorkDetail { slug }) => match index.find_by_slug(&slug) {
                Some(work) => View::Detail {
                    work,
                    images: index.detail_images(&slug),
                    other_works: index.other_works(&slug, other_works_limit.value()),
                },
                None => not_found(),
            },
            None => not_found(),
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("/")
    }
}

/// Scroll offsets saved by the browser history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    pub left: f32,
    pub top: f32,
}

/// Where the page should scroll after a navigation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollTarget {
    /// Back/forward navigation: return to the saved offsets.
    Restore(ScrollPosition),
    /// New navigation: go to the top.
    Top { smooth: bool },
}

/// Restores a saved position when one exists, otherwise scrolls smoothly to the top.
#[must_use]
pub fn scroll_target(saved: Option<ScrollPosition>) -> ScrollTarget {
    match saved {
        Some(position) => ScrollTarget::Restore(position),
        None => ScrollTarget::Top { smooth: true },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indexer::build_index;

    fn detail(slug: &str) -> Option<Route> {
        Some(Route::WorkDetail {
            slug: slug.to_string(),
        })
    }

    #[test]
    fn root_router_matches_both_routes() {
        let router = Router::default();
        assert_eq!(router.match_path("/"), Some(Route::Home));
        assert_eq!(router.match_path(""), Some(Route::Home));
        assert_eq!(router.match_path("/work/01_Logo"), detail("01_Logo"));
        assert_eq!(router.match_path("/work/01_Logo/"), detail("01_Logo"));
        assert_eq!(router.match_path("/work/01_Logo#top"), detail("01_Logo"));
    }

    #[test]
    fn unknown_paths_do_not_match() {
        let router = Router::default();
        assert_eq!(router.match_path("/work/"), None);
        assert_eq!(router.match_path("/work"), None);
        assert_eq!(router.match_path("/about"), None);
        assert_eq!(router.match_path("/work/a/b"), None);
    }

    #[test]
    fn base_path_is_stripped_and_required() {
        let router = Router::new("portfolio");
        assert_eq!(router.match_path("/portfolio"), Some(Route::Home));
        assert_eq!(router.match_path("/portfolio/work/x?y=1"), detail("x"));
        assert_eq!(router.match_path("/portfolioextra/work/x"), None);
        assert_eq!(router.match_path("/work/x"), None);
    }

    #[test]
    fn href_round_trips_through_match_path() {
        for router in [Router::default(), Router::new("/portfolio/")] {
            for route in [Route::Home, Route::WorkDetail { slug: "02_App".into() }] {
                let href = router.href(&route);
                assert_eq!(router.match_path(&href), Some(route));
            }
        }
        assert_eq!(Router::default().href(&Route::Home), "/");
        assert_eq!(
            Router::new("/portfolio/").href(&Route::WorkDetail { slug: "a".into() }),
            "/portfolio/work/a"
        );
    }

    #[test]
    fn slugs_are_percent_encoded_in_links_and_decoded_when_matched() {
        let router = Router::new("/portfolio/");
        for slug in ["01_品牌设计", "02_Brand Book", "03_50%_off", "04_a/b"] {
            let route = Route::WorkDetail { slug: slug.into() };
            let href = router.href(&route);
            assert!(href.is_ascii(), "{href} should be ASCII");
            assert!(!href.contains(' '));
            assert_eq!(router.match_path(&href), Some(route));
        }
        assert_eq!(
            Router::default().href(&Route::WorkDetail {
                slug: "02_Brand Book".into()
            }),
            "/work/02_Brand%20Book"
        );
    }

    #[test]
    fn invalid_utf8_slug_does_not_match() {
        assert_eq!(Router::default().match_path("/work/%FF%FE"), None);
    }

    #[test]
    fn resolve_finds_work_from_encoded_path() {
        let index = build_index([("works/01_品牌设计/a.png", ())]);
        let router = Router::default();

        match router.resolve(
            &index,
            "/work/01_%E5%93%81%E7%89%8C%E8%AE%BE%E8%AE%A1",
            OtherWorksLimit::default(),
        ) {
            View::Detail { work, .. } => assert_eq!(work.name, "品牌设计"),
            other => panic!("expected detail view, got {other:?}"),
        }
    }

    #[test]
    fn route_names_are_stable() {
        assert_eq!(Route::Home.name(), "home");
        assert_eq!(Route::WorkDetail { slug: "x".into() }.name(), "work-detail");
    }

    #[test]
    fn resolve_builds_page_data() {
        let index = build_index([
            ("works/01_A/cover.png", ()),
            ("works/01_A/shot.png", ()),
            ("works/02_B/a.png", ()),
            ("works/03_C/a.png", ()),
        ]);
        let router = Router::default();

        match router.resolve(&index, "/", OtherWorksLimit::default()) {
            View::Home { works, navigation } => {
                assert_eq!(works.len(), 3);
                assert_eq!(navigation[0].slug, "01_A");
            }
            other => panic!("expected home view, got {other:?}"),
        }

        match router.resolve(&index, "/work/01_A", OtherWorksLimit::new(1)) {
            View::Detail {
                work,
                images,
                other_works,
            } => {
                assert_eq!(work.slug, "01_A");
                assert_eq!(images.len(), 1);
                assert_eq!(other_works.len(), 1);
                assert_eq!(other_works[0].slug, "02_B");
            }
            other => panic!("expected detail view, got {other:?}"),
        }

        assert_eq!(
            router.resolve(&index, "/work/99_Missing", OtherWorksLimit::default()),
            View::NotFound {
                path: "/work/99_Missing".to_string()
            }
        );
    }

    #[test]
    fn scroll_restores_saved_position_or_goes_to_top() {
        let saved = ScrollPosition {
            left: 0.0,
            top: 640.0,
        };
        assert_eq!(scroll_target(Some(saved)), ScrollTarget::Restore(saved));
        assert_eq!(scroll_target(None), ScrollTarget::Top { smooth: true });
    }
}
