//! # Navigation: logical pages, URL paths and the highlighted link
//!
//! A logical page name is what the navigation bar shows ("My Books"); its URL
//! slug is the lowercase, hyphenated form (`/my-books`). Entity pages carry the
//! raw path segment they were opened with so it can be handed to the API
//! without decoding and re-encoding it.

use std::fmt;

/// Links in the bottom navigation bar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavLink {
    Home,
    Browse,
    MyBooks,
    Diary,
    Recommendations,
}

impl NavLink {
    pub const ALL: [NavLink; 5] = [
        NavLink::Home,
        NavLink::Browse,
        NavLink::MyBooks,
        NavLink::Diary,
        NavLink::Recommendations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Browse => "Browse",
            NavLink::MyBooks => "My Books",
            NavLink::Diary => "Diary",
            NavLink::Recommendations => "Recommendations",
        }
    }

    pub fn page(self) -> Page {
        match self {
            NavLink::Home => Page::Home,
            NavLink::Browse => Page::Browse,
            NavLink::MyBooks => Page::MyBooks,
            NavLink::Diary => Page::Diary,
            NavLink::Recommendations => Page::Recommendations,
        }
    }
}

/// A destination the content loader can render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Browse,
    MyBooks,
    Diary,
    Recommendations,
    Search { query: String },
    Book { id: String },
    Author { id: String },
    Genre { name: String },
}

impl Page {
    /// Logical page name, as shown in the navigation bar for static pages.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Browse => "Browse",
            Page::MyBooks => "My Books",
            Page::Diary => "Diary",
            Page::Recommendations => "Recommendations",
            Page::Search { .. } => "Search",
            Page::Book { .. } => "Book",
            Page::Author { .. } => "Author",
            Page::Genre { .. } => "Genre",
        }
    }

    /// Resolve a logical name to a static page. Entity pages and search need
    /// an argument and are never returned.
    pub fn from_name(name: &str) -> Option<Page> {
        NavLink::ALL
            .into_iter()
            .find(|link| link.label() == name)
            .map(NavLink::page)
    }

    /// Pages whose content exists only for a signed-in user.
    pub fn requires_sign_in(&self) -> bool {
        matches!(self, Page::MyBooks | Page::Diary | Page::Recommendations)
    }

    /// The navigation link highlighted while this page is shown. Detail pages
    /// and search results belong to Browse.
    pub fn nav_link(&self) -> NavLink {
        match self {
            Page::Home => NavLink::Home,
            Page::MyBooks => NavLink::MyBooks,
            Page::Diary => NavLink::Diary,
            Page::Recommendations => NavLink::Recommendations,
            Page::Browse
            | Page::Search { .. }
            | Page::Book { .. }
            | Page::Author { .. }
            | Page::Genre { .. } => NavLink::Browse,
        }
    }

    /// Address-bar path for this page. Entity segments are emitted verbatim.
    pub fn path(&self) -> String {
        match self {
            Page::Book { id } => format!("/book/{id}"),
            Page::Author { id } => format!("/author/{id}"),
            Page::Genre { name } => format!("/genre/{name}"),
            Page::Search { query } => {
                api::query::add_get_parameter("/search", "query", query)
            }
            other => path_for(other.name()),
        }
    }

    /// Parse an address-bar path (without query string or fragment).
    /// Returns `None` for paths that name no page.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_start_matches('/');
        match trimmed.split_once('/') {
            Some((kind, segment)) if !segment.is_empty() => {
                match page_from_path(&format!("/{kind}")).as_str() {
                    "Book" => Some(Page::Book { id: segment.to_string() }),
                    "Author" => Some(Page::Author { id: segment.to_string() }),
                    "Genre" => Some(Page::Genre { name: segment.to_string() }),
                    _ => None,
                }
            }
            Some(_) => None,
            None => Page::from_name(&page_from_path(path)),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `/` for Home, otherwise `/` plus the lowercase name with spaces turned
/// into hyphens.
pub fn path_for(page_name: &str) -> String {
    if page_name == "Home" {
        "/".to_string()
    } else {
        format!("/{}", page_name.to_lowercase().replace(' ', "-"))
    }
}

/// Inverse of [`path_for`]: hyphens become spaces and each word is
/// title-cased. The root path maps to Home.
pub fn page_from_path(path: &str) -> String {
    let name = path.trim_start_matches('/').replace('-', " ");
    if name.is_empty() {
        return "Home".to_string();
    }
    title_case(&name)
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Bookmark fragment for a reading list: title-cased with every space
/// removed, e.g. `"Want to Read"` becomes `WantToRead`.
pub fn list_fragment(list_name: &str) -> String {
    title_case(list_name).replace(' ', "")
}

/// What the content loader must do once a navigation completes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub active_link: NavLink,
    /// The header search box is emptied on every page except search results.
    pub clear_search: bool,
    /// Anonymous visitor on a sign-in-only page: show the sign-in popup
    /// instead of fetching content.
    pub requires_sign_in: bool,
    pub scroll_to_top: bool,
}

/// Current page and highlighted link. They are only ever updated together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationState {
    current: Option<Page>,
    active_link: Option<NavLink>,
}

impl NavigationState {
    pub fn current(&self) -> Option<&Page> {
        self.current.as_ref()
    }

    pub fn active_link(&self) -> Option<NavLink> {
        self.active_link
    }

    pub fn navigate(&mut self, page: Page, signed_in: bool) -> NavigationOutcome {
        let outcome = NavigationOutcome {
            active_link: page.nav_link(),
            clear_search: !matches!(page, Page::Search { .. }),
            requires_sign_in: page.requires_sign_in() && !signed_in,
            scroll_to_top: true,
        };
        self.active_link = Some(outcome.active_link);
        self.current = Some(page);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_pages_round_trip() {
        for link in NavLink::ALL {
            let name = link.label();
            assert_eq!(page_from_path(&path_for(name)), name);
            assert_eq!(Page::from_path(&link.page().path()), Some(link.page()));
        }
    }

    #[test]
    fn my_books_slug() {
        assert_eq!(path_for("My Books"), "/my-books");
        assert_eq!(page_from_path("/my-books"), "My Books");
        assert_eq!(path_for("Home"), "/");
        assert_eq!(page_from_path("/"), "Home");
    }

    #[test]
    fn entity_segment_is_kept_verbatim() {
        assert_eq!(
            Page::from_path("/genre/Science%20Fiction"),
            Some(Page::Genre {
                name: "Science%20Fiction".to_string()
            })
        );
        let page = Page::Book { id: "42".to_string() };
        assert_eq!(page.path(), "/book/42");
        assert_eq!(Page::from_path("/book/42"), Some(page));
    }

    #[test]
    fn unknown_paths_are_none() {
        assert_eq!(Page::from_path("/settings"), None);
        assert_eq!(Page::from_path("/book/"), None);
        assert_eq!(Page::from_path("/shelf/3"), None);
    }

    #[test]
    fn list_fragments_drop_spaces() {
        assert_eq!(list_fragment("Want to Read"), "WantToRead");
        assert_eq!(list_fragment("currently reading"), "CurrentlyReading");
        assert_eq!(list_fragment("Holiday"), "Holiday");
    }

    #[test]
    fn search_path_encodes_query() {
        let page = Page::Search {
            query: "le guin".to_string(),
        };
        assert_eq!(page.path(), "/search?query=le%20guin");
    }

    #[test]
    fn detail_pages_highlight_browse() {
        let mut nav = NavigationState::default();
        let outcome = nav.navigate(Page::Author { id: "7".into() }, false);
        assert_eq!(outcome.active_link, NavLink::Browse);
        assert!(outcome.clear_search);
        assert_eq!(nav.active_link(), Some(NavLink::Browse));
        assert_eq!(nav.current().map(Page::name), Some("Author"));
    }

    #[test]
    fn search_keeps_search_box() {
        let mut nav = NavigationState::default();
        let outcome = nav.navigate(
            Page::Search {
                query: "dune".into(),
            },
            false,
        );
        assert!(!outcome.clear_search);
    }

    #[test]
    fn current_page_and_link_agree() {
        let mut nav = NavigationState::default();
        for link in NavLink::ALL {
            nav.navigate(link.page(), true);
            assert_eq!(nav.active_link(), Some(link));
            assert_eq!(nav.current().map(Page::nav_link), Some(link));
        }
    }

    #[test]
    fn anonymous_diary_requires_sign_in() {
        let mut nav = NavigationState::default();
        assert!(nav.navigate(Page::Diary, false).requires_sign_in);
        assert!(!nav.navigate(Page::Diary, true).requires_sign_in);
        assert!(!nav.navigate(Page::Home, false).requires_sign_in);
    }
}
