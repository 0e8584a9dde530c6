use dioxus::prelude::*;

use store::ClientConfig;
use ui::SessionProvider;
use views::{
    Author, Book, Browse, Diary, Genre, Home, MyBooks, NotFound, Recommendations, Search, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/browse")]
        Browse {},
        #[route("/my-books#:list")]
        MyBooks { list: String },
        #[route("/diary")]
        Diary {},
        #[route("/recommendations")]
        Recommendations {},
        #[route("/search?:query")]
        Search { query: String },
        #[route("/book/:id")]
        Book { id: String },
        #[route("/author/:id")]
        Author { id: String },
        #[route("/genre/:name")]
        Genre { name: String },
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Built-in configuration, overridable by editing the file before a build.
const CONFIG_TOML: &str = include_str!("../bookshelf.toml");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| ClientConfig::from_toml_or_default(CONFIG_TOML));
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            config,
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{NavLink, Page};

    #[test]
    fn every_page_path_is_routed() {
        let pages = NavLink::ALL.into_iter().map(NavLink::page).chain([
            Page::Search { query: "dune".into() },
            Page::Book { id: "42".into() },
            Page::Author { id: "7".into() },
            Page::Genre { name: "Fantasy".into() },
        ]);
        for page in pages {
            let route = page.path().parse::<Route>().ok();
            assert!(
                matches!(route, Some(ref r) if !matches!(r, Route::NotFound { .. })),
                "{} is not routed",
                page.path()
            );
        }
    }

    #[test]
    fn entity_routes_match_page_paths() {
        let book = Route::Book { id: "42".into() };
        assert_eq!(book.to_string(), Page::Book { id: "42".into() }.path());
        assert_eq!("/book/42".parse::<Route>().ok(), Some(book));
        assert_eq!(
            "/genre/Fantasy".parse::<Route>().ok(),
            Some(Route::Genre { name: "Fantasy".into() })
        );
        assert_eq!("/browse".parse::<Route>().ok(), Some(Route::Browse {}));
    }

    #[test]
    fn misspelt_slugs_resolve_to_canonical_paths() {
        assert_eq!(views::canonical_path("/My-Books").as_deref(), Some("/my-books"));
        assert_eq!(views::canonical_path("/home").as_deref(), Some("/"));
        assert_eq!(views::canonical_path("/Book/42").as_deref(), Some("/book/42"));
        assert_eq!(views::canonical_path("/shelf"), None);
        assert_eq!(views::canonical_path("/book/"), None);
    }
}
