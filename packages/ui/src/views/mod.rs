mod page_error;
pub use page_error::PageError;

mod home;
pub use home::HomeView;

mod browse;
pub use browse::BrowseView;

mod my_books;
pub use my_books::MyBooksView;

mod diary;
pub use diary::DiaryView;

mod recommendations;
pub use recommendations::RecommendationsView;

mod book;
pub use book::BookView;

mod author;
pub use author::AuthorView;

mod genre;
pub use genre::GenreView;

mod search;
pub use search::SearchView;
