//! Genre administration handlers.

mod create_genre;
mod delete_genre;
mod get_genre;
mod list_genres;
mod update_genre;

pub use create_genre::{CreateGenreCommand, CreateGenreHandler};
pub use delete_genre::{DeleteGenreCommand, DeleteGenreHandler};
pub use get_genre::{GetGenreHandler, GetGenreQuery};
pub use list_genres::ListGenresHandler;
pub use update_genre::{UpdateGenreCommand, UpdateGenreHandler};
