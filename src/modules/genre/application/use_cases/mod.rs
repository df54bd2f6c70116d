pub mod change_genre_status;
pub mod create_genre;
pub mod delete_genre;
pub mod get_genre;
pub mod list_genres;
pub mod update_genre;

pub use change_genre_status::{
    ChangeGenreStatusCommand, ChangeGenreStatusHandler, ChangeGenreStatusResult,
};
pub use create_genre::{CreateGenreCommand, CreateGenreHandler, CreateGenreResult};
pub use delete_genre::{DeleteGenreCommand, DeleteGenreHandler};
pub use get_genre::{GenreOutput, GetGenreByIdHandler, GetGenreByIdQuery};
pub use list_genres::{GenreListOutput, ListGenresHandler, ListGenresQuery};
pub use update_genre::{UpdateGenreCommand, UpdateGenreHandler, UpdateGenreResult};
