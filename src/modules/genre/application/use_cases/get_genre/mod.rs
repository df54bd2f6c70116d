mod handler;
mod query;
mod result;

pub use handler::GetGenreByIdHandler;
pub use query::GetGenreByIdQuery;
pub use result::GenreOutput;
