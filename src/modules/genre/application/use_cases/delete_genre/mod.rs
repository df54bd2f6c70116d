mod command;
mod handler;

pub use command::DeleteGenreCommand;
pub use handler::DeleteGenreHandler;
