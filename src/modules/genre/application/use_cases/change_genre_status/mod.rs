mod command;
mod handler;
mod result;

pub use command::ChangeGenreStatusCommand;
pub use handler::ChangeGenreStatusHandler;
pub use result::ChangeGenreStatusResult;
