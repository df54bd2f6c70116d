mod command;
mod handler;
mod result;

pub use command::CreateGenreCommand;
pub use handler::CreateGenreHandler;
pub use result::CreateGenreResult;
