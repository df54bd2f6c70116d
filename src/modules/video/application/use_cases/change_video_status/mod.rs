mod command;
mod handler;
mod result;

pub use command::ChangeVideoStatusCommand;
pub use handler::ChangeVideoStatusHandler;
pub use result::ChangeVideoStatusResult;
