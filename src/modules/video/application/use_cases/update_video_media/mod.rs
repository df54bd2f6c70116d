mod command;
mod handler;
mod result;

pub use command::UpdateVideoMediaCommand;
pub use handler::UpdateVideoMediaHandler;
pub use result::UpdateVideoMediaResult;
