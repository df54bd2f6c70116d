mod command;
mod handler;
mod result;

pub use command::ChangeCategoryStatusCommand;
pub use handler::ChangeCategoryStatusHandler;
pub use result::ChangeCategoryStatusResult;
