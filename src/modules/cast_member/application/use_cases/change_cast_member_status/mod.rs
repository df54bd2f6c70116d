mod command;
mod handler;
mod result;

pub use command::ChangeCastMemberStatusCommand;
pub use handler::ChangeCastMemberStatusHandler;
pub use result::ChangeCastMemberStatusResult;
