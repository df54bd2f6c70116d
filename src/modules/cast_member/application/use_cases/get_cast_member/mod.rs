mod handler;
mod query;
mod result;

pub use handler::GetCastMemberByIdHandler;
pub use query::GetCastMemberByIdQuery;
pub use result::CastMemberOutput;
