mod handler;
mod query;
mod result;

pub use handler::ListCastMembersHandler;
pub use query::ListCastMembersQuery;
pub use result::CastMemberListOutput;
