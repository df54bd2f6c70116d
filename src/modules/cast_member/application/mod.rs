pub mod ports;
pub mod references;
pub mod use_cases;

pub use ports::CastMemberRepository;
pub use references::resolve_cast_member_ids;
pub use use_cases::*;
