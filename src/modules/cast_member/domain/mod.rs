pub mod cast_member;
pub mod cast_member_type;

pub use cast_member::{CastMember, CastMemberId};
pub use cast_member_type::{CastMemberType, UnknownCastMemberType};
