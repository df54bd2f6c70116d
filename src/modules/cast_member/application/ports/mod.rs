pub mod cast_member_repository;

pub use cast_member_repository::CastMemberRepository;

#[cfg(test)]
pub use cast_member_repository::MockCastMemberRepository;
