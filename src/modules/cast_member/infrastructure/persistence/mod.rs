pub mod in_memory_cast_member_repository;

pub use in_memory_cast_member_repository::InMemoryCastMemberRepository;
