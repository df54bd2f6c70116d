pub mod persistence;

pub use persistence::InMemoryCastMemberRepository;
