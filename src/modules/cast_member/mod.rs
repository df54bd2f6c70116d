//! Cast members: actors and directors credited on videos.
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::CastMemberRepository;
pub use domain::{CastMember, CastMemberId, CastMemberType};
pub use infrastructure::InMemoryCastMemberRepository;
