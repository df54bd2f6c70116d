pub mod ports;
pub mod references;
pub mod use_cases;

pub use ports::VideoRepository;
pub use references::{ReferenceRepositories, ResolvedReferences};
pub use use_cases::*;
