pub mod ports;
pub mod references;
pub mod use_cases;

pub use ports::CategoryRepository;
pub use references::resolve_category_ids;
pub use use_cases::*;
