pub mod ports;
pub mod references;
pub mod use_cases;

pub use ports::GenreRepository;
pub use references::resolve_genre_ids;
pub use use_cases::*;
