pub mod persistence;

pub use persistence::InMemoryGenreRepository;
