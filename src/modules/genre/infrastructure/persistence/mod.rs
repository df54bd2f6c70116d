pub mod in_memory_genre_repository;

pub use in_memory_genre_repository::InMemoryGenreRepository;
