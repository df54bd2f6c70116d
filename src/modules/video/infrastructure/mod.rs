pub mod persistence;

pub use persistence::InMemoryVideoRepository;
