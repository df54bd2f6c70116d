pub mod in_memory_video_repository;

pub use in_memory_video_repository::InMemoryVideoRepository;
