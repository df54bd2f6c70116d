pub mod video_repository;

pub use video_repository::VideoRepository;

#[cfg(test)]
pub use video_repository::MockVideoRepository;
