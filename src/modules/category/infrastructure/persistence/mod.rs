pub mod in_memory_category_repository;

pub use in_memory_category_repository::InMemoryCategoryRepository;
