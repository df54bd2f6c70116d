//! Composition root: wires repositories and handlers of every bounded context.
//!
//! A delivery layer (HTTP, CLI, desktop commands) owns one [`Catalog`] and calls
//! the handler it needs; the handlers themselves know nothing about delivery.
use std::sync::Arc;

use crate::modules::cast_member::application::use_cases::{
    ChangeCastMemberStatusHandler, CreateCastMemberHandler, DeleteCastMemberHandler,
    GetCastMemberByIdHandler, ListCastMembersHandler, UpdateCastMemberHandler,
};
use crate::modules::cast_member::{CastMemberRepository, InMemoryCastMemberRepository};
use crate::modules::category::application::use_cases::{
    ChangeCategoryStatusHandler, CreateCategoryHandler, DeleteCategoryHandler,
    GetCategoryByIdHandler, ListCategoriesHandler, UpdateCategoryHandler,
};
use crate::modules::category::{CategoryRepository, InMemoryCategoryRepository};
use crate::modules::genre::application::use_cases::{
    ChangeGenreStatusHandler, CreateGenreHandler, DeleteGenreHandler, GetGenreByIdHandler,
    ListGenresHandler, UpdateGenreHandler,
};
use crate::modules::genre::{GenreRepository, InMemoryGenreRepository};
use crate::modules::video::application::use_cases::{
    ChangeVideoStatusHandler, CreateVideoHandler, DeleteVideoHandler, GetVideoByIdHandler,
    ListVideosHandler, UpdateVideoHandler, UpdateVideoMediaHandler,
};
use crate::modules::video::{InMemoryVideoRepository, ReferenceRepositories, VideoRepository};
use crate::shared::config::CatalogConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::logger::init_logger;

/// Repository adapters shared by all handlers
#[derive(Clone)]
pub struct Repositories {
    pub categories: Arc<dyn CategoryRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub cast_members: Arc<dyn CastMemberRepository>,
    pub videos: Arc<dyn VideoRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(InMemoryCategoryRepository::new()),
            genres: Arc::new(InMemoryGenreRepository::new()),
            cast_members: Arc::new(InMemoryCastMemberRepository::new()),
            videos: Arc::new(InMemoryVideoRepository::new()),
        }
    }

    fn references(&self) -> ReferenceRepositories {
        ReferenceRepositories::new(
            Arc::clone(&self.categories),
            Arc::clone(&self.genres),
            Arc::clone(&self.cast_members),
        )
    }
}

pub struct CategoryUseCases {
    pub create: CreateCategoryHandler,
    pub update: UpdateCategoryHandler,
    pub change_status: ChangeCategoryStatusHandler,
    pub delete: DeleteCategoryHandler,
    pub get: GetCategoryByIdHandler,
    pub list: ListCategoriesHandler,
}

pub struct GenreUseCases {
    pub create: CreateGenreHandler,
    pub update: UpdateGenreHandler,
    pub change_status: ChangeGenreStatusHandler,
    pub delete: DeleteGenreHandler,
    pub get: GetGenreByIdHandler,
    pub list: ListGenresHandler,
}

pub struct CastMemberUseCases {
    pub create: CreateCastMemberHandler,
    pub update: UpdateCastMemberHandler,
    pub change_status: ChangeCastMemberStatusHandler,
    pub delete: DeleteCastMemberHandler,
    pub get: GetCastMemberByIdHandler,
    pub list: ListCastMembersHandler,
}

pub struct VideoUseCases {
    pub create: CreateVideoHandler,
    pub update: UpdateVideoHandler,
    pub change_status: ChangeVideoStatusHandler,
    pub update_media: UpdateVideoMediaHandler,
    pub delete: DeleteVideoHandler,
    pub get: GetVideoByIdHandler,
    pub list: ListVideosHandler,
}

/// Every use case of the catalog, grouped by aggregate.
pub struct Catalog {
    config: CatalogConfig,
    repositories: Repositories,
    pub categories: CategoryUseCases,
    pub genres: GenreUseCases,
    pub cast_members: CastMemberUseCases,
    pub videos: VideoUseCases,
}

impl Catalog {
    /// Startup entry point: logging, `.env`/environment settings and in-memory storage
    pub fn from_env() -> AppResult<Self> {
        init_logger();
        let config = CatalogConfig::from_env()?;
        Ok(Self::in_memory(config))
    }

    pub fn in_memory(config: CatalogConfig) -> Self {
        Self::new(Repositories::in_memory(), config)
    }

    pub fn new(repositories: Repositories, config: CatalogConfig) -> Self {
        let categories = CategoryUseCases {
            create: CreateCategoryHandler::new(Arc::clone(&repositories.categories)),
            update: UpdateCategoryHandler::new(Arc::clone(&repositories.categories)),
            change_status: ChangeCategoryStatusHandler::new(Arc::clone(&repositories.categories)),
            delete: DeleteCategoryHandler::new(Arc::clone(&repositories.categories)),
            get: GetCategoryByIdHandler::new(Arc::clone(&repositories.categories)),
            list: ListCategoriesHandler::new(Arc::clone(&repositories.categories), config.clone()),
        };

        let genres = GenreUseCases {
            create: CreateGenreHandler::new(
                Arc::clone(&repositories.genres),
                Arc::clone(&repositories.categories),
            ),
            update: UpdateGenreHandler::new(
                Arc::clone(&repositories.genres),
                Arc::clone(&repositories.categories),
            ),
            change_status: ChangeGenreStatusHandler::new(Arc::clone(&repositories.genres)),
            delete: DeleteGenreHandler::new(Arc::clone(&repositories.genres)),
            get: GetGenreByIdHandler::new(Arc::clone(&repositories.genres)),
            list: ListGenresHandler::new(Arc::clone(&repositories.genres), config.clone()),
        };

        let cast_members = CastMemberUseCases {
            create: CreateCastMemberHandler::new(Arc::clone(&repositories.cast_members)),
            update: UpdateCastMemberHandler::new(Arc::clone(&repositories.cast_members)),
            change_status: ChangeCastMemberStatusHandler::new(Arc::clone(
                &repositories.cast_members,
            )),
            delete: DeleteCastMemberHandler::new(Arc::clone(&repositories.cast_members)),
            get: GetCastMemberByIdHandler::new(Arc::clone(&repositories.cast_members)),
            list: ListCastMembersHandler::new(
                Arc::clone(&repositories.cast_members),
                config.clone(),
            ),
        };

        let references = repositories.references();
        let videos = VideoUseCases {
            create: CreateVideoHandler::new(Arc::clone(&repositories.videos), references.clone()),
            update: UpdateVideoHandler::new(Arc::clone(&repositories.videos), references),
            change_status: ChangeVideoStatusHandler::new(Arc::clone(&repositories.videos)),
            update_media: UpdateVideoMediaHandler::new(Arc::clone(&repositories.videos)),
            delete: DeleteVideoHandler::new(Arc::clone(&repositories.videos)),
            get: GetVideoByIdHandler::new(Arc::clone(&repositories.videos)),
            list: ListVideosHandler::new(Arc::clone(&repositories.videos), config.clone()),
        };

        log::info!("Catalog wired with {:?}", config);

        Self {
            config,
            repositories,
            categories,
            genres,
            cast_members,
            videos,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn repositories(&self) -> &Repositories {
        &self.repositories
    }
}
