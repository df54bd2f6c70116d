/// Catalog builders and shortcuts shared by integration tests
use catalog_lib::modules::cast_member::application::use_cases::CreateCastMemberCommand;
use catalog_lib::modules::category::application::use_cases::CreateCategoryCommand;
use catalog_lib::modules::genre::application::use_cases::CreateGenreCommand;
use catalog_lib::shared::application::UseCase;
use catalog_lib::{Catalog, CatalogConfig, Notification, UseCaseOutcome};

pub fn build_catalog() -> Catalog {
    Catalog::in_memory(CatalogConfig::default())
}

pub fn build_catalog_with(config: CatalogConfig) -> Catalog {
    Catalog::in_memory(config)
}

/// Unwraps a rejected outcome, panicking on success or NotFound
pub fn rejection<T: std::fmt::Debug>(outcome: UseCaseOutcome<T>) -> Notification {
    match outcome {
        Err(failure) => failure
            .notification()
            .cloned()
            .unwrap_or_else(|| panic!("expected a validation failure, got {:?}", failure)),
        Ok(value) => panic!("expected a validation failure, got {:?}", value),
    }
}

pub async fn create_category(catalog: &Catalog, command: CreateCategoryCommand) -> String {
    catalog
        .categories
        .create
        .execute(command)
        .await
        .expect("storage fault")
        .expect("category should be valid")
        .id
        .to_string()
}

pub async fn create_genre(catalog: &Catalog, command: CreateGenreCommand) -> String {
    catalog
        .genres
        .create
        .execute(command)
        .await
        .expect("storage fault")
        .expect("genre should be valid")
        .id
        .to_string()
}

pub async fn create_cast_member(catalog: &Catalog, command: CreateCastMemberCommand) -> String {
    catalog
        .cast_members
        .create
        .execute(command)
        .await
        .expect("storage fault")
        .expect("cast member should be valid")
        .id
        .to_string()
}
