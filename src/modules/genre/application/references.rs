use crate::modules::genre::application::ports::GenreRepository;
use crate::modules::genre::domain::GenreId;
use crate::shared::{
    application::references::{parse_references, report_missing},
    errors::AppResult,
    validation::Notification,
};

/// Field under which genre reference errors are reported
pub const GENRES_FIELD: &str = "genres";

/// Same contract as `resolve_category_ids`, for genre references of a video.
pub async fn resolve_genre_ids(
    repository: &dyn GenreRepository,
    raw_ids: &[String],
    notification: &mut Notification,
) -> AppResult<Vec<GenreId>> {
    let ids = parse_references(GENRES_FIELD, raw_ids, notification);
    if ids.is_empty() {
        return Ok(ids);
    }

    let existing = repository.existing_ids(&ids).await?;
    report_missing(GENRES_FIELD, "genres", &ids, &existing, notification);
    Ok(ids)
}
