use crate::modules::category::application::ports::CategoryRepository;
use crate::modules::category::domain::CategoryId;
use crate::shared::{
    application::references::{parse_references, report_missing},
    errors::AppResult,
    validation::Notification,
};

/// Field under which category reference errors are reported
pub const CATEGORIES_FIELD: &str = "categories";

/// Parses raw category ids and reports malformed or unknown ones.
///
/// Returns the parsed ids (deduplicated) whether or not they all exist, so the
/// caller can keep building its aggregate and report everything at once.
pub async fn resolve_category_ids(
    repository: &dyn CategoryRepository,
    raw_ids: &[String],
    notification: &mut Notification,
) -> AppResult<Vec<CategoryId>> {
    let ids = parse_references(CATEGORIES_FIELD, raw_ids, notification);
    if ids.is_empty() {
        return Ok(ids);
    }

    let existing = repository.existing_ids(&ids).await?;
    report_missing(CATEGORIES_FIELD, "categories", &ids, &existing, notification);
    Ok(ids)
}
