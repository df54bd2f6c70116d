use crate::modules::cast_member::application::ports::CastMemberRepository;
use crate::modules::cast_member::domain::CastMemberId;
use crate::shared::{
    application::references::{parse_references, report_missing},
    errors::AppResult,
    validation::Notification,
};

/// Field under which cast member reference errors are reported
pub const CAST_MEMBERS_FIELD: &str = "castMembers";

pub async fn resolve_cast_member_ids(
    repository: &dyn CastMemberRepository,
    raw_ids: &[String],
    notification: &mut Notification,
) -> AppResult<Vec<CastMemberId>> {
    let ids = parse_references(CAST_MEMBERS_FIELD, raw_ids, notification);
    if ids.is_empty() {
        return Ok(ids);
    }

    let existing = repository.existing_ids(&ids).await?;
    report_missing(CAST_MEMBERS_FIELD, "cast members", &ids, &existing, notification);
    Ok(ids)
}
