//! Cross-aggregate reference checks used by use cases.
//!
//! Aggregates hold references as plain ids and never verify them; the use case
//! parses the raw ids of a command and asks the owning repository which exist.
use crate::shared::domain::Identifier;
use crate::shared::validation::{Notification, ValidationError};

/// Parses raw reference ids, dropping duplicates and keeping first-seen order.
///
/// Every malformed value appends its own error under `field`.
pub fn parse_references<I: Identifier>(
    field: &str,
    raw_ids: &[String],
    notification: &mut Notification,
) -> Vec<I> {
    let mut ids: Vec<I> = Vec::with_capacity(raw_ids.len());
    for raw in raw_ids {
        match I::from_string(raw) {
            Ok(id) if !ids.contains(&id) => ids.push(id),
            Ok(_) => {}
            Err(err) => {
                notification.append(err.at(field));
            }
        }
    }
    ids
}

/// Appends one error listing every requested id absent from `existing`.
pub fn report_missing<I: Identifier>(
    field: &str,
    label: &str,
    requested: &[I],
    existing: &[I],
    notification: &mut Notification,
) {
    let missing: Vec<String> = requested
        .iter()
        .filter(|id| !existing.contains(id))
        .map(|id| id.value())
        .collect();

    if !missing.is_empty() {
        notification.append(ValidationError::new(
            field,
            format!("Some {} could not be found: {}", label, missing.join(", ")),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::entity_id!(RefId);

    #[test]
    fn parse_references_reports_each_malformed_id_and_dedups() {
        let valid = RefId::unique();
        let raw = vec![
            valid.value(),
            "bad-1".to_string(),
            valid.value().to_uppercase(),
            "bad-2".to_string(),
        ];
        let mut notification = Notification::create();

        let ids: Vec<RefId> = parse_references("categories", &raw, &mut notification);

        assert_eq!(ids, vec![valid]);
        assert_eq!(
            notification.messages(),
            vec!["the Id bad-1 is invalid", "the Id bad-2 is invalid"]
        );
        assert!(notification
            .errors()
            .iter()
            .all(|error| error.field == "categories"));
    }

    #[test]
    fn report_missing_lists_all_missing_ids_in_one_error() {
        let present = RefId::unique();
        let first_missing = RefId::unique();
        let second_missing = RefId::unique();
        let mut notification = Notification::create();

        report_missing(
            "categories",
            "categories",
            &[first_missing, present, second_missing],
            &[present],
            &mut notification,
        );

        assert_eq!(notification.len(), 1);
        assert_eq!(
            notification.first_error().unwrap().message,
            format!(
                "Some categories could not be found: {}, {}",
                first_missing, second_missing
            )
        );
    }

    #[test]
    fn report_missing_is_silent_when_everything_exists() {
        let id = RefId::unique();
        let mut notification = Notification::create();

        report_missing("genres", "genres", &[id], &[id], &mut notification);

        assert!(!notification.has_errors());
    }
}
