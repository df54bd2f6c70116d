//! Reusable field checks shared by every aggregate validator.
use super::notification::{Notification, ValidationError};
use super::validation_chain::ValidationRule;

pub const NAME_MIN_LENGTH: usize = 1;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

pub fn empty_error(field: &str) -> ValidationError {
    ValidationError::new(field, format!("'{}' should not be empty", field))
}

pub fn length_range_error(field: &str, min: usize, max: usize) -> ValidationError {
    ValidationError::new(
        field,
        format!(
            "'{}' length must be between {} and {} characters",
            field, min, max
        ),
    )
}

pub fn max_length_error(field: &str, max: usize) -> ValidationError {
    ValidationError::new(
        field,
        format!("'{}' length must be at most {} characters", field, max),
    )
}

/// Required text: must not be blank, and its trimmed length must fall in `min..=max`.
///
/// A blank value yields only the emptiness error, so one bad field never
/// produces two messages.
pub fn require_text(
    field: &str,
    value: &str,
    min: usize,
    max: usize,
    notification: &mut Notification,
) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        notification.append(empty_error(field));
        return;
    }

    let length = trimmed.chars().count();
    if length < min || length > max {
        notification.append(length_range_error(field, min, max));
    }
}

/// Optional text: absent is fine, present must not exceed `max` characters.
pub fn limit_length(field: &str, value: Option<&str>, max: usize, notification: &mut Notification) {
    if let Some(value) = value {
        if value.chars().count() > max {
            notification.append(max_length_error(field, max));
        }
    }
}

pub fn require_not_blank(field: &str, value: &str, notification: &mut Notification) {
    if value.trim().is_empty() {
        notification.append(empty_error(field));
    }
}

/// Aggregates carrying a display name (or title) and an optional description.
pub trait Described {
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;
}

/// Required name rule; `field` is "name" for most aggregates and "title" for videos.
pub struct NameRule {
    field: &'static str,
    min: usize,
}

impl NameRule {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            min: NAME_MIN_LENGTH,
        }
    }

    /// Raises the minimum trimmed length above the default of one character
    pub fn min(mut self, min: usize) -> Self {
        self.min = min;
        self
    }
}

impl<T: Described> ValidationRule<T> for NameRule {
    fn check(&self, target: &T, notification: &mut Notification) {
        require_text(
            self.field,
            target.name(),
            self.min,
            NAME_MAX_LENGTH,
            notification,
        );
    }

    fn rule_name(&self) -> &'static str {
        "NameValidation"
    }
}

pub struct DescriptionRule;

impl<T: Described> ValidationRule<T> for DescriptionRule {
    fn check(&self, target: &T, notification: &mut Notification) {
        limit_length(
            "description",
            target.description(),
            DESCRIPTION_MAX_LENGTH,
            notification,
        );
    }

    fn rule_name(&self) -> &'static str {
        "DescriptionValidation"
    }
}
