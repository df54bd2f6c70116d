use serde::{Deserialize, Serialize};
use std::fmt;

/// A single rule violation: where it happened and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Error reported when an identifier cannot be parsed.
    pub fn invalid_id(field: impl Into<String>, value: &str) -> Self {
        Self::new(field, format!("the Id {} is invalid", value))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Ordered accumulator of validation errors.
///
/// Validation code appends to a `Notification` instead of returning on the
/// first violation, so a caller always sees every problem of a command at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn with_error(error: ValidationError) -> Self {
        let mut notification = Self::create();
        notification.append(error);
        notification
    }

    pub fn append(&mut self, error: ValidationError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// Appends every error of `other`, keeping their order.
    pub fn merge(&mut self, other: Notification) -> &mut Self {
        self.errors.extend(other.errors);
        self
    }

    /// Runs a fallible step, recording its error instead of propagating it.
    pub fn capture<T, E>(&mut self, step: impl FnOnce() -> Result<T, E>) -> Option<T>
    where
        E: Into<ValidationError>,
    {
        match step() {
            Ok(value) => Some(value),
            Err(err) => {
                self.append(err.into());
                None
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.errors.iter().filter(move |error| error.field == field)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|error| error.message.as_str()).collect()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

impl Extend<ValidationError> for Notification {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl FromIterator<ValidationError> for Notification {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Notification {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a Notification {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(field: &str, message: &str) -> ValidationError {
        ValidationError::new(field, message)
    }

    #[test]
    fn new_notification_has_no_errors() {
        let notification = Notification::create();

        assert!(!notification.has_errors());
        assert!(notification.first_error().is_none());
        assert_eq!(notification.len(), 0);
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut notification = Notification::create();
        notification
            .append(error("name", "first"))
            .append(error("description", "second"));

        assert!(notification.has_errors());
        assert_eq!(notification.messages(), vec!["first", "second"]);
        assert_eq!(notification.first_error().unwrap().field, "name");
    }

    #[test]
    fn merge_is_associative_and_order_preserving() {
        let a = Notification::with_error(error("a", "a1"));
        let b: Notification = vec![error("b", "b1"), error("b", "b2")].into_iter().collect();
        let c = Notification::with_error(error("c", "c1"));

        let mut left = a.clone();
        left.merge(b.clone()).merge(c.clone());

        let mut bc = b.clone();
        bc.merge(c.clone());
        let mut right = a.clone();
        right.merge(bc);

        assert_eq!(left, right);
        assert_eq!(left.messages(), vec!["a1", "b1", "b2", "c1"]);
    }

    #[test]
    fn merging_empty_notification_changes_nothing() {
        let mut notification = Notification::with_error(error("name", "boom"));
        notification.merge(Notification::create());

        assert_eq!(notification.len(), 1);
    }

    #[test]
    fn capture_records_failure_and_returns_none() {
        let mut notification = Notification::create();

        let ok: Option<u8> = notification.capture(|| Ok::<_, ValidationError>(7));
        let failed: Option<u8> =
            notification.capture(|| Err(ValidationError::invalid_id("categories", "xyz")));

        assert_eq!(ok, Some(7));
        assert_eq!(failed, None);
        assert_eq!(notification.messages(), vec!["the Id xyz is invalid"]);
    }

    #[test]
    fn errors_for_filters_by_field() {
        let notification: Notification = vec![
            error("name", "n1"),
            error("description", "d1"),
            error("name", "n2"),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = notification
            .errors_for("name")
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(names, vec!["n1", "n2"]);
    }

    #[test]
    fn display_joins_messages() {
        let notification: Notification = vec![error("a", "one"), error("b", "two")]
            .into_iter()
            .collect();

        assert_eq!(notification.to_string(), "one; two");
    }
}
