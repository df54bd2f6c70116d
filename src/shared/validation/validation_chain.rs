use super::notification::Notification;

/// Capability of any domain object that can report its own rule violations.
///
/// Implementations must append *every* violation they find; stopping at the
/// first broken rule is not allowed.
pub trait Validate {
    fn validate(&self, notification: &mut Notification);

    /// Runs [`Validate::validate`] against a fresh notification.
    fn validation(&self) -> Notification {
        let mut notification = Notification::create();
        self.validate(&mut notification);
        notification
    }
}

/// A single named rule in a [`ValidationChain`].
pub trait ValidationRule<T>: Send + Sync {
    fn check(&self, target: &T, notification: &mut Notification);

    /// Get the name of this validation rule for logging
    fn rule_name(&self) -> &'static str;
}

/// Ordered set of rules applied to one target. Every rule always runs.
pub struct ValidationChain<T> {
    rules: Vec<Box<dyn ValidationRule<T>>>,
}

impl<T> ValidationChain<T> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a validation rule to the chain
    pub fn add_rule<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule<T> + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn validate(&self, target: &T, notification: &mut Notification) {
        for rule in &self.rules {
            let before = notification.len();
            rule.check(target, notification);

            if notification.len() > before {
                log::debug!(
                    "Validation rule '{}' reported {} error(s)",
                    rule.rule_name(),
                    notification.len() - before
                );
            }
        }
    }

    /// Get the number of rules in the chain
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl<T> Default for ValidationChain<T> {
    fn default() -> Self {
        Self::new()
    }
}
