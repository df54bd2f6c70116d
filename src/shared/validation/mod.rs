//! Notification-pattern validation shared by every bounded context.
pub mod notification;
pub mod validation_chain;
pub mod validation_rules;

pub use notification::{Notification, ValidationError};
pub use validation_chain::{Validate, ValidationChain, ValidationRule};
pub use validation_rules::{Described, DescriptionRule, NameRule};
