//! Rules a [`Video`] must satisfy before it can be saved.
use chrono::{Datelike, Utc};

use super::video::Video;
use crate::shared::validation::{
    validation_rules::limit_length, DescriptionRule, NameRule, Notification, ValidationChain,
    ValidationError, ValidationRule,
};

/// First year of commercial film exhibition
pub const FIRST_YEAR_LAUNCHED: i32 = 1888;
/// How far ahead of the current year a launch may be announced
pub const YEARS_AHEAD: i32 = 10;
pub const MEDIA_NAME_MAX_LENGTH: usize = 255;

pub fn video_rules() -> ValidationChain<Video> {
    ValidationChain::new()
        .add_rule(NameRule::new("title"))
        .add_rule(DescriptionRule)
        .add_rule(YearLaunchedRule)
        .add_rule(DurationRule)
        .add_rule(MediaRule)
}

pub struct YearLaunchedRule;

impl ValidationRule<Video> for YearLaunchedRule {
    fn check(&self, video: &Video, notification: &mut Notification) {
        let latest = Utc::now().year() + YEARS_AHEAD;
        let year = video.details().year_launched;
        if !(FIRST_YEAR_LAUNCHED..=latest).contains(&year) {
            notification.append(ValidationError::new(
                "yearLaunched",
                format!(
                    "'yearLaunched' must be between {} and {}",
                    FIRST_YEAR_LAUNCHED, latest
                ),
            ));
        }
    }

    fn rule_name(&self) -> &'static str {
        "YearLaunchedValidation"
    }
}

pub struct DurationRule;

impl ValidationRule<Video> for DurationRule {
    fn check(&self, video: &Video, notification: &mut Notification) {
        if video.details().duration == 0 {
            notification.append(ValidationError::new(
                "duration",
                "'duration' must be greater than 0",
            ));
        }
    }

    fn rule_name(&self) -> &'static str {
        "DurationValidation"
    }
}

/// Validates every media asset present on the video
pub struct MediaRule;

impl ValidationRule<Video> for MediaRule {
    fn check(&self, video: &Video, notification: &mut Notification) {
        let medias = video.medias();

        for (field, media) in [("trailer", &medias.trailer), ("video", &medias.video)] {
            if let Some(media) = media {
                media.validate_at(field, notification);
                limit_length(
                    &format!("{}.name", field),
                    Some(&media.name),
                    MEDIA_NAME_MAX_LENGTH,
                    notification,
                );
            }
        }

        for (field, media) in [
            ("banner", &medias.banner),
            ("thumbnail", &medias.thumbnail),
            ("thumbnailHalf", &medias.thumbnail_half),
        ] {
            if let Some(media) = media {
                media.validate_at(field, notification);
                limit_length(
                    &format!("{}.name", field),
                    Some(&media.name),
                    MEDIA_NAME_MAX_LENGTH,
                    notification,
                );
            }
        }
    }

    fn rule_name(&self) -> &'static str {
        "MediaValidation"
    }
}
