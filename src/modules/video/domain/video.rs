use chrono::{DateTime, Utc};

use super::value_objects::{AudioVideoMedia, ImageMedia, MediaKind, Rating};
use super::video_validator::video_rules;
use crate::modules::cast_member::domain::CastMemberId;
use crate::modules::category::domain::CategoryId;
use crate::modules::genre::domain::GenreId;
use crate::shared::domain::{AggregateRoot, Identifier, Lifecycle, Searchable};
use crate::shared::validation::{Described, Notification, Validate};

crate::entity_id!(
    /// Identity of a [`Video`]
    VideoId
);

/// Descriptive attributes of a video, replaced together on update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoDetails {
    pub title: String,
    pub description: Option<String>,
    pub year_launched: i32,
    /// Running time in minutes
    pub duration: u32,
    pub opened: bool,
    pub published: bool,
    pub rating: Rating,
}

/// Media currently attached to a video, one optional asset per slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoMedias {
    pub trailer: Option<AudioVideoMedia>,
    pub video: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
}

/// The catalog's central aggregate.
///
/// Categories, genres and cast members are referenced by id; the video never
/// owns them and never checks that they exist.
#[derive(Debug, Clone)]
pub struct Video {
    id: VideoId,
    details: VideoDetails,
    categories: Vec<CategoryId>,
    genres: Vec<GenreId>,
    cast_members: Vec<CastMemberId>,
    medias: VideoMedias,
    lifecycle: Lifecycle,
}

impl Video {
    pub fn new_video(
        details: VideoDetails,
        categories: Vec<CategoryId>,
        genres: Vec<GenreId>,
        cast_members: Vec<CastMemberId>,
        is_active: bool,
    ) -> Self {
        Self {
            id: VideoId::unique(),
            details,
            categories: dedup(categories),
            genres: dedup(genres),
            cast_members: dedup(cast_members),
            medias: VideoMedias::default(),
            lifecycle: Lifecycle::new(is_active),
        }
    }

    /// Rehydrates a video from stored state
    pub fn with(
        id: VideoId,
        details: VideoDetails,
        categories: Vec<CategoryId>,
        genres: Vec<GenreId>,
        cast_members: Vec<CastMemberId>,
        medias: VideoMedias,
        lifecycle: Lifecycle,
    ) -> Self {
        Self {
            id,
            details,
            categories: dedup(categories),
            genres: dedup(genres),
            cast_members: dedup(cast_members),
            medias,
            lifecycle,
        }
    }

    pub fn update(
        &mut self,
        details: VideoDetails,
        categories: Vec<CategoryId>,
        genres: Vec<GenreId>,
        cast_members: Vec<CastMemberId>,
        is_active: bool,
    ) -> &mut Self {
        self.details = details;
        self.categories = dedup(categories);
        self.genres = dedup(genres);
        self.cast_members = dedup(cast_members);
        self.lifecycle.set_active(is_active);
        self
    }

    pub fn replace_categories(&mut self, categories: Vec<CategoryId>) -> &mut Self {
        self.categories = dedup(categories);
        self.lifecycle.touch();
        self
    }

    pub fn replace_genres(&mut self, genres: Vec<GenreId>) -> &mut Self {
        self.genres = dedup(genres);
        self.lifecycle.touch();
        self
    }

    pub fn replace_cast_members(&mut self, cast_members: Vec<CastMemberId>) -> &mut Self {
        self.cast_members = dedup(cast_members);
        self.lifecycle.touch();
        self
    }

    pub fn set_trailer(&mut self, media: AudioVideoMedia) -> &mut Self {
        self.medias.trailer = Some(media);
        self.lifecycle.touch();
        self
    }

    pub fn set_video(&mut self, media: AudioVideoMedia) -> &mut Self {
        self.medias.video = Some(media);
        self.lifecycle.touch();
        self
    }

    pub fn set_banner(&mut self, media: ImageMedia) -> &mut Self {
        self.medias.banner = Some(media);
        self.lifecycle.touch();
        self
    }

    pub fn set_thumbnail(&mut self, media: ImageMedia) -> &mut Self {
        self.medias.thumbnail = Some(media);
        self.lifecycle.touch();
        self
    }

    pub fn set_thumbnail_half(&mut self, media: ImageMedia) -> &mut Self {
        self.medias.thumbnail_half = Some(media);
        self.lifecycle.touch();
        self
    }

    /// Empties one media slot
    pub fn clear_media(&mut self, kind: MediaKind) -> &mut Self {
        match kind {
            MediaKind::Trailer => self.medias.trailer = None,
            MediaKind::Video => self.medias.video = None,
            MediaKind::Banner => self.medias.banner = None,
            MediaKind::Thumbnail => self.medias.thumbnail = None,
            MediaKind::ThumbnailHalf => self.medias.thumbnail_half = None,
        }
        self.lifecycle.touch();
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.lifecycle.activate();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        self.lifecycle.deactivate();
        self
    }

    pub fn details(&self) -> &VideoDetails {
        &self.details
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }

    pub fn categories(&self) -> &[CategoryId] {
        &self.categories
    }

    pub fn genres(&self) -> &[GenreId] {
        &self.genres
    }

    pub fn cast_members(&self) -> &[CastMemberId] {
        &self.cast_members
    }

    pub fn medias(&self) -> &VideoMedias {
        &self.medias
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.lifecycle.deleted_at()
    }
}

fn dedup<I: Identifier>(ids: Vec<I>) -> Vec<I> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}

impl Described for Video {
    fn name(&self) -> &str {
        &self.details.title
    }

    fn description(&self) -> Option<&str> {
        self.details.description.as_deref()
    }
}

impl Validate for Video {
    fn validate(&self, notification: &mut Notification) {
        video_rules().validate(self, notification);
    }
}

impl AggregateRoot for Video {
    type Id = VideoId;
    const NAME: &'static str = "Video";

    fn id(&self) -> VideoId {
        self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

impl Searchable for Video {
    fn sort_name(&self) -> &str {
        &self.details.title
    }

    fn search_text(&self) -> Vec<&str> {
        let mut text = vec![self.details.title.as_str()];
        text.extend(self.details.description.as_deref());
        text
    }
}
