pub mod change_video_status;
pub mod create_video;
pub mod delete_video;
pub mod get_video;
pub mod list_videos;
pub mod update_video;
pub mod update_video_media;

pub use change_video_status::{
    ChangeVideoStatusCommand, ChangeVideoStatusHandler, ChangeVideoStatusResult,
};
pub use create_video::{CreateVideoCommand, CreateVideoHandler, CreateVideoResult};
pub use delete_video::{DeleteVideoCommand, DeleteVideoHandler};
pub use get_video::{GetVideoByIdHandler, GetVideoByIdQuery, VideoOutput};
pub use list_videos::{ListVideosHandler, ListVideosQuery, VideoListOutput};
pub use update_video::{UpdateVideoCommand, UpdateVideoHandler, UpdateVideoResult};
pub use update_video_media::{
    UpdateVideoMediaCommand, UpdateVideoMediaHandler, UpdateVideoMediaResult,
};
