use serde::Serialize;

use crate::modules::video::domain::VideoId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateVideoResult {
    pub id: VideoId,
}
