use serde::Serialize;

use crate::modules::genre::domain::GenreId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateGenreResult {
    pub id: GenreId,
}
