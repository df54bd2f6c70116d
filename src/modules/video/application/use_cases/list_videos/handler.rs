use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::shared::{
    application::{pagination::Pagination, use_case::Query},
    config::CatalogConfig,
    errors::AppResult,
    utils::logger::TimedOperation,
};

use super::{query::ListVideosQuery, result::VideoListOutput};

pub struct ListVideosHandler {
    video_repository: Arc<dyn VideoRepository>,
    config: CatalogConfig,
}

impl ListVideosHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>, config: CatalogConfig) -> Self {
        Self {
            video_repository,
            config,
        }
    }
}

#[async_trait]
impl Query<ListVideosQuery, Pagination<VideoListOutput>> for ListVideosHandler {
    async fn execute(
        &self,
        query: ListVideosQuery,
    ) -> AppResult<Pagination<VideoListOutput>> {
        let timer = TimedOperation::new("ListVideos");
        let search = self.config.resolve_search(query.search);

        let page = self.video_repository.search(&search).await?;

        timer.finish();
        Ok(page.map(VideoListOutput::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::video::application::ports::MockVideoRepository;
    use crate::modules::video::domain::video::fixtures;
    use crate::shared::application::pagination::{ActiveFilter, SearchQuery};

    #[tokio::test]
    async fn blank_terms_are_dropped_and_all_videos_are_listed_by_default() {
        let mut repository = MockVideoRepository::new();
        repository
            .expect_search()
            .withf(|search: &SearchQuery| {
                search.terms.is_none() && search.active_filter == Some(ActiveFilter::All)
            })
            .returning(|search| {
                let items = vec![fixtures::video("Bacurau"), fixtures::video("Aquarius")];
                Ok(Pagination::new(items, 2, search.page, search.per_page))
            });

        let page = ListVideosHandler::new(Arc::new(repository), CatalogConfig::default())
            .execute(ListVideosQuery::new(SearchQuery::empty().with_terms("   ")))
            .await
            .unwrap();

        let titles: Vec<&str> = page.items.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Bacurau", "Aquarius"]);
        assert_eq!(page.current_page, 1);
    }
}
