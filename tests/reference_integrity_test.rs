/// Genres and videos may only point at categories, genres and cast members that exist
mod utils;

use catalog_lib::modules::genre::application::use_cases::{
    GetGenreByIdQuery, ListGenresQuery, UpdateGenreCommand,
};
use catalog_lib::modules::video::application::use_cases::{
    GetVideoByIdQuery, ListVideosQuery, UpdateVideoCommand,
};
use catalog_lib::modules::video::domain::Rating;
use catalog_lib::shared::application::{Query, UseCase};
use catalog_lib::SearchQuery;
use tokio_test::assert_ok;
use utils::{
    factories::{self, CategoryFactory, GenreFactory},
    helpers,
};

const UNKNOWN_ID: &str = "01hzy8m0v3k1q7c2x9w4e5r6t7";

#[tokio::test]
async fn genre_with_a_missing_category_is_rejected_and_not_stored() {
    let catalog = helpers::build_catalog();
    let known = helpers::create_category(&catalog, CategoryFactory::new().build()).await;

    let outcome = assert_ok!(
        catalog
            .genres
            .create
            .execute(GenreFactory::new().categories(&[&known, UNKNOWN_ID]).build())
            .await
    );

    let notification = helpers::rejection(outcome);
    assert_eq!(
        notification.messages(),
        vec![format!("Some categories could not be found: {}", UNKNOWN_ID).as_str()]
    );

    let listed = assert_ok!(
        catalog
            .genres
            .list
            .execute(ListGenresQuery::new(SearchQuery::empty()))
            .await
    );
    assert!(listed.is_empty());
}

#[tokio::test]
async fn genre_errors_come_before_reference_errors() {
    let catalog = helpers::build_catalog();

    let outcome = assert_ok!(
        catalog
            .genres
            .create
            .execute(GenreFactory::new().name("").categories(&["bogus", UNKNOWN_ID]).build())
            .await
    );

    let notification = helpers::rejection(outcome);
    assert_eq!(
        notification.messages(),
        vec![
            "'name' should not be empty".to_string(),
            "the Id bogus is invalid".to_string(),
            format!("Some categories could not be found: {}", UNKNOWN_ID),
        ]
    );
}

#[tokio::test]
async fn genre_keeps_each_category_once() {
    let catalog = helpers::build_catalog();
    let anime = helpers::create_category(&catalog, CategoryFactory::new().name("Anime").build()).await;
    let kids = helpers::create_category(&catalog, CategoryFactory::new().name("Kids").build()).await;

    let id = helpers::create_genre(
        &catalog,
        GenreFactory::new().categories(&[&anime, &kids, &anime]).build(),
    )
    .await;

    let genre = assert_ok!(catalog.genres.get.execute(GetGenreByIdQuery::new(id.clone())).await).unwrap();
    let categories: Vec<String> = genre.categories_id.iter().map(|c| c.to_string()).collect();
    assert_eq!(categories, vec![anime.clone(), kids]);

    let updated = assert_ok!(
        catalog
            .genres
            .update
            .execute(UpdateGenreCommand::new(id.clone(), "Drama", None, vec![anime.clone()], true))
            .await
    );
    assert!(updated.is_ok());

    let genre = assert_ok!(catalog.genres.get.execute(GetGenreByIdQuery::new(id)).await).unwrap();
    assert_eq!(genre.categories_id.len(), 1);
    assert_eq!(genre.categories_id[0].to_string(), anime);
}

#[tokio::test]
async fn video_reports_one_error_per_missing_kind() {
    let catalog = helpers::build_catalog();
    let category = helpers::create_category(&catalog, CategoryFactory::new().build()).await;

    let command = factories::video("Interstellar")
        .with_categories(vec![category])
        .with_genres(vec![UNKNOWN_ID.to_string()])
        .with_cast_members(vec![UNKNOWN_ID.to_string(), "nope".to_string()]);

    let outcome = assert_ok!(catalog.videos.create.execute(command).await);

    let notification = helpers::rejection(outcome);
    assert_eq!(
        notification.messages(),
        vec![
            format!("Some genres could not be found: {}", UNKNOWN_ID),
            "the Id nope is invalid".to_string(),
            format!("Some cast members could not be found: {}", UNKNOWN_ID),
        ]
    );

    let listed = assert_ok!(
        catalog
            .videos
            .list
            .execute(ListVideosQuery::new(SearchQuery::empty()))
            .await
    );
    assert_eq!(listed.total_count, 0);
}

#[tokio::test]
async fn video_with_known_references_is_stored_with_them() {
    let catalog = helpers::build_catalog();
    let category = helpers::create_category(&catalog, CategoryFactory::new().build()).await;
    let genre = helpers::create_genre(
        &catalog,
        GenreFactory::new().categories(&[&category]).build(),
    )
    .await;
    let actor = helpers::create_cast_member(&catalog, factories::actor("Matthew McConaughey")).await;
    let director = helpers::create_cast_member(&catalog, factories::director("Christopher Nolan")).await;

    let created = assert_ok!(
        catalog
            .videos
            .create
            .execute(
                factories::video("Interstellar")
                    .with_categories(vec![category.clone()])
                    .with_genres(vec![genre.clone()])
                    .with_cast_members(vec![actor.clone(), director.clone()]),
            )
            .await
    )
    .unwrap();

    let video = assert_ok!(
        catalog
            .videos
            .get
            .execute(GetVideoByIdQuery::new(created.id.to_string()))
            .await
    )
    .unwrap();

    assert_eq!(video.title, "Interstellar");
    assert_eq!(video.rating, Rating::Age10);
    assert_eq!(video.categories_id[0].to_string(), category);
    assert_eq!(video.genres_id[0].to_string(), genre);
    let members: Vec<String> = video.cast_members_id.iter().map(|m| m.to_string()).collect();
    assert_eq!(members, vec![actor, director]);
}

#[tokio::test]
async fn video_update_with_a_missing_reference_leaves_the_video_untouched() {
    let catalog = helpers::build_catalog();
    let created = assert_ok!(catalog.videos.create.execute(factories::video("Arrival")).await).unwrap();
    let id = created.id.to_string();

    let outcome = assert_ok!(
        catalog
            .videos
            .update
            .execute(
                UpdateVideoCommand::new(id.clone(), "Arrival (2016)", 2016, 116, Rating::Age12)
                    .with_references(vec![UNKNOWN_ID.to_string()], vec![], vec![]),
            )
            .await
    );
    assert_eq!(helpers::rejection(outcome).len(), 1);

    let video = assert_ok!(catalog.videos.get.execute(GetVideoByIdQuery::new(id)).await).unwrap();
    assert_eq!(video.title, "Arrival");
    assert!(video.categories_id.is_empty());
}
