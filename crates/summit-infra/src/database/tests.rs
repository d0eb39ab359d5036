use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ConnectOptions, DatabaseBackend, MockDatabase, MockExecResult};
use sea_orm_migration::MigratorTrait;

use summit_core::domain::{NewPost, Post, PostChanges};
use summit_core::error::RepoError;
use summit_core::ports::PostRepository;

use crate::database::entity::post;
use crate::database::{DatabaseConnections, Migrator, SqlPostRepository};

fn model(id: i32, content: &str) -> post::Model {
    post::Model {
        id,
        date: "2024-05-01T12:00:00Z".to_owned(),
        content: content.to_owned(),
        image: "/images/test.png".to_owned(),
        likes: 0,
        poster: "tester".to_owned(),
        comments_count: 0,
    }
}

/// Fresh in-memory SQLite database with migrations applied.
async fn sqlite_connections() -> DatabaseConnections {
    // One connection, otherwise every pooled connection gets its own database.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .to_owned();
    DatabaseConnections::open(opts).await.unwrap()
}

async fn sqlite_repo() -> Box<dyn PostRepository> {
    Box::new(SqlPostRepository::new(sqlite_connections().await.main))
}

fn mock_repo(db: MockDatabase) -> Box<dyn PostRepository> {
    Box::new(SqlPostRepository::new(db.into_connection()))
}

#[test]
fn test_insert_model_leaves_id_to_database() {
    let active = post::ActiveModel::from(NewPost::new("hello").with_poster("alice"));

    assert_eq!(active.id, NotSet);
    assert_eq!(active.content, Set("hello".to_owned()));
    assert_eq!(active.poster, Set("alice".to_owned()));
    assert_eq!(active.image, Set(String::new()));
    assert_eq!(active.likes, Set(0));
    assert_eq!(active.comments_count, Set(0));
}

#[tokio::test]
async fn test_find_post_by_id() {
    let repo = mock_repo(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, "Test Post")]]),
    );

    let result: Option<Post> = repo.find_by_id(1).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.content, "Test Post");
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn test_delete_missing_row_is_not_found() {
    let repo = mock_repo(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(
        vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }],
    ));

    assert!(matches!(repo.delete(42).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    // UPDATE ... RETURNING yields no row for an unknown id.
    let repo = mock_repo(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()]),
    );
    let changes = PostChanges {
        likes: Some(5),
        ..Default::default()
    };

    assert!(matches!(
        repo.update(42, changes).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let connections = sqlite_connections().await;

    // A second run on the same database has nothing to apply.
    Migrator::up(&connections.main, None).await.unwrap();

    let repo: Box<dyn PostRepository> = Box::new(SqlPostRepository::new(connections.main));
    repo.create(NewPost::new("kept")).await.unwrap();
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_fills_defaults() {
    let repo = sqlite_repo().await;

    let post = repo
        .create(
            NewPost::new("Test Post")
                .with_image("/images/test.png")
                .with_poster("tester"),
        )
        .await
        .unwrap();

    assert!(post.id > 0);
    assert_eq!(post.likes, 0);
    assert_eq!(post.comments_count, 0);
    assert!(!post.date.is_empty());

    let fetched = repo.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(fetched, post);
}

#[tokio::test]
async fn test_update_changes_only_supplied_fields() {
    let repo = sqlite_repo().await;
    let post = repo
        .create(
            NewPost::new("Initial Content")
                .with_image("/images/test.png")
                .with_poster("tester"),
        )
        .await
        .unwrap();

    let changes = PostChanges {
        likes: Some(5),
        ..Default::default()
    };
    let updated = repo.update(post.id, changes).await.unwrap();

    assert_eq!(updated.likes, 5);
    assert_eq!(updated.content, "Initial Content");
    assert_eq!(updated.image, "/images/test.png");
    assert_eq!(updated.poster, "tester");
    assert_eq!(updated.date, post.date);
}

#[tokio::test]
async fn test_empty_update_returns_current_record() {
    let repo = sqlite_repo().await;
    let post = repo.create(NewPost::new("as is")).await.unwrap();

    let same = repo.update(post.id, PostChanges::default()).await.unwrap();
    assert_eq!(same, post);

    assert!(matches!(
        repo.update(post.id + 1, PostChanges::default()).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_update_after_delete_is_not_found() {
    let repo = sqlite_repo().await;
    let post = repo.create(NewPost::new("short lived")).await.unwrap();
    repo.delete(post.id).await.unwrap();

    let changes = PostChanges {
        content: Some("too late".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        repo.update(post.id, changes).await,
        Err(RepoError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_is_permanent() {
    let repo = sqlite_repo().await;
    let post = repo.create(NewPost::new("Test Post for Delete")).await.unwrap();

    repo.delete(post.id).await.unwrap();

    assert_eq!(repo.find_by_id(post.id).await.unwrap(), None);
    assert!(matches!(repo.delete(post.id).await, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_all_returns_every_post() {
    let repo = sqlite_repo().await;
    assert!(repo.find_all().await.unwrap().is_empty());

    for content in ["first", "second", "third"] {
        repo.create(NewPost::new(content)).await.unwrap();
    }

    let contents: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.content)
        .collect();
    assert_eq!(contents, vec!["first", "second", "third"]);
}
