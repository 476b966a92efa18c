use chrono::{DateTime, Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use link_cards::domain::repositories::{LinkRepository, SessionRepository};
use link_cards::infrastructure::persistence::{PgLinkRepository, PgSessionRepository};

async fn create_user(pool: &PgPool, name: &str) -> i64 {
    PgSessionRepository::new(Arc::new(pool.clone()))
        .create_user(name)
        .await
        .unwrap()
        .id
}

async fn insert_link(pool: &PgPool, slug: &str, owner: Option<i64>, created_at: DateTime<Utc>) {
    sqlx::query(
        "INSERT INTO short_links (slug, url, created_by, created_at) VALUES ($1, $2, $3, $4)",
    )
    .bind(slug)
    .bind(format!("https://example.com/{slug}"))
    .bind(owner)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();
}

fn slugs(records: &[link_cards::domain::entities::ShortLinkRecord]) -> Vec<&str> {
    records.iter().map(|r| r.slug.as_str()).collect()
}

#[sqlx::test]
async fn test_find_by_slug(pool: PgPool) {
    let owner = create_user(&pool, "alice").await;
    sqlx::query(
        "INSERT INTO short_links (slug, url, description, views, created_by) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind("abc123")
    .bind("https://example.com/a%20b")
    .bind("Team wiki")
    .bind(1_234_i64)
    .bind(owner)
    .execute(&pool)
    .await
    .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo.find_by_slug("abc123").await.unwrap().unwrap();

    assert_eq!(link.slug, "abc123");
    assert_eq!(link.url, "https://example.com/a%20b");
    assert_eq!(link.description.as_deref(), Some("Team wiki"));
    assert_eq!(link.views, 1_234);
    assert_eq!(link.created_by, Some(owner));
}

#[sqlx::test]
async fn test_find_by_slug_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let result = repo.find_by_slug("missing").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());
}

#[sqlx::test]
async fn test_find_by_slug_without_owner(pool: PgPool) {
    insert_link(&pool, "orphan", None, Utc::now()).await;
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo.find_by_slug("orphan").await.unwrap().unwrap();

    assert_eq!(link.views, 0);
    assert!(link.description.is_none());
    assert!(link.created_by.is_none());
}

#[sqlx::test]
async fn test_list_by_owner_newest_first_with_paging(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let now = Utc::now();

    insert_link(&pool, "three-days", Some(alice), now - Duration::days(3)).await;
    insert_link(&pool, "one-day", Some(alice), now - Duration::days(1)).await;
    insert_link(&pool, "two-days", Some(alice), now - Duration::days(2)).await;
    insert_link(&pool, "bobs", Some(bob), now).await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    let first = repo.list_by_owner(alice, 0, 2).await.unwrap();
    assert_eq!(slugs(&first), vec!["one-day", "two-days"]);

    let second = repo.list_by_owner(alice, 2, 2).await.unwrap();
    assert_eq!(slugs(&second), vec!["three-days"]);

    let past_end = repo.list_by_owner(alice, 4, 2).await.unwrap();
    assert!(past_end.is_empty());
}

#[sqlx::test]
async fn test_list_by_owner_breaks_ties_by_newest_insert(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let same_instant = Utc::now() - Duration::hours(1);

    insert_link(&pool, "first", Some(alice), same_instant).await;
    insert_link(&pool, "second", Some(alice), same_instant).await;

    let repo = PgLinkRepository::new(Arc::new(pool));
    let links = repo.list_by_owner(alice, 0, 10).await.unwrap();

    assert_eq!(slugs(&links), vec!["second", "first"]);
}

#[sqlx::test]
async fn test_count_by_owner(pool: PgPool) {
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let now = Utc::now();

    insert_link(&pool, "a1", Some(alice), now).await;
    insert_link(&pool, "a2", Some(alice), now).await;
    insert_link(&pool, "a3", Some(alice), now).await;
    insert_link(&pool, "anon", None, now).await;

    let repo = PgLinkRepository::new(Arc::new(pool));

    assert_eq!(repo.count_by_owner(alice).await.unwrap(), 3);
    assert_eq!(repo.count_by_owner(bob).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
