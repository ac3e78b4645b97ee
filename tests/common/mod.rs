//! Helpers for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDateTime};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use newsdesk::db::{DbPool, establish_connection_pool};
use newsdesk::domain::article::NewArticle;
use newsdesk::domain::types::{
    ArticleTitle, ArticleType, AuthorId, CategoryId, HeroUrl, HtmlDescription, MediaUrl, TagName,
};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn timestamp(secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
}

/// Article fixture; AUDIO and VIDEO articles get a media link.
pub fn new_article(
    title: &str,
    category: i32,
    author: i32,
    kind: ArticleType,
    tags: &[&str],
    published: i64,
) -> NewArticle {
    NewArticle {
        title: ArticleTitle::new(title).unwrap(),
        subtitle: None,
        hero: HeroUrl::new("https://example.com/hero.jpg").unwrap(),
        article_type: kind,
        description: HtmlDescription::new("<p>Body</p>").unwrap(),
        media_url: kind
            .requires_media()
            .then(|| MediaUrl::new("https://example.com/clip.mp4").unwrap()),
        published: timestamp(published),
        category_id: CategoryId::new(category).unwrap(),
        author_id: AuthorId::new(author).unwrap(),
        tags: tags.iter().map(|t| TagName::new(*t).unwrap()).collect(),
    }
}
