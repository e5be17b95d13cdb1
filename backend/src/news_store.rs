//! SQLite-backed store for news articles.
//!
//! One table, schema created on open. Callers hand in wire-shaped records
//! (`date` as ISO-8601 timestamp); ids are assigned here.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use intl_office_shared::{NewsArticle, NewsListItem};
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS news_articles (
    id           TEXT PRIMARY KEY,
    title        TEXT NOT NULL,
    category     TEXT NOT NULL,
    summary      TEXT NOT NULL,
    content      TEXT NOT NULL,
    image_url    TEXT NOT NULL DEFAULT '',
    is_featured  INTEGER NOT NULL DEFAULT 0,
    date         TEXT NOT NULL,
    is_published INTEGER NOT NULL DEFAULT 1,
    created_at   INTEGER NOT NULL,
    updated_at   INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_news_articles_date ON news_articles(date);
CREATE INDEX IF NOT EXISTS idx_news_articles_category ON news_articles(category);
";

#[derive(Debug, Clone, Default)]
pub struct NewsFilter {
    pub category: Option<String>,
    pub include_unpublished: bool,
}

#[derive(Clone)]
pub struct NewsStore {
    conn: Arc<Mutex<Connection>>,
}

impl NewsStore {
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open news database at {path}"))?;
        conn.execute_batch(SCHEMA).context("failed to initialize news schema")?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("failed to open in-memory database")?;
        conn.execute_batch(SCHEMA).context("failed to initialize news schema")?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Insert a new article. The stored copy gets a fresh id (the incoming
    /// draft id, if any, is ignored) and bookkeeping timestamps.
    pub fn insert(&self, article: &NewsArticle) -> Result<NewsArticle> {
        let mut stored = article.clone();
        stored.id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp_millis();

        let conn = self.conn.lock();
        conn.execute(
            "INSERT INTO news_articles
                 (id, title, category, summary, content, image_url,
                  is_featured, date, is_published, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
            params![
                stored.id,
                stored.title,
                stored.category,
                stored.summary,
                stored.content,
                stored.image_url,
                stored.is_featured,
                stored.date,
                stored.is_published,
                now,
            ],
        )
        .context("failed to insert news article")?;
        Ok(stored)
    }

    pub fn get(&self, id: &str) -> Result<Option<NewsArticle>> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT id, title, category, summary, content, image_url,
                    is_featured, date, is_published
             FROM news_articles WHERE id = ?1",
            params![id],
            row_to_article,
        )
        .optional()
        .context("failed to fetch news article")
    }

    pub fn list(&self, filter: &NewsFilter) -> Result<Vec<NewsListItem>> {
        let mut sql = String::from(
            "SELECT id, title, category, summary, image_url,
                    is_featured, date, is_published
             FROM news_articles",
        );
        let mut clauses: Vec<&str> = Vec::new();
        let mut args: Vec<String> = Vec::new();

        if !filter.include_unpublished {
            clauses.push("is_published = 1");
        }
        if let Some(category) = &filter.category {
            clauses.push("category = ?");
            args.push(category.clone());
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY date DESC, created_at DESC");

        let conn = self.conn.lock();
        let mut stmt = conn.prepare(&sql).context("failed to prepare news list query")?;
        let rows = stmt
            .query_map(rusqlite::params_from_iter(args), row_to_list_item)
            .context("failed to run news list query")?;
        let mut items = Vec::new();
        for row in rows {
            items.push(row.context("failed to read news row")?);
        }
        Ok(items)
    }

    /// Full-record update. Returns the stored copy, or `None` when the id is
    /// unknown. The id and `created_at` of the existing row are kept.
    pub fn update(&self, id: &str, article: &NewsArticle) -> Result<Option<NewsArticle>> {
        let now = Utc::now().timestamp_millis();
        let conn = self.conn.lock();
        let changed = conn
            .execute(
                "UPDATE news_articles SET
                     title = ?2, category = ?3, summary = ?4, content = ?5,
                     image_url = ?6, is_featured = ?7, date = ?8,
                     is_published = ?9, updated_at = ?10
                 WHERE id = ?1",
                params![
                    id,
                    article.title,
                    article.category,
                    article.summary,
                    article.content,
                    article.image_url,
                    article.is_featured,
                    article.date,
                    article.is_published,
                    now,
                ],
            )
            .context("failed to update news article")?;
        if changed == 0 {
            return Ok(None);
        }
        let mut stored = article.clone();
        stored.id = id.to_string();
        Ok(Some(stored))
    }

    pub fn delete(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock();
        let deleted = conn
            .execute("DELETE FROM news_articles WHERE id = ?1", params![id])
            .context("failed to delete news article")?;
        Ok(deleted > 0)
    }

    pub fn count(&self) -> Result<usize> {
        let conn = self.conn.lock();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM news_articles", [], |row| row.get(0))
            .context("failed to count news articles")?;
        Ok(count as usize)
    }
}

fn row_to_article(row: &Row<'_>) -> rusqlite::Result<NewsArticle> {
    Ok(NewsArticle {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        summary: row.get(3)?,
        content: row.get(4)?,
        image_url: row.get(5)?,
        is_featured: row.get(6)?,
        date: row.get(7)?,
        is_published: row.get(8)?,
    })
}

fn row_to_list_item(row: &Row<'_>) -> rusqlite::Result<NewsListItem> {
    Ok(NewsListItem {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        summary: row.get(3)?,
        image_url: row.get(4)?,
        is_featured: row.get(5)?,
        date: row.get(6)?,
        is_published: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str, category: &str, date: &str, published: bool) -> NewsArticle {
        NewsArticle {
            id: String::new(),
            title: title.to_string(),
            category: category.to_string(),
            summary: format!("{title} summary"),
            content: format!("{title} content"),
            image_url: String::new(),
            is_featured: false,
            date: format!("{date}T00:00:00.000Z"),
            is_published: published,
        }
    }

    #[test]
    fn insert_assigns_id_and_round_trips() {
        let store = NewsStore::open_in_memory().expect("store");
        let stored = store
            .insert(&sample("Orientation Week", "Events", "2025-01-15", true))
            .expect("insert");
        assert!(!stored.id.is_empty());

        let fetched = store.get(&stored.id).expect("get").expect("present");
        assert_eq!(fetched, stored);
    }

    #[test]
    fn list_hides_unpublished_unless_asked() {
        let store = NewsStore::open_in_memory().expect("store");
        store.insert(&sample("Public", "Events", "2025-01-10", true)).expect("insert");
        store.insert(&sample("Draft", "Events", "2025-01-11", false)).expect("insert");

        let visible = store.list(&NewsFilter::default()).expect("list");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Public");

        let all = store
            .list(&NewsFilter { include_unpublished: true, ..Default::default() })
            .expect("list all");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn list_filters_by_category_and_orders_newest_first() {
        let store = NewsStore::open_in_memory().expect("store");
        store.insert(&sample("Old event", "Events", "2025-01-01", true)).expect("insert");
        store.insert(&sample("New event", "Events", "2025-02-01", true)).expect("insert");
        store.insert(&sample("Deadline", "Deadlines", "2025-03-01", true)).expect("insert");

        let events = store
            .list(&NewsFilter { category: Some("Events".into()), ..Default::default() })
            .expect("list");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "New event");
        assert_eq!(events[1].title, "Old event");
    }

    #[test]
    fn update_unknown_id_returns_none() {
        let store = NewsStore::open_in_memory().expect("store");
        let result = store
            .update("missing", &sample("x", "Events", "2025-01-01", true))
            .expect("update");
        assert!(result.is_none());
    }

    #[test]
    fn update_and_delete_round_trip() {
        let store = NewsStore::open_in_memory().expect("store");
        let stored =
            store.insert(&sample("Visa workshop", "Announcements", "2025-04-01", true)).expect("insert");

        let mut edited = stored.clone();
        edited.title = "Visa workshop (rescheduled)".to_string();
        let updated = store.update(&stored.id, &edited).expect("update").expect("present");
        assert_eq!(updated.title, "Visa workshop (rescheduled)");
        assert_eq!(updated.id, stored.id);

        assert!(store.delete(&stored.id).expect("delete"));
        assert!(!store.delete(&stored.id).expect("second delete"));
        assert!(store.get(&stored.id).expect("get").is_none());
    }

    #[test]
    fn open_persists_across_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("news.db");
        let path = path.to_string_lossy().to_string();

        let stored = {
            let store = NewsStore::open(&path).expect("open");
            store.insert(&sample("Persistent", "Events", "2025-05-01", true)).expect("insert")
        };

        let reopened = NewsStore::open(&path).expect("reopen");
        assert_eq!(reopened.count().expect("count"), 1);
        let fetched = reopened.get(&stored.id).expect("get").expect("present");
        assert_eq!(fetched.title, "Persistent");
    }
}
