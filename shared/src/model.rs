use serde::{Deserialize, Serialize};

/// Fixed category set for news articles. The form's category select and the
/// backend validator both draw from this list.
pub const NEWS_CATEGORIES: &[&str] =
    &["Announcements", "Events", "Partnerships", "Scholarships", "Deadlines"];

/// Full news article record.
///
/// On the wire `date` is an ISO-8601 timestamp string; in the form layer it
/// is a plain `YYYY-MM-DD` calendar date. The [`crate::dates`] transforms
/// convert at the boundary, the struct itself does not care which
/// representation it currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Server-assigned id, empty on a not-yet-persisted draft.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub content: String,
    pub image_url: String,
    pub is_featured: bool,
    pub date: String,
    pub is_published: bool,
}

impl NewsArticle {
    /// Defaults for a freshly opened "new article" form: empty fields,
    /// published, dated today (`YYYY-MM-DD`).
    pub fn draft_defaults(today: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            category: String::new(),
            summary: String::new(),
            content: String::new(),
            image_url: String::new(),
            is_featured: false,
            date: today.into(),
            is_published: true,
        }
    }
}

/// List projection (no long-form content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsListItem {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub image_url: String,
    pub is_featured: bool,
    pub date: String,
    pub is_published: bool,
}

impl From<NewsArticle> for NewsListItem {
    fn from(a: NewsArticle) -> Self {
        NewsListItem {
            id: a.id,
            title: a.title,
            category: a.category,
            summary: a.summary,
            image_url: a.image_url,
            is_featured: a.is_featured,
            date: a.date,
            is_published: a.is_published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_article_serializes_with_camel_case_wire_names() {
        let article = NewsArticle {
            id: "n-1".into(),
            title: "Orientation Week".into(),
            category: "Events".into(),
            summary: "Welcome program".into(),
            content: "Details".into(),
            image_url: "https://example.edu/hero.jpg".into(),
            is_featured: true,
            date: "2025-01-15T00:00:00.000Z".into(),
            is_published: true,
        };

        let value = serde_json::to_value(&article).expect("serialize");
        assert_eq!(value["imageUrl"], "https://example.edu/hero.jpg");
        assert_eq!(value["isFeatured"], true);
        assert_eq!(value["isPublished"], true);
        assert_eq!(value["date"], "2025-01-15T00:00:00.000Z");
    }

    #[test]
    fn wire_record_without_id_deserializes_to_empty_id() {
        let json = r#"{
            "title": "t", "category": "Events", "summary": "s",
            "content": "c", "imageUrl": "", "isFeatured": false,
            "date": "2025-01-15T00:00:00.000Z", "isPublished": true
        }"#;
        let article: NewsArticle = serde_json::from_str(json).expect("deserialize");
        assert!(article.id.is_empty());
    }

    #[test]
    fn list_item_projection_keeps_identity_fields() {
        let article = NewsArticle {
            id: "n-2".into(),
            title: "Call for exchange applications".into(),
            category: "Deadlines".into(),
            summary: "Apply by March".into(),
            content: "Long form".into(),
            image_url: String::new(),
            is_featured: false,
            date: "2025-02-01".into(),
            is_published: false,
        };
        let item = NewsListItem::from(article.clone());
        assert_eq!(item.id, article.id);
        assert_eq!(item.title, article.title);
        assert_eq!(item.is_published, article.is_published);
    }
}
