use async_trait::async_trait;
use gloo_net::http::Request;
use intl_office_shared::{form::ResourceApi, NewsArticle, NewsListItem};
use js_sys::Date;
use serde::Deserialize;

// API base URL - read from the environment at compile time, defaulting to
// the local development backend.
pub const API_BASE: &str = match option_env!("INTL_OFFICE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

#[derive(Debug, Deserialize)]
struct NewsListResponse {
    articles: Vec<NewsListItem>,
    #[allow(dead_code, reason = "part of the wire shape, pagination unused here")]
    total: usize,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// Pull a server-provided error message out of a failed response, falling
/// back to the bare status code.
async fn response_error(response: gloo_net::http::Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP error: {status}"),
    }
}

/// Fetch the news list, optionally filtered by category. Admin pages pass
/// `include_unpublished` to see drafts.
pub async fn fetch_news(
    category: Option<&str>,
    include_unpublished: bool,
) -> Result<Vec<NewsListItem>, String> {
    let mut url = format!("{}/news", API_BASE);
    let mut params = Vec::new();

    if let Some(c) = category {
        params.push(format!("category={}", urlencoding::encode(c)));
    }
    if include_unpublished {
        params.push("include_unpublished=true".to_string());
    }
    params.push(format!("_ts={}", Date::now() as u64));

    url.push('?');
    url.push_str(&params.join("&"));

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    let json_response: NewsListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    Ok(json_response.articles)
}

/// Fetch one article by id; `Ok(None)` on 404.
pub async fn fetch_news_item(id: &str) -> Result<Option<NewsArticle>, String> {
    let url = format!(
        "{}/news/{}?_ts={}",
        API_BASE,
        urlencoding::encode(id),
        Date::now() as u64
    );

    let response = Request::get(&url)
        .header("Cache-Control", "no-cache, no-store, max-age=0")
        .header("Pragma", "no-cache")
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if response.status() == 404 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(response_error(response).await);
    }

    let article: NewsArticle = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;

    Ok(Some(article))
}

pub async fn create_news_item(article: &NewsArticle) -> Result<NewsArticle, String> {
    let url = format!("{}/news", API_BASE);
    let response = Request::post(&url)
        .json(article)
        .map_err(|e| format!("Encode error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {:?}", e))
}

pub async fn update_news_item(id: &str, article: &NewsArticle) -> Result<NewsArticle, String> {
    let url = format!("{}/news/{}", API_BASE, urlencoding::encode(id));
    let response = Request::put(&url)
        .json(article)
        .map_err(|e| format!("Encode error: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    response.json().await.map_err(|e| format!("Parse error: {:?}", e))
}

pub async fn delete_news_item(id: &str) -> Result<(), String> {
    let url = format!("{}/news/{}", API_BASE, urlencoding::encode(id));
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(response_error(response).await);
    }

    Ok(())
}

/// News resource backend for the admin form pipeline; one direct call per
/// operation, no retries or caching.
#[derive(Clone, Default)]
pub struct AdminNewsApi;

#[async_trait(?Send)]
impl ResourceApi<NewsArticle> for AdminNewsApi {
    async fn fetch_by_id(&self, id: &str) -> Result<NewsArticle, String> {
        fetch_news_item(id)
            .await?
            .ok_or_else(|| format!("News article not found: {id}"))
    }

    async fn create(&self, record: NewsArticle) -> Result<NewsArticle, String> {
        create_news_item(&record).await
    }

    async fn update(&self, id: &str, record: NewsArticle) -> Result<NewsArticle, String> {
        update_news_item(id, &record).await
    }

    async fn delete(&self, id: &str) -> Result<(), String> {
        delete_news_item(id).await
    }
}
