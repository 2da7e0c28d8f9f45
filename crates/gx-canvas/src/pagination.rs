//! Paginated fetcher.
//!
//! Canvas list endpoints return one JSON array per page and point at the
//! following page through the `Link` header. [`get_all_pages`] walks that
//! chain to the end and hands back the concatenated records.

use std::collections::HashSet;

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::CanvasError;
use crate::link::next_link;

/// One page of a list endpoint: the raw records plus the `Link` header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<serde_json::Value>,
    pub link: Option<String>,
}

impl Page {
    #[must_use]
    pub const fn new(items: Vec<serde_json::Value>, link: Option<String>) -> Self {
        Self { items, link }
    }
}

/// Anything that can fetch a single page by locator.
///
/// [`crate::CanvasClient`] implements this over HTTP; tests substitute an
/// in-memory source.
pub trait PageSource {
    /// Fetch the page at `url`.
    fn fetch_page(&self, url: &Url) -> impl Future<Output = Result<Page, CanvasError>> + Send;
}

/// Fetch every page starting at `start` and deserialize all records as `T`.
///
/// Pages are requested strictly one after another. The walk ends when a page
/// has no usable `rel="next"` link, or when the next locator was already
/// fetched during this walk (which covers self-referencing pages and cycles).
/// Relative next links resolve against the page that carried them.
///
/// # Errors
///
/// Returns the first [`CanvasError`] raised by the source, or
/// [`CanvasError::Parse`] if a record does not match `T`. Records from pages
/// fetched before the failure are discarded.
pub async fn get_all_pages<S, T>(source: &S, start: Url) -> Result<Vec<T>, CanvasError>
where
    S: PageSource + Sync,
    T: DeserializeOwned,
{
    let mut records = Vec::new();
    let mut visited = HashSet::new();
    let mut next = Some(start);

    while let Some(url) = next.take() {
        let page = source.fetch_page(&url).await?;
        tracing::debug!(%url, records = page.items.len(), "fetched page");

        for item in page.items {
            let record = serde_json::from_value(item)
                .map_err(|e| CanvasError::Parse(format!("unexpected record from {url}: {e}")))?;
            records.push(record);
        }

        next = page
            .link
            .as_deref()
            .and_then(next_link)
            .and_then(|target| url.join(&target).ok())
            .filter(|candidate| *candidate != url && !visited.contains(candidate));

        visited.insert(url);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    /// In-memory page source keyed by absolute locator.
    #[derive(Default)]
    struct FakePages {
        pages: HashMap<String, Result<Page, u16>>,
        requests: Mutex<Vec<String>>,
    }

    impl FakePages {
        fn page(mut self, url: &str, items: serde_json::Value, next: Option<&str>) -> Self {
            let items = items.as_array().cloned().unwrap_or_default();
            let link = next.map(|n| format!(r#"<{n}>; rel="next""#));
            self.pages.insert(url.to_string(), Ok(Page::new(items, link)));
            self
        }

        fn failing(mut self, url: &str, status: u16) -> Self {
            self.pages.insert(url.to_string(), Err(status));
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl PageSource for FakePages {
        async fn fetch_page(&self, url: &Url) -> Result<Page, CanvasError> {
            self.requests.lock().unwrap().push(url.to_string());
            match self.pages.get(url.as_str()) {
                Some(Ok(page)) => Ok(page.clone()),
                Some(Err(status)) => Err(CanvasError::Api {
                    status: *status,
                    url: url.to_string(),
                    message: String::new(),
                }),
                None => Err(CanvasError::Api {
                    status: 404,
                    url: url.to_string(),
                    message: String::from("not found"),
                }),
            }
        }
    }

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[tokio::test]
    async fn concatenates_pages_in_request_order() {
        let source = FakePages::default()
            .page("https://c.test/a?page=1", json!([1, 2]), Some("https://c.test/a?page=2"))
            .page("https://c.test/a?page=2", json!([3]), Some("https://c.test/a?page=3"))
            .page("https://c.test/a?page=3", json!([4, 5]), None);

        let all: Vec<u32> = get_all_pages(&source, url("https://c.test/a?page=1"))
            .await
            .unwrap();

        assert_eq!(all, vec![1, 2, 3, 4, 5]);
        assert_eq!(source.requests().len(), 3);
    }

    #[tokio::test]
    async fn self_referencing_next_link_terminates() {
        let source = FakePages::default().page(
            "https://c.test/a?page=1",
            json!([1]),
            Some("https://c.test/a?page=1"),
        );

        let all: Vec<u32> = get_all_pages(&source, url("https://c.test/a?page=1"))
            .await
            .unwrap();

        assert_eq!(all, vec![1]);
        assert_eq!(source.requests(), vec!["https://c.test/a?page=1"]);
    }

    #[tokio::test]
    async fn link_back_to_previous_page_terminates() {
        let source = FakePages::default()
            .page("https://c.test/a?page=1", json!([1]), Some("https://c.test/a?page=2"))
            .page("https://c.test/a?page=2", json!([2]), Some("https://c.test/a?page=1"));

        let all: Vec<u32> = get_all_pages(&source, url("https://c.test/a?page=1"))
            .await
            .unwrap();

        assert_eq!(all, vec![1, 2]);
        assert_eq!(source.requests().len(), 2);
    }

    #[tokio::test]
    async fn relative_next_link_resolves_against_current_page() {
        let source = FakePages::default()
            .page("https://c.test/api/v1/a?page=1", json!([1]), Some("/api/v1/a?page=2"))
            .page("https://c.test/api/v1/a?page=2", json!([2]), None);

        let all: Vec<u32> = get_all_pages(&source, url("https://c.test/api/v1/a?page=1"))
            .await
            .unwrap();

        assert_eq!(all, vec![1, 2]);
    }

    #[tokio::test]
    async fn malformed_link_ends_walk_without_error() {
        let mut source = FakePages::default();
        source.pages.insert(
            "https://c.test/a".to_string(),
            Ok(Page::new(vec![json!(7)], Some(String::from("not a link header")))),
        );

        let all: Vec<u32> = get_all_pages(&source, url("https://c.test/a")).await.unwrap();
        assert_eq!(all, vec![7]);
    }

    #[tokio::test]
    async fn failure_on_later_page_discards_everything() {
        let source = FakePages::default()
            .page("https://c.test/a?page=1", json!([1, 2]), Some("https://c.test/a?page=2"))
            .failing("https://c.test/a?page=2", 500);

        let result: Result<Vec<u32>, _> =
            get_all_pages(&source, url("https://c.test/a?page=1")).await;

        assert!(matches!(result, Err(CanvasError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn record_shape_mismatch_is_parse_error() {
        let source = FakePages::default().page("https://c.test/a", json!(["x"]), None);

        let result: Result<Vec<u32>, _> = get_all_pages(&source, url("https://c.test/a")).await;
        assert!(matches!(result, Err(CanvasError::Parse(_))));
    }

    #[tokio::test]
    async fn empty_page_yields_empty_result() {
        let source = FakePages::default().page("https://c.test/a", json!([]), None);

        let all: Vec<u32> = get_all_pages(&source, url("https://c.test/a")).await.unwrap();
        assert!(all.is_empty());
    }
}
