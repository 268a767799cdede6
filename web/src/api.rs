use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use trivia_core::{Result, TriviaError, TriviaSource};
use trivia_protocol::{CategoryDetail, CategoryId, CategorySummary, category_url, categories_url};

/// [`TriviaSource`] backed by the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpSource {
    base: String,
}

impl HttpSource {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        log::debug!("GET {}", url);
        let response = Request::get(&url).send().await.map_err(fetch_error)?;
        if !response.ok() {
            return Err(TriviaError::Fetch(format!(
                "{} returned {} {}",
                url,
                response.status(),
                response.status_text()
            )));
        }
        response.json().await.map_err(fetch_error)
    }
}

fn fetch_error(err: gloo::net::Error) -> TriviaError {
    TriviaError::Fetch(err.to_string())
}

impl TriviaSource for HttpSource {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>> {
        self.get_json(categories_url(&self.base, count)).await
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail> {
        self.get_json(category_url(&self.base, id)).await
    }
}
