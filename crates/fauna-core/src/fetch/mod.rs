//! Animals API client.
//!
//! Uses the curl crate (libcurl) for a single blocking GET per lookup, with
//! the key sent as an `X-Api-Key` header. Transport and HTTP-status failures
//! never reach the pipeline: they are logged and collapse to an empty result
//! set, which renders as a no-results page.

mod error;

pub use error::FetchError;

use std::str;
use std::time::Duration;
use url::Url;

use crate::model::Animal;

/// Client for the animals collection endpoint.
///
/// Holds the credential explicitly; nothing here reads the environment.
#[derive(Debug, Clone)]
pub struct AnimalsClient {
    api_url: String,
    api_key: String,
}

impl AnimalsClient {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Endpoint URL with the `name` query parameter appended.
    fn request_url(&self, name: &str) -> Result<Url, FetchError> {
        let mut url = Url::parse(&self.api_url)?;
        url.query_pairs_mut().append_pair("name", name);
        Ok(url)
    }

    /// Fetch all records matching `name`.
    ///
    /// Any failure (transport, non-2xx status, unparseable body) is reported
    /// via `tracing::warn!` and returns an empty Vec; callers never see an
    /// error from this method.
    pub fn fetch(&self, name: &str) -> Vec<Animal> {
        match self.fetch_raw(name) {
            Ok(animals) => {
                tracing::debug!("fetched {} record(s) for {:?}", animals.len(), name);
                animals
            }
            Err(err) => {
                tracing::warn!("fetch for {:?} failed: {}", name, err);
                Vec::new()
            }
        }
    }

    /// Same as `fetch` but surfaces the failure kind. Used by tests and the
    /// diagnostic CLI path.
    pub fn fetch_raw(&self, name: &str) -> Result<Vec<Animal>, FetchError> {
        let url = self.request_url(name)?;
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.connect_timeout(Duration::from_secs(15))?;
        easy.timeout(Duration::from_secs(30))?;

        let mut list = curl::easy::List::new();
        list.append(&format!("X-Api-Key: {}", self.api_key))?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Http(code));
        }

        let animals: Vec<Animal> = serde_json::from_slice(&body)?;
        Ok(animals)
    }
}
