//! Shared HTTP plumbing used by every endpoint.

// Use 3rd party
use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

// Use built-in library
use std::borrow::Cow;
use std::sync::RwLock;

// Use internal modules
use crate::client::{ClientError, ClientResult};
use crate::config::Config;

pub const RATE_LIMIT_HEADER: &str = "X-RateLimit-Limit";
pub const RATE_REMAINING_HEADER: &str = "X-RateLimit-Remaining";

/// Rate-limit headers of the most recent response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: Option<u32>,
    pub remaining: Option<u32>,
}

impl RateLimit {
    fn from_headers(headers: &HeaderMap) -> Self {
        let value = |name: &str| {
            headers
                .get(name)
                .and_then(|header| header.to_str().ok())
                .and_then(|header| header.trim().parse::<u32>().ok())
        };

        Self {
            limit: value(RATE_LIMIT_HEADER),
            remaining: value(RATE_REMAINING_HEADER),
        }
    }
}

#[derive(Debug)]
pub struct Requester {
    client: Client,
    base_url: String,
    lang: Option<String>,
    token: RwLock<Option<String>>,
    rate_limit: RwLock<RateLimit>,
}

impl Requester {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url(),
            lang: config.lang.clone(),
            token: RwLock::new(config.access_token.clone()),
            rate_limit: RwLock::new(RateLimit::default()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().expect("access token rwlock poisoned").clone()
    }

    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("access token rwlock poisoned") = Some(token.to_owned());
    }

    pub fn clear_token(&self) {
        *self.token.write().expect("access token rwlock poisoned") = None;
    }

    pub fn rate_limit_snapshot(&self) -> RateLimit {
        *self.rate_limit.read().expect("rate limit rwlock poisoned")
    }

    pub fn rate_limit(&self) -> Option<u32> {
        self.rate_limit_snapshot().limit
    }

    pub fn rate_remaining(&self) -> Option<u32> {
        self.rate_limit_snapshot().remaining
    }

    fn record_rate_limit(&self, headers: &HeaderMap) {
        let rate_limit = RateLimit::from_headers(headers);
        debug!("rate limit: {:?}", rate_limit);
        *self.rate_limit.write().expect("rate limit rwlock poisoned") = rate_limit;
    }

    async fn api_call(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        payload: Option<&Value>,
    ) -> ClientResult<Response> {
        // Absolute URLs (e.g. paging links) are used as they are
        let mut url: Cow<str> = url.into();
        if !url.starts_with("http") {
            url = [self.base_url.as_str(), &url].concat().into();
        }

        let mut headers = HeaderMap::new();
        if let Some(lang) = &self.lang {
            headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(lang)?);
        }

        debug!("{} {} {:?}", method, url, query);
        let response = {
            let builder = self
                .client
                .request(method, &*url)
                .headers(headers)
                .query(query);

            let builder = match self.token() {
                Some(token) => builder.bearer_auth(token),
                None => builder,
            };

            // Only add payload when sent
            let builder = if let Some(payload) = payload {
                builder.json(payload)
            } else {
                builder
            };

            builder.send().await.map_err(ClientError::from)?
        };

        self.record_rate_limit(response.headers());

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_response(response).await)
        }
    }

    pub async fn get(&self, url: &str, query: &[(&str, &str)]) -> ClientResult<Value> {
        let response = self.api_call(Method::GET, url, query, None).await?;
        Self::convert_result(&response.text().await?)
    }

    pub async fn post(
        &self,
        url: &str,
        query: &[(&str, &str)],
        payload: Option<&Value>,
    ) -> ClientResult<Value> {
        let response = self.api_call(Method::POST, url, query, payload).await?;
        Self::convert_result(&response.text().await?)
    }

    pub async fn get_as<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> ClientResult<T> {
        let value = self.get(url, query).await?;
        serde_json::from_value::<T>(value).map_err(Into::into)
    }

    pub async fn post_as<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        payload: Option<&Value>,
    ) -> ClientResult<T> {
        let value = self.post(url, query, payload).await?;
        serde_json::from_value::<T>(value).map_err(Into::into)
    }

    // Empty bodies (e.g. 201/204 responses) become `Value::Null`
    fn convert_result(input: &str) -> ClientResult<Value> {
        if input.trim().is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_str::<Value>(input).map_err(Into::into)
        }
    }
}
