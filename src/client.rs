// Use 3rd party
use log::{debug, error, warn};
use reqwest::header::{HeaderMap, InvalidHeaderValue, RETRY_AFTER};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;

// Use built-in library
use std::sync::Arc;

// Use internal modules
use crate::auth::{OAuth, Token};
use crate::config::Config;
use crate::endpoints::albums::Albums;
use crate::endpoints::artists::Artists;
use crate::endpoints::audio_features::AudioFeatures;
use crate::endpoints::browse::Browse;
use crate::endpoints::me::Me;
use crate::endpoints::playlists::Playlists;
use crate::endpoints::recommendations::Recommendations;
use crate::endpoints::search::Search;
use crate::endpoints::tracks::Tracks;
use crate::endpoints::users::Users;
use crate::endpoints::{Endpoint, EndpointRegistry};
use crate::requester::Requester;

// Possible errors returned from `rspot` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request unauthorized")]
    Unauthorized,
    #[error("spotify error: {0}")]
    Api(#[from] ApiError),
    #[error("json parse error: {0}")]
    ParseJSON(#[from] serde_json::Error),
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("status code: {0}")]
    StatusCode(StatusCode),
    #[error("rate limited, retry after {0} seconds")]
    RateLimited(u64),
    #[error("missing or invalid Retry-After header in rate-limit response")]
    InvalidRateLimitResponse,
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
    #[error("client id and client secret are required")]
    MissingCredentials,
    #[error("a redirect uri is required")]
    MissingRedirectUri,
    #[error("endpoint `{0}` is already registered")]
    DuplicateEndpoint(&'static str),
    #[error("query encode error: {0}")]
    UrlEncode(#[from] serde_urlencoded::ser::Error),
}

impl ClientError {
    pub(crate) async fn from_response(response: Response) -> Self {
        match response.status() {
            StatusCode::UNAUTHORIZED => {
                warn!("Got 401 Unauthorized response");
                Self::Unauthorized
            }
            StatusCode::TOO_MANY_REQUESTS => match retry_after(response.headers()) {
                Some(wait_time) => {
                    warn!("Got 429 rate-limit response with Retry-After: {}", wait_time);
                    Self::RateLimited(wait_time)
                }
                None => {
                    warn!("Invalid rate-limit response");
                    Self::InvalidRateLimitResponse
                }
            },
            status @ StatusCode::BAD_REQUEST
            | status @ StatusCode::FORBIDDEN
            | status @ StatusCode::NOT_FOUND => response
                .json::<ApiError>()
                .await
                .map_or_else(|_| status.into(), Into::into),
            status => {
                error!("Unexpected response status: {}", status);
                status.into()
            }
        }
    }

    /// The accounts service sends an error body with every failure status, so it is tried
    /// first; 429 keeps the `Retry-After` handling.
    pub(crate) async fn from_token_response(response: Response) -> Self {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Self::from_response(response).await;
        }

        match response.json::<ApiError>().await {
            Ok(api_error) => {
                warn!("Token request rejected with {}: {}", status, api_error);
                api_error.into()
            }
            Err(_) if status == StatusCode::UNAUTHORIZED => Self::Unauthorized,
            Err(_) => status.into(),
        }
    }
}

impl From<StatusCode> for ClientError {
    fn from(code: StatusCode) -> Self {
        Self::StatusCode(code)
    }
}

fn retry_after(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.trim().parse::<u64>().ok())
}

/// Error bodies returned by the API (`regular`) and by the accounts service (`authentication`).
#[derive(Debug, Error, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    #[error("{}: {}", .error.status, .error.message)]
    Regular { error: RegularError },
    #[error("{}: {}", .error, .error_description.as_deref().unwrap_or(""))]
    Authentication {
        error: String,
        error_description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
pub struct RegularError {
    pub status: u16,
    pub message: String,
}

pub type ClientResult<T> = Result<T, ClientError>;

// Spotify API
pub struct Spotify {
    oauth: OAuth,
    requester: Arc<Requester>,
    endpoints: EndpointRegistry,
    albums: Arc<Albums>,
    artists: Arc<Artists>,
    audio_features: Arc<AudioFeatures>,
    browse: Arc<Browse>,
    me: Arc<Me>,
    playlists: Arc<Playlists>,
    recommendations: Arc<Recommendations>,
    search: Arc<Search>,
    tracks: Arc<Tracks>,
    users: Arc<Users>,
}

impl Spotify {
    /// Builds the OAuth helper and the shared requester, then attaches one instance of every
    /// endpoint under its route segment.
    pub fn new(config: Config) -> ClientResult<Self> {
        let oauth = OAuth::from_config(&config);
        let requester = Arc::new(Requester::new(&config));

        let mut endpoints = EndpointRegistry::new();
        let albums = endpoints.attach(Albums::new(requester.clone()))?;
        let artists = endpoints.attach(Artists::new(requester.clone()))?;
        let audio_features = endpoints.attach(AudioFeatures::new(requester.clone()))?;
        let browse = endpoints.attach(Browse::new(requester.clone()))?;
        let me = endpoints.attach(Me::new(requester.clone()))?;
        let playlists = endpoints.attach(Playlists::new(requester.clone()))?;
        let recommendations = endpoints.attach(Recommendations::new(requester.clone()))?;
        let search = endpoints.attach(Search::new(requester.clone()))?;
        let tracks = endpoints.attach(Tracks::new(requester.clone()))?;
        let users = endpoints.attach(Users::new(requester.clone()))?;
        debug!("Attached endpoints: {:?}", endpoints.names());

        Ok(Self {
            oauth,
            requester,
            endpoints,
            albums,
            artists,
            audio_features,
            browse,
            me,
            playlists,
            recommendations,
            search,
            tracks,
            users,
        })
    }

    #[must_use]
    pub fn builder() -> SpotifyBuilder {
        SpotifyBuilder::default()
    }

    pub fn oauth(&self) -> &OAuth {
        &self.oauth
    }

    pub fn requester(&self) -> &Requester {
        &self.requester
    }

    /// Update the access token used by every endpoint.
    pub fn set_access_token(&self, access_token: &str) {
        self.requester.set_token(access_token);
    }

    /// `X-RateLimit-Limit` of the last API response.
    pub fn rate_limit(&self) -> Option<u32> {
        self.requester.rate_limit()
    }

    /// `X-RateLimit-Remaining` of the last API response.
    pub fn rate_remaining(&self) -> Option<u32> {
        self.requester.rate_remaining()
    }

    /// Looks up an endpoint by its route segment, e.g. `"playlists"`.
    pub fn endpoint(&self, name: &str) -> Option<&dyn Endpoint> {
        self.endpoints.get(name)
    }

    pub fn endpoint_names(&self) -> Vec<&'static str> {
        self.endpoints.names()
    }

    /// Exchanges an authorization code for a token and starts using its access token.
    pub async fn authenticate(&self, code: &str) -> ClientResult<Token> {
        let token = self.oauth.request_token(code).await?;
        self.set_access_token(&token.access_token);
        Ok(token)
    }

    /// Requests an app-only token with the client credentials and starts using it.
    pub async fn authenticate_client_credentials(&self) -> ClientResult<Token> {
        let token = self.oauth.client_credentials().await?;
        self.set_access_token(&token.access_token);
        Ok(token)
    }

    /// Trades a refresh token for a new access token and starts using it.
    pub async fn refresh(&self, refresh_token: &str) -> ClientResult<Token> {
        let token = self.oauth.refresh_token(refresh_token).await?;
        self.set_access_token(&token.access_token);
        Ok(token)
    }

    // Endpoint function namespaces

    pub fn albums(&self) -> &Albums {
        &self.albums
    }

    pub fn artists(&self) -> &Artists {
        &self.artists
    }

    pub fn audio_features(&self) -> &AudioFeatures {
        &self.audio_features
    }

    pub fn browse(&self) -> &Browse {
        &self.browse
    }

    pub fn me(&self) -> &Me {
        &self.me
    }

    pub fn playlists(&self) -> &Playlists {
        &self.playlists
    }

    pub fn recommendations(&self) -> &Recommendations {
        &self.recommendations
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn tracks(&self) -> &Tracks {
        &self.tracks
    }

    pub fn users(&self) -> &Users {
        &self.users
    }
}

#[derive(Clone, Debug, Default)]
pub struct SpotifyBuilder {
    config: Config,
}

impl SpotifyBuilder {
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.client_id = Some(client_id.into());
        self
    }

    pub fn client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.config.client_secret = Some(client_secret.into());
        self
    }

    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.config.access_token = Some(access_token.into());
        self
    }

    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.config.redirect_uri = Some(redirect_uri.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.config.version = Some(version.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.config.lang = Some(lang.into());
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_base_url = Some(url.into());
        self
    }

    pub fn accounts_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.accounts_base_url = Some(url.into());
        self
    }

    pub fn build(self) -> ClientResult<Spotify> {
        Spotify::new(self.config)
    }
}
