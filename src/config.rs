//! Client configuration, either built in code or read from the environment.

// Use built-in library
use std::env;

/// Base URL of the Web API, without the version segment.
pub const API_URL: &str = "https://api.spotify.com";
/// Version segment used when none is configured.
pub const DEFAULT_VERSION: &str = "v1";
/// Base URL of the accounts service handling authorization and tokens.
pub const ACCOUNTS_URL: &str = "https://accounts.spotify.com";

pub const ENV_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "SPOTIFY_ACCESS_TOKEN";
pub const ENV_REDIRECT_URI: &str = "SPOTIFY_REDIRECT_URI";
pub const ENV_API_VERSION: &str = "SPOTIFY_API_VERSION";
pub const ENV_LANG: &str = "SPOTIFY_LANG";
pub const ENV_API_URL: &str = "SPOTIFY_API_URL";
pub const ENV_ACCOUNTS_URL: &str = "SPOTIFY_ACCOUNTS_URL";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
    pub redirect_uri: Option<String>,
    /// API version segment, `v1` when unset.
    pub version: Option<String>,
    /// Sent as `Accept-Language` with every API request.
    pub lang: Option<String>,
    /// Full API base URL. Overrides `version` when set.
    pub api_base_url: Option<String>,
    pub accounts_base_url: Option<String>,
}

impl Config {
    /// Reads the configuration from `SPOTIFY_*` environment variables. Empty values count as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            client_id: var(ENV_CLIENT_ID),
            client_secret: var(ENV_CLIENT_SECRET),
            access_token: var(ENV_ACCESS_TOKEN),
            redirect_uri: var(ENV_REDIRECT_URI),
            version: var(ENV_API_VERSION),
            lang: var(ENV_LANG),
            api_base_url: var(ENV_API_URL),
            accounts_base_url: var(ENV_ACCOUNTS_URL),
        }
    }

    pub fn api_base_url(&self) -> String {
        match &self.api_base_url {
            Some(url) => url.trim_end_matches('/').to_owned(),
            None => {
                let version = self.version.as_deref().unwrap_or(DEFAULT_VERSION);
                format!("{}/{}", API_URL, version.trim_matches('/'))
            }
        }
    }

    pub fn accounts_base_url(&self) -> String {
        self.accounts_base_url
            .as_deref()
            .unwrap_or(ACCOUNTS_URL)
            .trim_end_matches('/')
            .to_owned()
    }
}
