// Use 3rd party
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::{debug, error};
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// Use built-in library
use std::fmt;

// Use internal modules
use crate::client::{ClientError, ClientResult};
use crate::config::Config;

const AUTHORIZE_PATH: &str = "/authorize";
const TOKEN_PATH: &str = "/api/token";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Scope {
    UgcImageUpload,
    UserModifyPlaybackState,
    UserReadPlaybackState,
    UserReadCurrentlyPlaying,
    UserFollowModify,
    UserFollowRead,
    UserReadRecentlyPlayed,
    UserTopRead,
    PlaylistReadCollaborative,
    PlaylistModifyPublic,
    PlaylistReadPrivate,
    PlaylistModifyPrivate,
    Streaming,
    UserReadEmail,
    UserReadPrivate,
    UserLibraryModify,
    UserLibraryRead,
}

impl Scope {
    pub const fn as_str(self) -> &'static str {
        match self {
            Scope::UgcImageUpload => "ugc-image-upload",
            Scope::UserModifyPlaybackState => "user-modify-playback-state",
            Scope::UserReadPlaybackState => "user-read-playback-state",
            Scope::UserReadCurrentlyPlaying => "user-read-currently-playing",
            Scope::UserFollowModify => "user-follow-modify",
            Scope::UserFollowRead => "user-follow-read",
            Scope::UserReadRecentlyPlayed => "user-read-recently-played",
            Scope::UserTopRead => "user-top-read",
            Scope::PlaylistReadCollaborative => "playlist-read-collaborative",
            Scope::PlaylistModifyPublic => "playlist-modify-public",
            Scope::PlaylistReadPrivate => "playlist-read-private",
            Scope::PlaylistModifyPrivate => "playlist-modify-private",
            Scope::Streaming => "streaming",
            Scope::UserReadEmail => "user-read-email",
            Scope::UserReadPrivate => "user-read-private",
            Scope::UserLibraryModify => "user-library-modify",
            Scope::UserLibraryRead => "user-library-read",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//Token response example:
//{
    //"access_token": "NgCXRK...MzYjw",
    //"token_type": "Bearer",
    //"scope": "user-read-private user-read-email",
    //"expires_in": 3600,
    //"refresh_token": "NgAagA...Um_SHo"
//}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
    pub scope: Option<String>,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
}

#[derive(Serialize)]
struct AuthorizeQuery<'a> {
    client_id: &'a str,
    response_type: &'a str,
    redirect_uri: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_dialog: Option<bool>,
}

/// Builds authorization headers and URLs from the application credentials, and exchanges
/// grants for tokens with the accounts service.
#[derive(Clone, Debug)]
pub struct OAuth {
    client: Client,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    accounts_url: String,
}

impl OAuth {
    #[must_use]
    pub fn new(client_id: Option<&str>, client_secret: Option<&str>, redirect_uri: Option<&str>) -> Self {
        Self::from_config(&Config {
            client_id: client_id.map(ToOwned::to_owned),
            client_secret: client_secret.map(ToOwned::to_owned),
            redirect_uri: redirect_uri.map(ToOwned::to_owned),
            ..Default::default()
        })
    }

    pub(crate) fn from_config(config: &Config) -> Self {
        Self {
            client: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            accounts_url: config.accounts_base_url(),
        }
    }

    pub fn with_accounts_url(mut self, accounts_url: &str) -> Self {
        self.accounts_url = accounts_url.trim_end_matches('/').to_owned();
        self
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    /// `Basic` header value made of the client ID and secret.
    pub fn authorization_header(&self) -> ClientResult<String> {
        match (&self.client_id, &self.client_secret) {
            (Some(client_id), Some(client_secret)) => {
                let auth = format!("{}:{}", client_id, client_secret);
                Ok(format!("Basic {}", STANDARD.encode(auth)))
            }
            _ => Err(ClientError::MissingCredentials),
        }
    }

    /// URL the user visits to grant the application access to the given scopes.
    pub fn authorize_url(
        &self,
        scopes: &[Scope],
        state: Option<&str>,
        show_dialog: bool,
    ) -> ClientResult<String> {
        let client_id = self.client_id.as_deref().ok_or(ClientError::MissingCredentials)?;
        let redirect_uri = self.redirect_uri.as_deref().ok_or(ClientError::MissingRedirectUri)?;

        let scope = if scopes.is_empty() {
            None
        } else {
            let scopes: Vec<&str> = scopes.iter().map(|scope| scope.as_str()).collect();
            Some(scopes.join(" "))
        };

        let query = serde_urlencoded::to_string(AuthorizeQuery {
            client_id,
            response_type: "code",
            redirect_uri,
            scope,
            state,
            show_dialog: if show_dialog { Some(true) } else { None },
        })?;

        Ok(format!("{}{}?{}", self.accounts_url, AUTHORIZE_PATH, query))
    }

    /// Exchanges the code received on the redirect URI for a token.
    pub async fn request_token(&self, code: &str) -> ClientResult<Token> {
        let redirect_uri = self.redirect_uri.as_deref().ok_or(ClientError::MissingRedirectUri)?;
        let form = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ];
        self.fetch_token(&form).await
    }

    pub async fn refresh_token(&self, refresh_token: &str) -> ClientResult<Token> {
        let form = [("grant_type", "refresh_token"), ("refresh_token", refresh_token)];
        self.fetch_token(&form).await
    }

    /// App-only token, without any user context.
    pub async fn client_credentials(&self) -> ClientResult<Token> {
        let form = [("grant_type", "client_credentials")];
        self.fetch_token(&form).await
    }

    async fn fetch_token(&self, form: &[(&str, &str)]) -> ClientResult<Token> {
        let url = [self.accounts_url.as_str(), TOKEN_PATH].concat();
        debug!("Requesting token from {} with {:?}", url, form.first());

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, self.authorization_header()?)
            .form(form)
            .send()
            .await?;

        if response.status().is_success() {
            let token: Token = response.json().await?;
            debug!("Got token of type {} expiring in {}s", token.token_type, token.expires_in);
            Ok(token)
        } else {
            error!("Token request failed with status {}", response.status());
            Err(ClientError::from_token_response(response).await)
        }
    }
}
