//! Rspot is a wrapper for the Spotify Web API.
//!
//! ## Configuration
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! rspot = "0.1.0"
//! ```
//!
//! By default, Rspot uses asynchronous programming with `async` and `await`.
//!
//! ## Getting Started
//!
//! The client is a thin mapping from API routes to method calls. Every resource group of the
//! API (`albums`, `artists`, `playlists`, ...) is published as an endpoint on the client, both
//! through a typed accessor and by name through [`Spotify::endpoint`](client::Spotify::endpoint).
//! Every endpoint offers raw `get`/`post` passthroughs relative to its route segment plus a few
//! typed helpers returning the models in [`model`].
//!
//! ## Authorization
//!
//! Requests carry the access token set on the client. Tokens are obtained with the OAuth helper
//! ([`Spotify::oauth`](client::Spotify::oauth)) from a client ID, a client secret and a redirect
//! URI, and can be replaced at any time with
//! [`Spotify::set_access_token`](client::Spotify::set_access_token).
//!
//! ### Examples
//!
//! ```toml
//! [dependencies]
//! rspot = { version = "0.1.0" }
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! ```no_run
//! use rspot::client::Spotify;
//! use rspot::config::Config;
//! use rspot::endpoints::Endpoint;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Reads SPOTIFY_CLIENT_ID, SPOTIFY_CLIENT_SECRET, SPOTIFY_ACCESS_TOKEN, ...
//!     let client = Spotify::new(Config::from_env()).unwrap();
//!
//!     // Client credentials are enough for catalog endpoints.
//!     client.authenticate_client_credentials().await.unwrap();
//!
//!     let album = client.albums().fetch("4aawyAB9vmqN3uQ7FjRGTy").await.unwrap();
//!     println!("{:?}", album.name);
//!
//!     // The same endpoint, looked up by its route segment.
//!     let raw = client.endpoint("albums").unwrap().get(Some("4aawyAB9vmqN3uQ7FjRGTy"), &[]).await;
//!     println!("{:?}", raw.unwrap());
//!
//!     println!("{:?}/{:?}", client.rate_remaining(), client.rate_limit());
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod model;
pub mod requester;
