//! Client for the Constellix DNS v4 management API.
//!
//! Every request carries a short-lived HMAC-SHA1 bearer token derived from
//! the account's API key pair, and collection endpoints (domains, records,
//! IP filters) are aggregated across pages by following the server's
//! `meta.links.next` URLs.
//!
//! ```no_run
//! use constellix::{Client, Config};
//!
//! # async fn run() -> Result<(), constellix::Error> {
//! let client = Client::new(Config::new("api-key", "secret-key"))?;
//! for domain in client.list_domains().await? {
//!     println!("{} {}", domain.id, domain.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod pagination;
pub mod types;

pub use auth::TokenSigner;
pub use client::Client;
pub use config::Config;
pub use error::Error;
pub use pagination::{Page, paginate};
pub use types::{Domain, DomainRecord, Envelope, IpFilter};
