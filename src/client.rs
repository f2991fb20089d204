use std::time::Duration;

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::auth::TokenSigner;
use crate::config::Config;
use crate::error::Error;
use crate::pagination::{Page, paginate};
use crate::types::{Document, Domain, DomainRecord, Envelope, IpFilter, Nameservers};

/// Client for the Constellix DNS v4 API.
///
/// One bearer token is signed at construction and reused for the client's
/// lifetime. The server only accepts a token for a short window around its
/// timestamp, so a long-lived client whose requests start failing with
/// authorization errors should call [`Client::refresh_token`] or be rebuilt.
#[derive(Debug)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
    signer: TokenSigner,
    token: String,
}

impl Client {
    pub fn new(config: Config) -> Result<Self, Error> {
        let signer = TokenSigner::new(&config.api_key, &config.secret_key)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        let token = signer.sign();

        Ok(Self {
            config,
            http,
            signer,
            token,
        })
    }

    /// Sign a fresh token and use it for all subsequent requests.
    pub fn refresh_token(&mut self) -> &str {
        self.token = self.signer.sign();
        &self.token
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Fetch one page of a collection. The first page asks for an explicit
    /// page size and index; later pages follow the server's next link
    /// verbatim, which already encodes both.
    async fn fetch_page<T>(&self, base: &str, cursor: Option<String>) -> Result<Page<T>, Error>
    where
        T: DeserializeOwned,
    {
        let url = match cursor {
            Some(next) => next,
            None => format!("{base}?perPage={}&page=1", self.config.per_page),
        };
        debug!("GET {url}");

        let response = self.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;

        envelope.into_page()
    }

    async fn fetch_document<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        debug!("GET {url}");

        let response = self.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let document: Document<T> = serde_json::from_slice(&body)?;

        Ok(document.data)
    }

    /// Check that the API is reachable.
    pub async fn ping(&self) -> Result<(), Error> {
        let url = format!("{}/ping", self.config.base_url);
        debug!("GET {url}");
        self.get(&url).send().await?.error_for_status()?;
        Ok(())
    }

    /// All domains in the account, aggregated across pages.
    pub async fn list_domains(&self) -> Result<Vec<Domain>, Error> {
        let base = format!("{}/domains", self.config.base_url);
        paginate(|cursor| self.fetch_page(&base, cursor)).await
    }

    pub async fn get_domain(&self, domain_id: u64) -> Result<Domain, Error> {
        let url = format!("{}/domains/{domain_id}", self.config.base_url);
        self.fetch_document(&url).await
    }

    /// Name servers configured for the domain in the parent zone. These can
    /// differ from the NS records hosted in the zone itself.
    pub async fn get_nameservers(&self, domain_id: u64) -> Result<Vec<String>, Error> {
        let url = format!("{}/domains/{domain_id}/nameservers", self.config.base_url);
        let nameservers: Nameservers = self.fetch_document(&url).await?;
        Ok(nameservers.nameservers)
    }

    /// The domain's zone content as BIND-formatted text.
    pub async fn export_bind(&self, domain_id: u64) -> Result<String, Error> {
        let url = format!("{}/domains/{domain_id}/bind", self.config.base_url);
        debug!("GET {url}");
        let response = self.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }

    /// All DNS records in a domain, aggregated across pages.
    pub async fn list_records(&self, domain_id: u64) -> Result<Vec<DomainRecord>, Error> {
        let base = format!("{}/domains/{domain_id}/records", self.config.base_url);
        paginate(|cursor| self.fetch_page(&base, cursor)).await
    }

    pub async fn get_record(&self, domain_id: u64, record_id: u64) -> Result<DomainRecord, Error> {
        let url = format!(
            "{}/domains/{domain_id}/records/{record_id}",
            self.config.base_url
        );
        self.fetch_document(&url).await
    }

    /// All IP filters in the account, aggregated across pages.
    pub async fn list_ip_filters(&self) -> Result<Vec<IpFilter>, Error> {
        let base = format!("{}/ipfilters", self.config.base_url);
        paginate(|cursor| self.fetch_page(&base, cursor)).await
    }

    pub async fn get_ip_filter(&self, filter_id: u64) -> Result<IpFilter, Error> {
        let url = format!("{}/ipfilters/{filter_id}", self.config.base_url);
        self.fetch_document(&url).await
    }
}
