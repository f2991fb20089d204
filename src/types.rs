use serde::Deserialize;
use serde_json::Value;

use crate::error::Error;
use crate::pagination::Page;

/// Collection envelope returned by list endpoints: the records themselves
/// plus pagination metadata.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize)]
pub struct Meta {
    pub links: Option<Links>,
}

#[derive(Debug, Deserialize)]
pub struct Links {
    pub next: Option<String>,
}

impl<T> Envelope<T> {
    /// Convert to a [`Page`]. An empty `data` array ends pagination even when
    /// a next link is present; a populated `data` array without `meta.links`
    /// is a malformed envelope and never yields a guessed cursor.
    pub fn into_page(self) -> Result<Page<T>, Error> {
        if self.data.is_empty() {
            return Ok(Page {
                items: self.data,
                next: None,
            });
        }

        let links = self
            .meta
            .and_then(|meta| meta.links)
            .ok_or(Error::MissingField("meta.links"))?;

        Ok(Page {
            items: self.data,
            next: links.next,
        })
    }
}

/// Single-resource envelope returned by detail endpoints.
#[derive(Debug, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

/// A domain in the account.
#[derive(Debug, Clone, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub enabled: bool,
    pub geoip: Option<Value>,
    pub gtd: Option<Value>,
    #[serde(default)]
    pub nameservers: Vec<String>,
    #[serde(rename = "vanityNameserver")]
    pub vanity_nameserver: Option<Value>,
    pub note: Option<String>,
}

/// A DNS record within a domain.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainRecord {
    pub id: u64,
    // Apex records come back with an empty name.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub mode: Option<String>,
    pub region: Option<String>,
    pub ipfilter: Option<Value>,
    #[serde(rename = "geoFailover")]
    pub geo_failover: Option<Value>,
    pub geoproximity: Option<Value>,
    // Shape varies by record type.
    pub value: Option<Value>,
    #[serde(rename = "lastValues")]
    pub last_values: Option<Value>,
    pub failover: Option<Value>,
}

/// An IP filter configured in the account.
#[derive(Debug, Clone, Deserialize)]
pub struct IpFilter {
    pub id: u64,
    pub name: String,
    #[serde(rename = "rulesLimit")]
    pub rules_limit: Option<u32>,
    pub continents: Option<Vec<String>>,
    pub countries: Option<Vec<String>>,
    pub asn: Option<Vec<u64>>,
    pub ipv4: Option<Vec<String>>,
    pub ipv6: Option<Vec<String>>,
    pub regions: Option<Value>,
}

/// Payload of `/domains/{id}/nameservers`: the delegation configured in the
/// parent zone, which may differ from the domain's own NS records.
#[derive(Debug, Deserialize)]
pub struct Nameservers {
    pub nameservers: Vec<String>,
}
