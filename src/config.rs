use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.dns.constellix.com/v4";
pub const DEFAULT_PER_PAGE: u32 = 50;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub secret_key: String,
    pub base_url: String,
    pub per_page: u32,
}

impl Config {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Config {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
        }
    }

    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Config {
            api_key: env::var("CONSTELLIX_API_KEY")?,
            secret_key: env::var("CONSTELLIX_SECRET_KEY")?,
            base_url: env::var("CONSTELLIX_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            per_page: env::var("CONSTELLIX_PER_PAGE")
                .unwrap_or_else(|_| DEFAULT_PER_PAGE.to_string())
                .parse()
                .unwrap_or(DEFAULT_PER_PAGE),
        })
    }
}
