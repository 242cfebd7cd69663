use anyhow::{bail, Context, Result};
use reqwest::Url;

/// Where the analysis service listens when nothing else is configured.
pub const DEFAULT_ANALYZE_URL: &str = "http://127.0.0.1:8000/analyze";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Fixed analysis endpoint every submission is POSTed to.
    pub analyze_url: Url,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let raw_url =
            std::env::var("ANALYZE_URL").unwrap_or_else(|_| DEFAULT_ANALYZE_URL.to_string());

        Ok(Config {
            analyze_url: parse_analyze_url(&raw_url)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn parse_analyze_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("ANALYZE_URL '{raw}' is not a valid absolute URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("ANALYZE_URL must use http or https, got '{}'", url.scheme());
    }
    Ok(url)
}
