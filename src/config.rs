//! Client configuration
//!
//! Sources, later ones winning: built-in defaults, an optional TOML file
//! (`zagweb.toml` unless a path is given), then `ZAGWEB_*` environment
//! variables such as `ZAGWEB_JSESSIONID` or `ZAGWEB_COOKIES`.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::registration::DEFAULT_BASE_URL;

const DEFAULT_CONFIG_FILE: &str = "zagweb";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Portal root, without a trailing slash.
    pub base_url: String,

    /// Complete `Cookie` header value. Takes precedence over the parts below.
    #[serde(default)]
    pub cookies: Option<String>,

    /// Value of the `JSESSIONID` cookie copied from a logged-in browser.
    #[serde(default)]
    pub jsessionid: Option<String>,

    /// Value of the `X-Oracle-BMC-LBS-Route` load balancer cookie.
    #[serde(default)]
    pub lb_route: Option<String>,
}

impl ClientConfig {
    /// Load from `path` (or `zagweb.toml` if present) plus environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let file = match path {
            Some(path) => File::with_name(path),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        Self::from_builder(
            Config::builder()
                .add_source(file)
                .add_source(Environment::with_prefix("ZAGWEB")),
        )
    }

    /// Layers `builder` over the defaults, then validates.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.set_default("base_url", DEFAULT_BASE_URL)?.build()?;
        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// The `Cookie` header to send. Empty when nothing is configured, which
    /// only works where the transport supplies cookies itself.
    pub fn auth_cookies(&self) -> String {
        if let Some(cookies) = &self.cookies {
            return cookies.clone();
        }

        match (&self.jsessionid, &self.lb_route) {
            (Some(session), Some(route)) => {
                format!("JSESSIONID={session}; X-Oracle-BMC-LBS-Route={route};")
            }
            (Some(session), None) => format!("JSESSIONID={session};"),
            (None, Some(route)) => format!("X-Oracle-BMC-LBS-Route={route};"),
            (None, None) => String::new(),
        }
    }

    fn validate(&self) -> std::result::Result<(), config::ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "base_url cannot be empty".into(),
            ));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(config::ConfigError::Message(format!(
                "base_url must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }

        Ok(())
    }
}
