//! Server and site configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_AUTHORS: &str = "Sharief Reid, Jonathan Obas";
pub const DEFAULT_SITE_MENTOR: &str = "Dr. Juan Caraces-Mancilla";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR: {0}")]
    InvalidBindAddr(String),
}

/// Text shown in the page head and sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub authors: String,
    pub mentor: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: crate::report::REPORT_TITLE.to_owned(),
            authors: DEFAULT_SITE_AUTHORS.to_owned(),
            mentor: DEFAULT_SITE_MENTOR.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub site: SiteInfo,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT, site: SiteInfo::default() }
    }
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `SITE_TITLE`: default "Miami-Dade Traffic Analysis"
    /// - `SITE_AUTHORS`: default "Sharief Reid, Jonathan Obas"
    /// - `SITE_MENTOR`: default "Dr. Juan Caraces-Mancilla"
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `PORT` or `BIND_ADDR` is set but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_bind_addr(lookup("BIND_ADDR").as_deref())?;
        let port = parse_port(lookup("PORT").as_deref())?;
        let defaults = SiteInfo::default();
        let site = SiteInfo {
            title: non_blank(lookup("SITE_TITLE")).unwrap_or(defaults.title),
            authors: non_blank(lookup("SITE_AUTHORS")).unwrap_or(defaults.authors),
            mentor: non_blank(lookup("SITE_MENTOR")).unwrap_or(defaults.mentor),
        };
        Ok(Self { bind_addr, port, site })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Keep a `.env` load error worth reporting. A missing file is not one.
#[must_use]
pub fn dotenv_failure(result: Result<PathBuf, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(e) if e.not_found() => None,
        Err(e) => Some(e),
    }
}

fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort(v.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_BIND_ADDR),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidBindAddr(v.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
