//! Client configuration.
//!
//! Values are baked in at build time (`KASHEER_API_HOST`,
//! `KASHEER_API_TOKEN`, `KASHEER_UTC_OFFSET_MINUTES`) and read once when
//! the app starts.

use contracts::shared::date_format::{DisplayZone, DEFAULT_UTC_OFFSET_MINUTES};

pub const DEFAULT_API_HOST: &str = "https://api.sandbox.kasheer.id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme and host, no trailing slash.
    pub host: String,
    pub token: String,
    pub display_zone: DisplayZone,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("KASHEER_API_HOST"),
            option_env!("KASHEER_API_TOKEN"),
            option_env!("KASHEER_UTC_OFFSET_MINUTES"),
        )
    }

    pub fn from_values(host: Option<&str>, token: Option<&str>, utc_offset: Option<&str>) -> Self {
        let host = host
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_API_HOST)
            .trim_end_matches('/')
            .to_string();

        let token = token.map(str::trim).unwrap_or_default().to_string();
        if token.is_empty() {
            log::warn!("KASHEER_API_TOKEN is not set; requests will be rejected");
        }

        let offset_minutes = match utc_offset.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid KASHEER_UTC_OFFSET_MINUTES '{}', using default", raw);
                DEFAULT_UTC_OFFSET_MINUTES
            }),
            None => DEFAULT_UTC_OFFSET_MINUTES,
        };

        Self {
            host,
            token,
            display_zone: DisplayZone::from_offset_minutes(offset_minutes),
        }
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }
}
