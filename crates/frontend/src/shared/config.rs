//! Application configuration
//!
//! Created once in the root component and provided through context.

use leptos::prelude::*;

/// Backend origin used when `STOREFRONT_API_ORIGIN` is not set at build time
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8080";

/// Delay between the collapsed button and the checkmark after a successful login
pub const DEFAULT_CIRCLE_DELAY_MS: u32 = 400;

/// Time the checkmark stays visible before leaving the login page
pub const DEFAULT_SUCCESS_DELAY_MS: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_origin: String,
    pub circle_delay_ms: u32,
    pub success_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_origin(DEFAULT_API_ORIGIN)
    }
}

impl AppConfig {
    /// Reads the build-time origin override, falling back to the default.
    pub fn from_build_env() -> Self {
        match option_env!("STOREFRONT_API_ORIGIN") {
            Some(origin) if !origin.trim().is_empty() => Self::with_origin(origin),
            _ => Self::default(),
        }
    }

    pub fn with_origin(origin: &str) -> Self {
        Self {
            api_origin: origin.trim().trim_end_matches('/').to_string(),
            circle_delay_ms: DEFAULT_CIRCLE_DELAY_MS,
            success_delay_ms: DEFAULT_SUCCESS_DELAY_MS,
        }
    }

    /// Joins an API path such as `/categories` to the origin
    pub fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_origin, path)
        } else {
            format!("{}/{}", self.api_origin, path)
        }
    }

    /// URL of an image stored on the backend.
    ///
    /// Relative paths are appended to the origin; absolute URLs pass through.
    pub fn asset_url(&self, relative: &str) -> String {
        let relative = relative.trim();
        if relative.is_empty() {
            return String::new();
        }
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return relative.to_string();
        }
        self.api_url(relative)
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin_and_delays() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_origin, "http://localhost:8080");
        assert_eq!(cfg.circle_delay_ms, 400);
        assert_eq!(cfg.success_delay_ms, 1000);
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let cfg = AppConfig::with_origin("https://shop.example.com/ ");
        assert_eq!(cfg.api_url("/auth/login"), "https://shop.example.com/auth/login");
        assert_eq!(cfg.api_url("products"), "https://shop.example.com/products");
    }

    #[test]
    fn test_asset_url() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.asset_url("/images/cola.png"), "http://localhost:8080/images/cola.png");
        assert_eq!(cfg.asset_url(""), "");
        assert_eq!(cfg.asset_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }
}
