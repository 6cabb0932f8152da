//! Backend configuration from the environment.
//!
//! Native builds read `.env` (via `dotenvy`), an optional `cepre.toml` in the
//! working directory, and finally the `CEPRE_API_URL` variable, which wins.
//! Web builds cannot read the environment at runtime, so `CEPRE_API_URL` is
//! captured when the crate is compiled.

use store::PortalConfig;

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "CEPRE_API_URL";

/// Load the portal configuration for the current platform.
pub fn load_config() -> PortalConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        let config = read_config_file().unwrap_or_default();
        apply_overrides(config, std::env::var(API_URL_VAR).ok())
    }
    #[cfg(target_arch = "wasm32")]
    {
        apply_overrides(PortalConfig::default(), option_env!("CEPRE_API_URL").map(str::to_string))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<PortalConfig> {
    let text = std::fs::read_to_string(PortalConfig::filename()).ok()?;
    match PortalConfig::from_toml(&text) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Ignoring invalid {}: {}", PortalConfig::filename(), e);
            None
        }
    }
}

/// Apply an API URL override, ignoring blank values.
pub fn apply_overrides(mut config: PortalConfig, api_url: Option<String>) -> PortalConfig {
    if let Some(url) = api_url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty()) {
        config.api.base_url = url;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_replaces_base_url() {
        let config = apply_overrides(
            PortalConfig::default(),
            Some("https://api.cepre.pe ".to_string()),
        );
        assert_eq!(config.api.base_url, "https://api.cepre.pe");
    }

    #[test]
    fn test_blank_override_is_ignored() {
        let base = PortalConfig::default().with_base_url("https://from-file");
        let config = apply_overrides(base.clone(), Some("  ".to_string()));
        assert_eq!(config, base);
        assert_eq!(apply_overrides(base.clone(), None), base);
    }
}
