use shared::AppConfig;

/// Build the app configuration from values baked in at compile time:
/// `RESERVATION_API_BASE_URL`, `RESERVATION_WINDOW_START` and
/// `RESERVATION_WINDOW_END`. Invalid values fall back to the defaults.
pub fn load_config() -> AppConfig {
    config_from(
        option_env!("RESERVATION_API_BASE_URL"),
        option_env!("RESERVATION_WINDOW_START"),
        option_env!("RESERVATION_WINDOW_END"),
    )
}

fn config_from(base_url: Option<&str>, start: Option<&str>, end: Option<&str>) -> AppConfig {
    match AppConfig::from_values(base_url, start, end) {
        Ok(config) => {
            log::info!(
                "Using {} with booking window {} to {}",
                config.api_base_url,
                config.booking_window.start(),
                config.booking_window.end()
            );
            config
        }
        Err(e) => {
            log::warn!("Invalid build configuration ({}), using defaults", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_invalid_values_fall_back_to_defaults() {
        let config = config_from(None, Some("2024-12-01"), Some("2024-11-01"));
        assert_eq!(config, AppConfig::default());
    }

    #[wasm_bindgen_test]
    fn test_overrides_applied() {
        let config = config_from(Some("http://localhost:3000"), None, None);
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.booking_window, AppConfig::default().booking_window);
    }
}
