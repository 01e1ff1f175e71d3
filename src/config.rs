use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub viacep_base_url: String,
    pub enable_logging: bool,
    pub poll_interval_ms: u32,
    pub mobile_breakpoint_px: f64,
    pub notification_timeout_ms: u32,
    pub map_config: MapConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            viacep_base_url: "https://viacep.com.br/ws".to_string(),
            enable_logging: true,
            poll_interval_ms: 5000,
            mobile_breakpoint_px: 800.0,
            notification_timeout_ms: 3000,
            map_config: MapConfig::default(),
        }
    }
}

/// Leaflet options for the regional dashboard, serialized as-is for the JS side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    pub center: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_bounds: [[f64; 2]; 2],
    pub max_bounds_viscosity: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            zoom: 3.0,
            min_zoom: 3.0,
            max_zoom: 10.0,
            max_bounds: [[-90.0, -180.0], [90.0, 180.0]],
            max_bounds_viscosity: 1.0,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "API_BASE_URL" => option_env!("API_BASE_URL"),
            "VIACEP_BASE_URL" => option_env!("VIACEP_BASE_URL"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "POLL_INTERVAL_MS" => option_env!("POLL_INTERVAL_MS"),
            "MOBILE_BREAKPOINT_PX" => option_env!("MOBILE_BREAKPOINT_PX"),
            "NOTIFICATION_TIMEOUT_MS" => option_env!("NOTIFICATION_TIMEOUT_MS"),
            "DEFAULT_MAP_ZOOM" => option_env!("DEFAULT_MAP_ZOOM"),
            "MAP_TILE_URL" => option_env!("MAP_TILE_URL"),
            _ => None,
        })
    }

    /// Same as `from_env`, with the variable source injected. Unparseable values fall back
    /// to the defaults.
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        let map_defaults = MapConfig::default();

        Self {
            api_base_url: lookup("API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            viacep_base_url: lookup("VIACEP_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.viacep_base_url),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            poll_interval_ms: lookup("POLL_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.poll_interval_ms),
            mobile_breakpoint_px: lookup("MOBILE_BREAKPOINT_PX")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.mobile_breakpoint_px),
            notification_timeout_ms: lookup("NOTIFICATION_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.notification_timeout_ms),
            map_config: MapConfig {
                zoom: lookup("DEFAULT_MAP_ZOOM")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(map_defaults.zoom),
                tile_url: lookup("MAP_TILE_URL")
                    .map(str::to_string)
                    .unwrap_or(map_defaults.tile_url.clone()),
                ..map_defaults
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Global configuration
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.api_base_url, "http://localhost:8080");
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.mobile_breakpoint_px, 800.0);
        assert_eq!(config.map_config.min_zoom, 3.0);
        assert_eq!(config.map_config.max_zoom, 10.0);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = AppConfig::from_lookup(|key| match key {
            "API_BASE_URL" => Some("https://api.example.com/"),
            "POLL_INTERVAL_MS" => Some("2500"),
            "ENABLE_LOGGING" => Some("false"),
            _ => None,
        });
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.poll_interval_ms, 2500);
        assert!(!config.is_logging_enabled());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_lookup(|key| match key {
            "POLL_INTERVAL_MS" => Some("0"),
            "MOBILE_BREAKPOINT_PX" => Some("wide"),
            _ => None,
        });
        assert_eq!(config.poll_interval_ms, 5000);
        assert_eq!(config.mobile_breakpoint_px, 800.0);
    }
}
