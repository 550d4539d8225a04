use crate::domain::chart::ChartStyles;
use crate::domain::map::{LatLng, MarkerStyle};
use serde::Deserialize;

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub api: ApiSettings,
    pub map: MapSettings,
    pub charts: ChartStyles,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MapSettings {
    /// Sent as `limit` on every map query; the map never asks for the full result set
    pub limit: u32,
    pub center: LatLng,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: u8,
    pub fit_padding: u32,
    pub marker: MarkerStyle,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            limit: 500,
            center: LatLng::new(34.05, -118.25),
            zoom: 10,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            max_zoom: 18,
            fit_padding: 50,
            marker: MarkerStyle::default(),
        }
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config: DashboardConfig = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.map.limit, 500);
        assert_eq!(config.map.fit_padding, 50);
        assert_eq!(config.map.marker.fill_color, "#ef4444");
        assert_eq!(config.charts.type_palette.len(), 10);
    }

    #[test]
    fn test_partial_file_overrides() {
        let toml = r##"
            [api]
            base_url = "http://stats.internal:8000"

            [map]
            limit = 200

            [map.marker]
            fill_color = "#000000"
        "##;
        let config: DashboardConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.api.base_url, "http://stats.internal:8000");
        assert_eq!(config.map.limit, 200);
        assert_eq!(config.map.zoom, 10);
        assert_eq!(config.map.marker.fill_color, "#000000");
        assert_eq!(config.map.marker.radius, 5.0);
    }
}
