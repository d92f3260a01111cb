use lighthouse_shared::LatLng;

use crate::tiles::TileSource;

pub const LIGHTHOUSES_URL: &str = "data/lighthouses_SouthKorea.geojson";

// Full-country South Korea view
pub const INITIAL_CENTER: LatLng = LatLng::new(36.35, 127.85);
pub const INITIAL_ZOOM: u8 = 7;
pub const MIN_ZOOM: u8 = 3;
pub const MAX_ZOOM: u8 = 16;

/// Minimum spacing between wheel-driven zoom steps.
pub const WHEEL_ZOOM_INTERVAL_MS: f64 = 250.0;
pub const KEYBOARD_PAN_PX: f64 = 80.0;

pub const MINIMAP_SIZE_PX: f64 = 150.0;
pub const MINIMAP_ZOOM_OFFSET: u8 = 5;

pub const SCALE_MAX_WIDTH_PX: f64 = 100.0;

/// Stamen Watercolor via Stadia Maps.
pub const WATERCOLOR: TileSource = TileSource {
    url_template: "https://tiles.stadiamaps.com/tiles/stamen_watercolor/{z}/{x}/{y}.jpg",
    subdomains: &[],
    max_zoom: 16,
    class_name: "watercolor-tiles",
    attribution: r#"&copy; <a href="https://stadiamaps.com/" target="_blank" rel="noopener">Stadia Maps</a> &copy; <a href="https://stamen.com/" target="_blank" rel="noopener">Stamen Design</a> &copy; <a href="https://www.openstreetmap.org/copyright" target="_blank" rel="noopener">OpenStreetMap</a>"#,
};

/// Plain OpenStreetMap tiles for the mini-map inset.
pub const OPENSTREETMAP: TileSource = TileSource {
    url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    subdomains: &["a", "b", "c"],
    max_zoom: 19,
    class_name: "minimap-tiles",
    attribution: "&copy; OpenStreetMap contributors",
};
