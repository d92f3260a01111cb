#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

use leptos::prelude::*;

use crate::viewport::{TILE_SIZE, Viewport};

/// A slippy-map raster tile provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSource {
    pub url_template: &'static str,
    pub subdomains: &'static [&'static str],
    pub max_zoom: u8,
    pub class_name: &'static str,
    pub attribution: &'static str,
}

impl TileSource {
    /// Expand `{s}`, `{z}`, `{x}` and `{y}` for one tile.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        let mut url = self
            .url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string());
        if !self.subdomains.is_empty() {
            let idx = (x as usize + y as usize) % self.subdomains.len();
            url = url.replace("{s}", self.subdomains[idx]);
        }
        url
    }
}

/// One tile positioned in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub key: String,
    pub url: String,
    pub left: f64,
    pub top: f64,
}

/// Tiles covering a `screen_w` × `screen_h` screen for the given view.
/// Columns wrap around the antimeridian; rows beyond the poles are dropped.
pub fn visible_tiles(
    source: &TileSource,
    viewport: &Viewport,
    screen_w: f64,
    screen_h: f64,
) -> Vec<PlacedTile> {
    let z = viewport.zoom.min(source.max_zoom);
    if z != viewport.zoom || screen_w <= 0.0 || screen_h <= 0.0 {
        return Vec::new();
    }

    let (ox, oy) = viewport.pixel_origin(screen_w, screen_h);
    let count = 1i64 << z;
    let min_col = (ox / TILE_SIZE).floor() as i64;
    let max_col = ((ox + screen_w) / TILE_SIZE).floor() as i64;
    let min_row = ((oy / TILE_SIZE).floor() as i64).max(0);
    let max_row = (((oy + screen_h) / TILE_SIZE).floor() as i64).min(count - 1);

    let mut tiles = Vec::new();
    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let wrapped = col.rem_euclid(count) as u32;
            tiles.push(PlacedTile {
                key: format!("{z}/{col}/{row}"),
                url: source.tile_url(z, wrapped, row as u32),
                left: col as f64 * TILE_SIZE - ox,
                top: row as f64 * TILE_SIZE - oy,
            });
        }
    }
    tiles
}

/// Raster tiles as absolutely positioned `<img>` elements.
#[component]
pub fn TileLayer(
    source: TileSource,
    #[prop(into)] viewport: Signal<Viewport>,
    #[prop(into)] size: Signal<(f64, f64)>,
) -> impl IntoView {
    let tiles = Memo::new(move |_| {
        let (w, h) = size.get();
        viewport.with(|vp| visible_tiles(&source, vp, w, h))
    });

    view! {
        <div class=source.class_name style="position: absolute; inset: 0; overflow: hidden; pointer-events: none;">
            <For
                each=move || tiles.get()
                key=|tile| tile.key.clone()
                children=move |tile| {
                    view! {
                        <img
                            src=tile.url
                            alt=""
                            draggable="false"
                            style=format!(
                                "position: absolute; left: {:.0}px; top: {:.0}px; width: {TILE_SIZE}px; height: {TILE_SIZE}px; user-select: none;",
                                tile.left,
                                tile.top,
                            )
                        />
                    }
                }
            />
        </div>
    }
}
