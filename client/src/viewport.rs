use std::f64::consts::PI;

use lighthouse_shared::{LatLng, LatLngBounds};

use crate::config::{INITIAL_CENTER, INITIAL_ZOOM, MAX_ZOOM, MIN_ZOOM};

pub const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;
const EARTH_CIRCUMFERENCE_M: f64 = 40_075_016.686;

/// Width in pixels of the whole Web Mercator world at `zoom`.
pub fn world_size(zoom: f64) -> f64 {
    TILE_SIZE * 2f64.powf(zoom)
}

/// Spherical Web Mercator: geographic position to world pixels at `zoom`.
pub fn project(point: LatLng, zoom: f64) -> (f64, f64) {
    let size = world_size(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = (point.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}

pub fn unproject(x: f64, y: f64, zoom: f64) -> LatLng {
    let size = world_size(zoom);
    let lng = x / size * 360.0 - 180.0;
    let n = PI - 2.0 * PI * y / size;
    let lat = n.sinh().atan().to_degrees();
    LatLng::new(lat, lng)
}

/// Viewport manages the pan/zoom transformation from geographic coordinates to screen pixels.
/// Zoom is always an integer level so raster tiles render at their native resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: u8,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: INITIAL_CENTER,
            zoom: INITIAL_ZOOM,
        }
    }
}

impl Viewport {
    pub fn zoom_f64(&self) -> f64 {
        f64::from(self.zoom)
    }

    /// World pixel shown at the screen's top-left corner.
    pub fn pixel_origin(&self, screen_w: f64, screen_h: f64) -> (f64, f64) {
        let (cx, cy) = project(self.center, self.zoom_f64());
        (cx - screen_w / 2.0, cy - screen_h / 2.0)
    }

    pub fn latlng_to_screen(&self, point: LatLng, screen_w: f64, screen_h: f64) -> (f64, f64) {
        let (px, py) = project(point, self.zoom_f64());
        let (ox, oy) = self.pixel_origin(screen_w, screen_h);
        (px - ox, py - oy)
    }

    pub fn screen_to_latlng(&self, sx: f64, sy: f64, screen_w: f64, screen_h: f64) -> LatLng {
        let (ox, oy) = self.pixel_origin(screen_w, screen_h);
        unproject(ox + sx, oy + sy, self.zoom_f64())
    }

    /// Geographic extent currently on screen.
    pub fn visible_bounds(&self, screen_w: f64, screen_h: f64) -> LatLngBounds {
        let mut bounds = LatLngBounds::from_point(self.screen_to_latlng(0.0, 0.0, screen_w, screen_h));
        bounds.extend(self.screen_to_latlng(screen_w, screen_h, screen_w, screen_h));
        bounds
    }

    /// Pan by screen-space delta (content follows the pointer).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        let zoom = self.zoom_f64();
        let (cx, cy) = project(self.center, zoom);
        let max_y = world_size(zoom);
        self.center = unproject(cx - dx, (cy - dy).clamp(0.0, max_y), zoom);
    }

    /// Zoom by whole levels toward a focus point (screen coordinates).
    /// Returns false when already at the zoom limit.
    pub fn zoom_at(&mut self, steps: i32, screen_x: f64, screen_y: f64, screen_w: f64, screen_h: f64) -> bool {
        let target = (i32::from(self.zoom) + steps).clamp(i32::from(MIN_ZOOM), i32::from(MAX_ZOOM)) as u8;
        if target == self.zoom {
            return false;
        }

        // Keep the point under the cursor fixed
        let focus = self.screen_to_latlng(screen_x, screen_y, screen_w, screen_h);
        let (fx, fy) = project(focus, f64::from(target));
        self.center = unproject(
            fx - (screen_x - screen_w / 2.0),
            fy - (screen_y - screen_h / 2.0),
            f64::from(target),
        );
        self.zoom = target;
        true
    }

    pub fn zoom_in(&mut self, screen_w: f64, screen_h: f64) -> bool {
        self.zoom_at(1, screen_w / 2.0, screen_h / 2.0, screen_w, screen_h)
    }

    pub fn zoom_out(&mut self, screen_w: f64, screen_h: f64) -> bool {
        self.zoom_at(-1, screen_w / 2.0, screen_h / 2.0, screen_w, screen_h)
    }

    /// Fit the viewport to show the given bounds inside a padded screen.
    /// Picks the deepest zoom at which the bounds still fit.
    pub fn fit_bounds(
        &mut self,
        bounds: LatLngBounds,
        padding: (f64, f64),
        screen_w: f64,
        screen_h: f64,
    ) {
        let avail_w = screen_w - padding.0 * 2.0;
        let avail_h = screen_h - padding.1 * 2.0;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return;
        }

        let zoom = (MIN_ZOOM..=MAX_ZOOM)
            .rev()
            .find(|&z| {
                let (x1, y1) = project(bounds.north_west(), f64::from(z));
                let (x2, y2) = project(bounds.south_east(), f64::from(z));
                x2 - x1 <= avail_w && y2 - y1 <= avail_h
            })
            .unwrap_or(MIN_ZOOM);

        let z = f64::from(zoom);
        let (x1, y1) = project(bounds.north_west(), z);
        let (x2, y2) = project(bounds.south_east(), z);
        self.center = unproject((x1 + x2) / 2.0, (y1 + y2) / 2.0, z);
        self.zoom = zoom;
    }

    /// Ground distance covered by one screen pixel at the view centre.
    pub fn meters_per_pixel(&self) -> f64 {
        EARTH_CIRCUMFERENCE_M * self.center.lat.to_radians().cos() / world_size(self.zoom_f64())
    }
}
