#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned geographic extent, grown point by point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn from_point(point: LatLng) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Smallest bounds containing every point, or `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::from_point(first);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north_east.lat, self.south_west.lng)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south_west.lat, self.north_east.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_points_have_no_bounds() {
        assert_eq!(LatLngBounds::from_points(Vec::new()), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let pts = [
            LatLng::new(37.5665, 126.9780),
            LatLng::new(33.4996, 126.5312),
            LatLng::new(35.1796, 129.0756),
        ];
        let Some(bounds) = LatLngBounds::from_points(pts) else {
            panic!("expected bounds");
        };
        assert_eq!(bounds.south_west, LatLng::new(33.4996, 126.5312));
        assert_eq!(bounds.north_east, LatLng::new(37.5665, 129.0756));
        assert_eq!(bounds.north_west(), LatLng::new(37.5665, 126.5312));
        assert_eq!(bounds.south_east(), LatLng::new(33.4996, 129.0756));
    }
}
