use crate::geo::LatLng;

/// Zoom at which minor cities join the major ones.
pub const MINOR_PLACES_MIN_ZOOM: f64 = 8.0;
pub const PLACE_LABEL_CLASS: &str = "place-label";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Place {
    pub name: &'static str,
    pub position: LatLng,
    pub major: bool,
}

const fn place(name: &'static str, lat: f64, lng: f64, major: bool) -> Place {
    Place {
        name,
        position: LatLng::new(lat, lng),
        major,
    }
}

/// Key places for proximity context.
pub const PLACES: &[Place] = &[
    place("Seoul", 37.5665, 126.9780, true),
    place("Incheon", 37.4563, 126.7052, true),
    place("Suwon", 37.2636, 127.0286, false),
    place("Daejeon", 36.3504, 127.3845, true),
    place("Daegu", 35.8722, 128.6025, true),
    place("Gwangju", 35.1595, 126.8526, true),
    place("Busan", 35.1796, 129.0756, true),
    place("Ulsan", 35.5384, 129.3114, false),
    place("Pohang", 36.0190, 129.3435, false),
    place("Jeonju", 35.8242, 127.1480, false),
    place("Jeju", 33.4996, 126.5312, true),
    place("Sokcho", 38.2070, 128.5918, false),
    place("Mokpo", 34.8118, 126.3922, false),
];

/// A non-interactive text label placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceLabel {
    pub name: &'static str,
    pub position: LatLng,
    pub class_name: &'static str,
}

pub fn visible_places(zoom: f64) -> impl Iterator<Item = &'static Place> {
    let show_minor = zoom >= MINOR_PLACES_MIN_ZOOM;
    PLACES.iter().filter(move |p| p.major || show_minor)
}

/// Labels currently on the map. Rebuilt from scratch on every refresh.
#[derive(Debug, Clone, Default)]
pub struct PlaceLabelLayer {
    labels: Vec<PlaceLabel>,
}

impl PlaceLabelLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, zoom: f64) -> &[PlaceLabel] {
        self.labels.clear();
        self.labels.extend(visible_places(zoom).map(|p| PlaceLabel {
            name: p.name,
            position: p.position,
            class_name: PLACE_LABEL_CLASS,
        }));
        &self.labels
    }

    pub fn labels(&self) -> &[PlaceLabel] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(labels: &[PlaceLabel]) -> Vec<&'static str> {
        labels.iter().map(|l| l.name).collect()
    }

    #[test]
    fn seven_major_places() {
        let majors: Vec<_> = PLACES.iter().filter(|p| p.major).map(|p| p.name).collect();
        assert_eq!(
            majors,
            vec!["Seoul", "Incheon", "Daejeon", "Daegu", "Gwangju", "Busan", "Jeju"]
        );
        assert_eq!(PLACES.len(), 13);
    }

    #[test]
    fn zoomed_out_shows_only_major() {
        let mut layer = PlaceLabelLayer::new();
        assert_eq!(layer.refresh(5.0).len(), 7);
        assert_eq!(layer.refresh(7.0).len(), 7);
        assert!(!names(layer.labels()).contains(&"Mokpo"));
    }

    #[test]
    fn minor_places_appear_at_threshold() {
        let mut layer = PlaceLabelLayer::new();
        assert_eq!(layer.refresh(8.0).len(), 13);
        assert!(names(layer.labels()).contains(&"Sokcho"));
        assert_eq!(layer.refresh(12.0).len(), 13);
    }

    #[test]
    fn refresh_replaces_previous_labels() {
        let mut layer = PlaceLabelLayer::new();
        layer.refresh(9.0);
        layer.refresh(9.0);
        assert_eq!(layer.labels().len(), 13);
        layer.refresh(6.0);
        assert_eq!(layer.labels().len(), 7);
        assert!(layer.labels().iter().all(|l| l.class_name == "place-label"));
    }
}
